use crate::analysis::composition::{detect_team_composition, CompTier, CompositionAnalysis};
use crate::analysis::substitution::suggest_substitutions;
use crate::data::champions::ChampionBook;
use crate::data::stats::{Lane, Queue, StatsProvider};
use std::collections::HashMap;
use tracing::debug;

/// A roster averaging under this win rate is flagged as out of meta.
const OUT_OF_META_WIN_RATE: f64 = 0.49;

/// Reviews a full (or partial) role→champion roster against live statistics.
///
/// This is the team-planning variant of the tier calculation: confidence is
/// normalized by `n × 3` and the win-rate score is spread over a 0..100
/// scale before the 60/40 blend into `meta_score`. Those constants were
/// tuned against this scale specifically and are intentionally not shared
/// with the live-draft tier in `composition.rs`.
///
/// Returns `None` when no roster slot resolves to a champion.
pub fn review_roster(
    book: &ChampionBook,
    stats: &dyn StatsProvider,
    team: &HashMap<Lane, String>,
    queue: Queue,
) -> Option<CompositionAnalysis> {
    let mut tags = Vec::new();
    let mut win_rates = Vec::new();
    for lane in Lane::ALL {
        let Some(name) = team.get(&lane) else {
            continue;
        };
        tags.push(book.tags_of(name).to_vec());
        win_rates.push(stats.get_stats(name, Some(lane), queue).win_rate);
    }

    if win_rates.is_empty() {
        return None;
    }
    let count = win_rates.len() as f64;

    let detected = detect_team_composition(&tags);
    let max_confidence = count * 3.0;
    let fit_score = (detected.confidence / max_confidence * 100.0).clamp(0.0, 100.0);

    let avg_win_rate = win_rates.iter().sum::<f64>() / count;
    let wr_score = ((avg_win_rate - 0.45) * 1000.0).clamp(0.0, 100.0);

    let meta_score = (wr_score * 0.6 + fit_score * 0.4).round() as u32;
    let tier = if meta_score >= 85 {
        CompTier::S
    } else if meta_score >= 70 {
        CompTier::A
    } else if meta_score >= 55 {
        CompTier::B
    } else if meta_score >= 40 {
        CompTier::C
    } else {
        CompTier::D
    };

    debug!(
        archetype = detected.key.as_str(),
        meta_score,
        avg_win_rate,
        "reviewed roster"
    );

    Some(CompositionAnalysis {
        archetype: detected,
        tier,
        meta_score: Some(meta_score),
        is_out_of_meta: avg_win_rate < OUT_OF_META_WIN_RATE,
        suggestions: suggest_substitutions(book, stats, team, queue),
    })
}

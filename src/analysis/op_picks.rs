use crate::data::champions::ChampionBook;
use crate::data::stats::{Lane, Queue, StatsProvider};
use serde::Serialize;
use std::collections::HashSet;

const OP_WIN_RATE: f64 = 0.525;
const OP_MIN_MATCHES: u32 = 100;
const HIGH_TIER_BONUS: f64 = 5.0;
const MAX_PICKS: usize = 10;

/// A champion/role pair that is currently overperforming, with the internal
/// ranking score that ordered it.
#[derive(Debug, Clone, Serialize)]
pub struct OpPick {
    pub name: String,
    pub role: Lane,
    pub win_rate: f64,
    pub pick_rate: f64,
    pub matches: u32,
    pub tier: String,
    pub score: f64,
}

/// Ranks every known champion across all five roles by tier and win rate,
/// with no team context. A pair qualifies on a high tier label, or on raw
/// numbers (win rate over 52.5% across more than 100 matches). Each champion
/// appears at most once, in its highest-ranked role.
pub fn find_op_picks(
    book: &ChampionBook,
    stats: &dyn StatsProvider,
    queue: Queue,
) -> Vec<OpPick> {
    let mut picks = Vec::new();

    for name in book.names() {
        for lane in Lane::ALL {
            let entry = stats.get_stats(name, Some(lane), queue);
            if !entry.has_data {
                continue;
            }

            let high_tier = entry.tier == "S+" || entry.tier == "S";
            let op_numbers = entry.win_rate > OP_WIN_RATE && entry.matches > OP_MIN_MATCHES;
            if !high_tier && !op_numbers {
                continue;
            }

            let score = entry.win_rate * 100.0
                + entry.pick_rate * 10.0
                + if high_tier { HIGH_TIER_BONUS } else { 0.0 };
            picks.push(OpPick {
                name: name.to_string(),
                role: lane,
                win_rate: entry.win_rate,
                pick_rate: entry.pick_rate,
                matches: entry.matches,
                tier: entry.tier,
                score,
            });
        }
    }

    picks.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    // One entry per champion: the sort put its best role first.
    let mut seen: HashSet<String> = HashSet::new();
    picks.retain(|p| seen.insert(p.name.clone()));
    picks.truncate(MAX_PICKS);
    picks
}

use crate::data::champions::ChampionBook;
use crate::data::stats::{Lane, Queue, StatsProvider};
use serde::Serialize;
use std::collections::HashMap;

/// A roster slot is considered already strong above this win rate.
const STRONG_WIN_RATE: f64 = 0.52;
/// Replacements need real sample size behind them.
const MIN_MATCHES: u32 = 50;
/// And a meaningful improvement, in win-rate points. An improvement of
/// exactly 1.5 points does not qualify; the epsilon keeps f64 subtraction
/// (e.g. 0.515 − 0.50 = 0.015000000000000013) from slipping past that rule.
const MIN_IMPROVEMENT: f64 = 0.015;
const IMPROVEMENT_EPSILON: f64 = 1e-9;
/// At most this many suggestions across the whole team.
const MAX_SUGGESTIONS: usize = 3;

/// A proposed swap: bench `out`, pick up `replacement`, for a win-rate gain
/// of `diff_pct` percentage points.
#[derive(Debug, Clone, Serialize)]
pub struct Substitution {
    pub out: String,
    pub replacement: String,
    pub diff_pct: f64,
}

/// Scans a (possibly partial) role→champion roster for weak members and
/// proposes same-class, higher-win-rate replacements. At most one suggestion
/// per weak member, at most three team-wide, strongest improvement first.
pub fn suggest_substitutions(
    book: &ChampionBook,
    stats: &dyn StatsProvider,
    team: &HashMap<Lane, String>,
    queue: Queue,
) -> Vec<Substitution> {
    let taken: Vec<&str> = team.values().map(|s| s.as_str()).collect();
    let mut suggestions = Vec::new();

    for lane in Lane::ALL {
        let Some(member) = team.get(&lane) else {
            continue;
        };
        let member_wr = stats.get_stats(member, Some(lane), queue).win_rate;
        if member_wr > STRONG_WIN_RATE {
            continue;
        }

        let member_tags = book.tags_of(member);
        let Some(primary_tag) = member_tags.first() else {
            continue;
        };

        let mut best: Option<Substitution> = None;
        for candidate in book.names() {
            if taken.contains(&candidate) {
                continue;
            }
            let entry = stats.get_stats(candidate, Some(lane), queue);
            if entry.matches < MIN_MATCHES {
                continue;
            }
            if entry.win_rate - member_wr <= MIN_IMPROVEMENT + IMPROVEMENT_EPSILON {
                continue;
            }
            if !book.tags_of(candidate).iter().any(|t| t == primary_tag) {
                continue;
            }

            let diff_pct = (entry.win_rate - member_wr) * 100.0;
            if best.as_ref().map(|b| diff_pct > b.diff_pct).unwrap_or(true) {
                best = Some(Substitution {
                    out: member.clone(),
                    replacement: candidate.to_string(),
                    diff_pct,
                });
            }
        }

        if let Some(sub) = best {
            suggestions.push(sub);
        }
    }

    suggestions.sort_by(|a, b| {
        b.diff_pct
            .partial_cmp(&a.diff_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::{StatsTable, WinRateEntry};

    fn entry(win_rate: f64, matches: u32) -> WinRateEntry {
        WinRateEntry {
            win_rate,
            matches,
            has_data: true,
            ..Default::default()
        }
    }

    fn fixture() -> (ChampionBook, StatsTable) {
        let mut book = ChampionBook::new();
        book.insert(54, "Malphite", vec!["Tank".into(), "Mage".into()]);
        book.insert(57, "Maokai", vec!["Tank".into(), "Mage".into()]);
        book.insert(98, "Shen", vec!["Tank".into()]);
        book.insert(103, "Ahri", vec!["Mage".into(), "Assassin".into()]);

        let mut stats = StatsTable::new();
        stats.insert("Malphite", Some(Lane::Top), Queue::Solo, entry(0.48, 900));
        stats.insert("Maokai", Some(Lane::Top), Queue::Solo, entry(0.53, 800));
        stats.insert("Shen", Some(Lane::Top), Queue::Solo, entry(0.51, 700));
        stats.insert("Ahri", Some(Lane::Top), Queue::Solo, entry(0.60, 500));
        (book, stats)
    }

    #[test]
    fn proposes_same_class_upgrade_for_weak_member() {
        let (book, stats) = fixture();
        let team = HashMap::from([(Lane::Top, "Malphite".to_string())]);

        let subs = suggest_substitutions(&book, &stats, &team, Queue::Solo);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].out, "Malphite");
        // Ahri is stronger but shares no Tank tag; Maokai is the best
        // qualifying replacement.
        assert_eq!(subs[0].replacement, "Maokai");
        assert!((subs[0].diff_pct - 5.0).abs() < 1e-9);
    }

    #[test]
    fn strong_members_are_left_alone() {
        let (book, stats) = fixture();
        let team = HashMap::from([(Lane::Top, "Maokai".to_string())]);
        assert!(suggest_substitutions(&book, &stats, &team, Queue::Solo).is_empty());
    }

    #[test]
    fn never_proposes_a_champion_already_in_the_team() {
        let (book, mut stats) = fixture();
        stats.insert("Maokai", Some(Lane::Jungle), Queue::Solo, entry(0.45, 600));
        let team = HashMap::from([
            (Lane::Top, "Malphite".to_string()),
            (Lane::Jungle, "Maokai".to_string()),
        ]);

        let subs = suggest_substitutions(&book, &stats, &team, Queue::Solo);
        for sub in &subs {
            assert_ne!(sub.replacement, "Malphite");
            assert_ne!(sub.replacement, "Maokai");
        }
    }

    #[test]
    fn rejects_thin_samples_and_marginal_improvements() {
        let mut book = ChampionBook::new();
        book.insert(54, "Malphite", vec!["Tank".into()]);
        book.insert(57, "Maokai", vec!["Tank".into()]);
        book.insert(98, "Shen", vec!["Tank".into()]);

        let mut stats = StatsTable::new();
        stats.insert("Malphite", Some(Lane::Top), Queue::Solo, entry(0.50, 900));
        // Big improvement, too few matches.
        stats.insert("Maokai", Some(Lane::Top), Queue::Solo, entry(0.58, 49));
        // Enough matches, improvement is exactly the threshold (not over).
        stats.insert("Shen", Some(Lane::Top), Queue::Solo, entry(0.515, 700));

        let team = HashMap::from([(Lane::Top, "Malphite".to_string())]);
        assert!(suggest_substitutions(&book, &stats, &team, Queue::Solo).is_empty());

        // Just over the threshold qualifies.
        book.insert(516, "Ornn", vec!["Tank".into()]);
        stats.insert("Ornn", Some(Lane::Top), Queue::Solo, entry(0.517, 700));
        let subs = suggest_substitutions(&book, &stats, &team, Queue::Solo);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].replacement, "Ornn");
    }

    #[test]
    fn keeps_only_the_three_largest_improvements() {
        let mut book = ChampionBook::new();
        let weak = [
            (Lane::Top, "Malphite"),
            (Lane::Jungle, "Sejuani"),
            (Lane::Mid, "Galio"),
            (Lane::Support, "Leona"),
        ];
        let upgrades = [
            (Lane::Top, "Maokai", 0.54),
            (Lane::Jungle, "Zac", 0.55),
            (Lane::Mid, "Cho'Gath", 0.56),
            (Lane::Support, "Alistar", 0.57),
        ];
        let mut stats = StatsTable::new();
        let mut id = 1;
        for (lane, name) in weak {
            book.insert(id, name, vec!["Tank".into()]);
            stats.insert(name, Some(lane), Queue::Solo, entry(0.48, 500));
            id += 1;
        }
        for (lane, name, wr) in upgrades {
            book.insert(id, name, vec!["Tank".into()]);
            stats.insert(name, Some(lane), Queue::Solo, entry(wr, 500));
            id += 1;
        }

        let team: HashMap<Lane, String> = weak
            .iter()
            .map(|(lane, name)| (*lane, name.to_string()))
            .collect();
        let subs = suggest_substitutions(&book, &stats, &team, Queue::Solo);

        assert_eq!(subs.len(), 3);
        assert_eq!(subs[0].replacement, "Alistar");
        assert_eq!(subs[1].replacement, "Cho'Gath");
        assert_eq!(subs[2].replacement, "Zac");
    }
}

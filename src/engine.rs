use crate::analysis::composition::{composition_tier, CompTier, CompositionAnalysis, TeamMember};
use crate::analysis::op_picks::{find_op_picks, OpPick};
use crate::analysis::scorer::{score_draft, DraftContext, DraftRecommendations};
use crate::analysis::substitution::{suggest_substitutions, Substitution};
use crate::analysis::{composition, roster_review};
use crate::data::champions::ChampionBook;
use crate::data::counters::CounterDb;
use crate::data::stats::{Lane, Queue, StatsProvider};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::info;

/// Write-once bundle of the static knowledge the engine computes over:
/// champion metadata and the curated counter/synergy table. Replaced
/// wholesale when fresh data is imported, never edited in place.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub champions: ChampionBook,
    pub counters: CounterDb,
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(champions: ChampionBook, counters: CounterDb) -> Self {
        Snapshot {
            champions,
            counters,
            loaded_at: Utc::now(),
        }
    }
}

/// The draft decision-support engine. Synchronous and re-entrant: every
/// entry point is a pure computation over the installed snapshot, the stats
/// provider and the call's own inputs.
///
/// Before a snapshot is installed every entry point degrades to an empty or
/// neutral result; nothing here ever fails on missing data.
pub struct DraftEngine {
    snapshot: Option<Snapshot>,
    stats: Box<dyn StatsProvider>,
}

impl DraftEngine {
    pub fn new(stats: Box<dyn StatsProvider>) -> Self {
        DraftEngine {
            snapshot: None,
            stats,
        }
    }

    pub fn with_snapshot(stats: Box<dyn StatsProvider>, snapshot: Snapshot) -> Self {
        let mut engine = DraftEngine::new(stats);
        engine.install_snapshot(snapshot);
        engine
    }

    /// Installs (or wholesale-replaces) the static knowledge snapshot.
    pub fn install_snapshot(&mut self, snapshot: Snapshot) {
        info!(
            champions = snapshot.champions.len(),
            counter_records = snapshot.counters.len(),
            "snapshot installed"
        );
        self.snapshot = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Resolves a champion id from the session feed to its name.
    pub fn champion_name(&self, id: i32) -> Option<&str> {
        self.snapshot.as_ref().and_then(|s| s.champions.name_of(id))
    }

    /// Ranks the remaining champions for the given draft context and
    /// classifies the current ally composition. The top entry point of the
    /// live-draft view.
    pub fn recommend(&self, ctx: &DraftContext) -> DraftRecommendations {
        match &self.snapshot {
            Some(snapshot) => score_draft(&snapshot.champions, &snapshot.counters, self.stats.as_ref(), ctx),
            None => DraftRecommendations {
                recommendations: Vec::new(),
                composition: empty_analysis(),
            },
        }
    }

    /// Per-team tier for a set of champion ids (the live-draft variant of
    /// the tier calculation).
    pub fn composition_tier(&self, champion_ids: &[i32], queue: Queue) -> CompTier {
        let Some(snapshot) = &self.snapshot else {
            return CompTier::D;
        };

        let members: Vec<TeamMember> = champion_ids
            .iter()
            .filter_map(|id| snapshot.champions.name_of(*id))
            .map(|name| {
                let entry = self.stats.get_stats(name, None, queue);
                TeamMember {
                    tags: snapshot.champions.tags_of(name).to_vec(),
                    win_rate: entry.has_data.then_some(entry.win_rate),
                }
            })
            .collect();
        composition_tier(&members)
    }

    /// Full-roster review for the team-planning view: archetype, meta score,
    /// tier, out-of-meta flag and up to three substitution suggestions.
    /// `None` when the roster is empty or no snapshot is installed.
    pub fn review_roster(
        &self,
        team: &HashMap<Lane, String>,
        queue: Queue,
    ) -> Option<CompositionAnalysis> {
        let snapshot = self.snapshot.as_ref()?;
        roster_review::review_roster(&snapshot.champions, self.stats.as_ref(), team, queue)
    }

    /// Standalone substitution pass over a role→champion roster.
    pub fn suggest_substitutions(
        &self,
        team: &HashMap<Lane, String>,
        queue: Queue,
    ) -> Vec<Substitution> {
        match &self.snapshot {
            Some(snapshot) => {
                suggest_substitutions(&snapshot.champions, self.stats.as_ref(), team, queue)
            }
            None => Vec::new(),
        }
    }

    /// Context-free scan for currently overperforming picks.
    pub fn find_op_picks(&self, queue: Queue) -> Vec<OpPick> {
        match &self.snapshot {
            Some(snapshot) => find_op_picks(&snapshot.champions, self.stats.as_ref(), queue),
            None => Vec::new(),
        }
    }
}

fn empty_analysis() -> CompositionAnalysis {
    CompositionAnalysis {
        archetype: composition::detect_team_composition(&[]),
        tier: CompTier::D,
        meta_score: None,
        is_out_of_meta: false,
        suggestions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::counters::CounterSynergyRecord;
    use crate::data::stats::{StatsTable, WinRateEntry};

    #[test]
    fn uninitialized_engine_degrades_to_empty_results() {
        let engine = DraftEngine::new(Box::new(StatsTable::new()));

        let out = engine.recommend(&DraftContext::default());
        assert!(out.recommendations.is_empty());
        assert_eq!(out.composition.archetype.key, "unknown");
        assert_eq!(engine.composition_tier(&[54, 57], Queue::Solo), CompTier::D);
        assert!(engine.review_roster(&HashMap::new(), Queue::Solo).is_none());
        assert!(engine.find_op_picks(Queue::Solo).is_empty());
    }

    #[test]
    fn snapshot_replacement_is_wholesale() {
        let mut old_book = ChampionBook::new();
        old_book.insert(1, "Annie", vec![]);
        let mut engine = DraftEngine::with_snapshot(
            Box::new(StatsTable::new()),
            Snapshot::new(old_book, CounterDb::new()),
        );
        assert_eq!(engine.champion_name(1), Some("Annie"));

        let mut new_book = ChampionBook::new();
        new_book.insert(2, "Olaf", vec![]);
        engine.install_snapshot(Snapshot::new(new_book, CounterDb::new()));

        assert_eq!(engine.champion_name(2), Some("Olaf"));
        assert_eq!(engine.champion_name(1), None);
    }

    #[test]
    fn composition_tier_resolves_ids_through_the_book() {
        let mut book = ChampionBook::new();
        let mut stats = StatsTable::new();
        for id in 1..=5 {
            let name = format!("Tank{}", id);
            book.insert(id, &name, vec!["Tank".into()]);
            stats.insert(
                &name,
                None,
                Queue::Solo,
                WinRateEntry {
                    win_rate: 0.60,
                    has_data: true,
                    ..Default::default()
                },
            );
        }
        let engine =
            DraftEngine::with_snapshot(Box::new(stats), Snapshot::new(book, CounterDb::new()));

        assert_eq!(
            engine.composition_tier(&[1, 2, 3, 4, 5], Queue::Solo),
            CompTier::S
        );
    }

    #[test]
    fn recommend_runs_end_to_end_over_a_snapshot() {
        let mut book = ChampionBook::new();
        book.insert(54, "Malphite", vec!["Tank".into()]);
        book.insert(103, "Ahri", vec!["Mage".into()]);

        let mut counters = CounterDb::new();
        counters.insert(
            "Malphite",
            CounterSynergyRecord {
                roles: vec![Lane::Top],
                ..Default::default()
            },
        );
        counters.insert(
            "Ahri",
            CounterSynergyRecord {
                roles: vec![Lane::Mid],
                ..Default::default()
            },
        );

        let mut stats = StatsTable::new();
        stats.insert(
            "Malphite",
            Some(Lane::Top),
            Queue::Solo,
            WinRateEntry {
                win_rate: 0.54,
                matches: 600,
                has_data: true,
                ..Default::default()
            },
        );

        let engine =
            DraftEngine::with_snapshot(Box::new(stats), Snapshot::new(book, counters));

        let ctx = DraftContext {
            role: Some(Lane::Top),
            ..Default::default()
        };
        let out = engine.recommend(&ctx);
        assert_eq!(out.recommendations.len(), 1);
        assert_eq!(out.recommendations[0].name, "Malphite");
        assert!(out.recommendations[0].score > 0.0);
    }
}

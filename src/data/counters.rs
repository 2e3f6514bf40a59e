use crate::data::stats::Lane;
use crate::error::AdvisorError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Curated matchup knowledge for one champion: the roles it is considered
/// playable in, win rates against specific enemies, and win rates alongside
/// specific allies. All rates are in `[0, 1]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterSynergyRecord {
    #[serde(default)]
    pub roles: Vec<Lane>,
    #[serde(default)]
    pub counters: HashMap<String, f64>,
    #[serde(default)]
    pub synergies: HashMap<String, f64>,
}

/// Per-call overlay of scraped counter data: champion → enemy → win rate.
/// Entries here take precedence over the static table on key collision.
pub type DynamicCounters = HashMap<String, HashMap<String, f64>>;

/// The static counters/synergies table, keyed by champion name. Installed
/// once per snapshot and only ever replaced wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterDb {
    records: HashMap<String, CounterSynergyRecord>,
}

impl CounterDb {
    pub fn new() -> Self {
        CounterDb::default()
    }

    pub fn from_json(json: &str) -> Result<Self, AdvisorError> {
        let records: HashMap<String, CounterSynergyRecord> = serde_json::from_str(json)
            .map_err(|e| AdvisorError::Json(format!("Failed to parse counter table: {}", e)))?;
        Ok(CounterDb { records })
    }

    pub fn insert(&mut self, champion: &str, record: CounterSynergyRecord) {
        self.records.insert(champion.to_string(), record);
    }

    pub fn record(&self, champion: &str) -> Option<&CounterSynergyRecord> {
        self.records.get(champion)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Matchup win rate of `champion` into `enemy`. The dynamic overlay is
    /// consulted first, the static table second.
    pub fn counter_win_rate(
        &self,
        champion: &str,
        enemy: &str,
        dynamic: &DynamicCounters,
    ) -> Option<f64> {
        if let Some(scraped) = dynamic.get(champion).and_then(|m| m.get(enemy)) {
            return Some(*scraped);
        }
        self.records
            .get(champion)
            .and_then(|r| r.counters.get(enemy))
            .copied()
    }

    /// Pairing win rate of `champion` with `ally`, read from the champion's
    /// own synergy map first and the ally's record as a fallback.
    pub fn synergy_win_rate(&self, champion: &str, ally: &str) -> Option<f64> {
        if let Some(rate) = self
            .records
            .get(champion)
            .and_then(|r| r.synergies.get(ally))
        {
            return Some(*rate);
        }
        self.records
            .get(ally)
            .and_then(|r| r.synergies.get(champion))
            .copied()
    }
}

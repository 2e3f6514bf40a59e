use crate::error::AdvisorError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Matchmaking queue under which win-rate statistics were recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Queue {
    Solo,
    Flex,
}

impl Queue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Queue::Solo => "solo",
            Queue::Flex => "flex",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AdvisorError> {
        match s.to_lowercase().as_str() {
            "solo" | "soloq" | "ranked_solo" => Ok(Queue::Solo),
            "flex" | "ranked_flex" => Ok(Queue::Flex),
            other => Err(AdvisorError::UnknownQueue(other.to_string())),
        }
    }
}

impl Default for Queue {
    fn default() -> Self {
        Queue::Solo
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five draft positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Lane {
    pub const ALL: [Lane; 5] = [Lane::Top, Lane::Jungle, Lane::Mid, Lane::Adc, Lane::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Top => "top",
            Lane::Jungle => "jungle",
            Lane::Mid => "mid",
            Lane::Adc => "adc",
            Lane::Support => "support",
        }
    }

    /// Accepts both position names ("MIDDLE", "BOTTOM", "UTILITY") and role
    /// names ("MID", "ADC", "SUPPORT") as the game client reports them.
    pub fn parse(s: &str) -> Result<Self, AdvisorError> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Lane::Top),
            "jungle" | "jgl" => Ok(Lane::Jungle),
            "mid" | "middle" => Ok(Lane::Mid),
            "adc" | "bottom" | "bot" => Ok(Lane::Adc),
            "support" | "utility" | "sup" => Ok(Lane::Support),
            other => Err(AdvisorError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One win-rate observation for (champion, role, queue). All rates are in
/// `[0, 1]`. A missing provider entry is represented by the neutral default
/// with `has_data = false`, never by an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinRateEntry {
    pub win_rate: f64,
    pub pick_rate: f64,
    pub ban_rate: f64,
    pub tier: String,
    pub matches: u32,
    pub has_data: bool,
}

impl Default for WinRateEntry {
    fn default() -> Self {
        WinRateEntry {
            win_rate: 0.5,
            pick_rate: 0.0,
            ban_rate: 0.0,
            tier: String::new(),
            matches: 0,
            has_data: false,
        }
    }
}

/// Read-only seam to whatever populated the statistics (an importer, a
/// scraper, a fixture). `role = None` queries the aggregate "all roles" row.
pub trait StatsProvider {
    fn get_stats(&self, champion: &str, role: Option<Lane>, queue: Queue) -> WinRateEntry;

    /// Champion names the provider has real data for, optionally narrowed to
    /// one role.
    fn imported_names(&self, queue: Queue, role: Option<Lane>) -> Vec<String>;
}

/// In-memory provider backed by a plain map, the shape the import tooling
/// hands over after a refresh.
#[derive(Debug, Default)]
pub struct StatsTable {
    entries: HashMap<(String, Option<Lane>, Queue), WinRateEntry>,
}

impl StatsTable {
    pub fn new() -> Self {
        StatsTable {
            entries: HashMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        champion: &str,
        role: Option<Lane>,
        queue: Queue,
        entry: WinRateEntry,
    ) {
        self.entries
            .insert((champion.to_string(), role, queue), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StatsProvider for StatsTable {
    fn get_stats(&self, champion: &str, role: Option<Lane>, queue: Queue) -> WinRateEntry {
        self.entries
            .get(&(champion.to_string(), role, queue))
            .cloned()
            .unwrap_or_default()
    }

    fn imported_names(&self, queue: Queue, role: Option<Lane>) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .keys()
            .filter(|(_, r, q)| *q == queue && *r == role)
            .map(|(name, _, _)| name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

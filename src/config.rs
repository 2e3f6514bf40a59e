use crate::data::stats::{Lane, Queue};
use crate::error::AdvisorError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Process-level settings read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Default queue for stat lookups when the host does not say otherwise.
    pub queue: Queue,
    /// Override for the roster file location.
    pub roster_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, AdvisorError> {
        dotenvy::dotenv().ok();

        let queue = match env::var("DRAFT_QUEUE") {
            Ok(value) => Queue::parse(&value)
                .map_err(|_| AdvisorError::Config(format!("Invalid DRAFT_QUEUE: {}", value)))?,
            Err(_) => Queue::Solo,
        };
        let roster_path = env::var("DRAFT_ROSTER_PATH").ok().map(PathBuf::from);

        Ok(Settings { queue, roster_path })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleRoster {
    #[serde(default)]
    pub favorites: Vec<String>,
}

/// Persisted team roster: who mains which role and which champions each role
/// prefers. Consulted by the scorer for favorite bonuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub my_role: Lane,
    pub game_mode: Queue,
    #[serde(default)]
    pub roster: HashMap<Lane, RoleRoster>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl RosterConfig {
    pub fn new(my_role: Lane, game_mode: Queue) -> Self {
        RosterConfig {
            my_role,
            game_mode,
            roster: HashMap::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn add_favorite(&mut self, lane: Lane, champion: &str) {
        let entry = self.roster.entry(lane).or_default();
        if !entry.favorites.iter().any(|f| f == champion) {
            entry.favorites.push(champion.to_string());
        }
    }

    pub fn favorites(&self, lane: Lane) -> &[String] {
        self.roster
            .get(&lane)
            .map(|r| r.favorites.as_slice())
            .unwrap_or(&[])
    }

    pub fn default_path() -> PathBuf {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".draft_advisor");

        let _ = fs::create_dir_all(&config_dir);

        config_dir.join("roster.json")
    }

    /// Loads the roster file, or a fresh default when none exists yet.
    pub fn load(path: Option<&Path>) -> Result<Self, AdvisorError> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path);

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| AdvisorError::Json(format!("Failed to parse roster: {}", e))),
            Err(_) => Ok(RosterConfig::new(Lane::Mid, Queue::Solo)),
        }
    }

    pub fn save(&self, path: Option<&Path>) -> Result<(), AdvisorError> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path);

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AdvisorError::Json(format!("Failed to serialize roster: {}", e)))?;
        fs::write(&path, json)
            .map_err(|e| AdvisorError::Io(format!("Failed to write roster: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorites_default_to_empty_for_unconfigured_lanes() {
        let roster = RosterConfig::new(Lane::Mid, Queue::Solo);
        assert!(roster.favorites(Lane::Top).is_empty());
    }

    #[test]
    fn add_favorite_deduplicates() {
        let mut roster = RosterConfig::new(Lane::Mid, Queue::Solo);
        roster.add_favorite(Lane::Mid, "Ahri");
        roster.add_favorite(Lane::Mid, "Ahri");
        assert_eq!(roster.favorites(Lane::Mid), &["Ahri".to_string()]);
    }

    #[test]
    fn roster_round_trips_through_json() {
        let mut roster = RosterConfig::new(Lane::Support, Queue::Flex);
        roster.add_favorite(Lane::Adc, "Kog'Maw");
        roster.add_favorite(Lane::Support, "Lulu");

        let json = serde_json::to_string(&roster).unwrap();
        let back: RosterConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.my_role, Lane::Support);
        assert_eq!(back.game_mode, Queue::Flex);
        assert_eq!(back.favorites(Lane::Adc), &["Kog'Maw".to_string()]);
    }

    #[test]
    fn malformed_roster_payload_is_a_config_error() {
        let err = serde_json::from_str::<RosterConfig>("{\"my_role\": \"fountain\"}");
        assert!(err.is_err());
    }
}

use crate::analysis::tags::CompositionRole;
use crate::data::stats::Lane;
use crate::error::AdvisorError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use CompositionRole::*;

/// A named team-composition pattern, defined by the composition roles it
/// requires and the ones that merely reinforce it.
#[derive(Debug, Clone, Copy)]
pub struct Archetype {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub desc: &'static str,
    pub required: &'static [CompositionRole],
    pub bonus: &'static [CompositionRole],
}

/// Built-in archetypes in priority order. Declaration order is a contract:
/// the detector keeps the first archetype on equal scores.
pub const BUILTINS: [Archetype; 6] = [
    Archetype {
        key: "hardEngage",
        name: "Hard Engage",
        icon: "⚔️",
        desc: "Force fights with layered engage and a durable frontline",
        required: &[Engage, Frontline],
        bonus: &[Teamfight, Dive],
    },
    Archetype {
        key: "protect",
        name: "Protect the Carry",
        icon: "🛡️",
        desc: "Funnel resources into one hypercarry and keep it alive",
        required: &[Protect, Hypercarry],
        bonus: &[Frontline, AntiEngage],
    },
    Archetype {
        key: "dive",
        name: "Dive",
        icon: "🦈",
        desc: "Collapse on the enemy backline with mobile threats",
        required: &[Dive, Pick],
        bonus: &[Bruiser, Engage],
    },
    Archetype {
        key: "poke",
        name: "Poke & Siege",
        icon: "🏹",
        desc: "Chip the enemy down at range before objectives",
        required: &[Poke, AntiEngage],
        bonus: &[Teamfight, Protect],
    },
    Archetype {
        key: "splitpush",
        name: "Split Push",
        icon: "🗺️",
        desc: "Create pressure in two lanes and trade objectives",
        required: &[Bruiser, Dps],
        bonus: &[Pick, Dive],
    },
    Archetype {
        key: "teamfight",
        name: "Teamfight",
        icon: "💥",
        desc: "Win coordinated 5v5s around area damage",
        required: &[Teamfight, Frontline],
        bonus: &[Engage, Protect],
    },
];

/// Looks a built-in up by key or display name.
pub fn builtin(key_or_name: &str) -> Option<&'static Archetype> {
    BUILTINS
        .iter()
        .find(|a| a.key == key_or_name || a.name == key_or_name)
}

/// A user-defined archetype, loaded from configuration. `typical_comp` maps
/// each lane to the champion planned for it; a trailing `*` marks the pick
/// as flexible across roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomArchetype {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub required_roles: Vec<CompositionRole>,
    #[serde(default)]
    pub bonus_roles: Vec<CompositionRole>,
    #[serde(default)]
    pub typical_comp: HashMap<Lane, String>,
}

impl CustomArchetype {
    pub fn from_json(json: &str) -> Result<Self, AdvisorError> {
        serde_json::from_str(json)
            .map_err(|e| AdvisorError::Json(format!("Failed to parse archetype: {}", e)))
    }

    /// The champion planned for `lane`, with its flex marker split off.
    pub fn planned_pick(&self, lane: Lane) -> Option<(&str, bool)> {
        self.typical_comp.get(&lane).map(|name| {
            match name.strip_suffix('*') {
                Some(stripped) => (stripped, true),
                None => (name.as_str(), false),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_in_priority_order() {
        let keys: Vec<&str> = BUILTINS.iter().map(|a| a.key).collect();
        assert_eq!(
            keys,
            vec!["hardEngage", "protect", "dive", "poke", "splitpush", "teamfight"]
        );
    }

    #[test]
    fn builtin_lookup_accepts_key_or_name() {
        assert_eq!(builtin("hardEngage").unwrap().name, "Hard Engage");
        assert_eq!(builtin("Poke & Siege").unwrap().key, "poke");
        assert!(builtin("cheese").is_none());
    }

    #[test]
    fn custom_archetype_parses_with_flex_marker() {
        let json = r#"{
            "key": "myComp",
            "name": "My Comp",
            "required_roles": ["engage", "anti-engage"],
            "typical_comp": { "jungle": "Gragas*", "mid": "Orianna" }
        }"#;
        let custom = CustomArchetype::from_json(json).unwrap();
        assert_eq!(custom.planned_pick(Lane::Jungle), Some(("Gragas", true)));
        assert_eq!(custom.planned_pick(Lane::Mid), Some(("Orianna", false)));
        assert_eq!(custom.planned_pick(Lane::Top), None);
        assert_eq!(
            custom.required_roles,
            vec![CompositionRole::Engage, CompositionRole::AntiEngage]
        );
    }
}

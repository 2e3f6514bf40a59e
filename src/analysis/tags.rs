use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract tactical function a champion can fulfil in a team composition.
/// Derived from class tags, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositionRole {
    Engage,
    Frontline,
    Dive,
    Bruiser,
    Poke,
    Teamfight,
    Pick,
    Hypercarry,
    Dps,
    Protect,
    AntiEngage,
}

impl CompositionRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositionRole::Engage => "engage",
            CompositionRole::Frontline => "frontline",
            CompositionRole::Dive => "dive",
            CompositionRole::Bruiser => "bruiser",
            CompositionRole::Poke => "poke",
            CompositionRole::Teamfight => "teamfight",
            CompositionRole::Pick => "pick",
            CompositionRole::Hypercarry => "hypercarry",
            CompositionRole::Dps => "dps",
            CompositionRole::Protect => "protect",
            CompositionRole::AntiEngage => "anti-engage",
        }
    }
}

impl fmt::Display for CompositionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composition roles implied by one class tag. Unknown tags imply nothing.
pub fn roles_for_tag(tag: &str) -> &'static [CompositionRole] {
    match tag {
        "Tank" => &[CompositionRole::Engage, CompositionRole::Frontline],
        "Fighter" => &[CompositionRole::Bruiser, CompositionRole::Dive],
        "Mage" => &[CompositionRole::Poke, CompositionRole::Teamfight],
        "Assassin" => &[CompositionRole::Pick, CompositionRole::Dive],
        "Marksman" => &[CompositionRole::Dps, CompositionRole::Hypercarry],
        "Support" => &[CompositionRole::Protect, CompositionRole::AntiEngage],
        _ => &[],
    }
}

/// Union of the roles implied by every tag, in first-seen order. Empty or
/// unrecognized input yields an empty set.
pub fn composition_roles(tags: &[String]) -> Vec<CompositionRole> {
    let mut roles = Vec::new();
    for tag in tags {
        for role in roles_for_tag(tag) {
            if !roles.contains(role) {
                roles.push(*role);
            }
        }
    }
    roles
}

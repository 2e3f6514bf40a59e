use crate::analysis::archetypes::{builtin, Archetype, BUILTINS};
use crate::analysis::tags::{composition_roles, CompositionRole};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Required roles count triple toward an archetype's score.
const REQUIRED_WEIGHT: f64 = 3.0;
const BONUS_WEIGHT: f64 = 1.0;
/// Per-champion archetype fit is capped so no single pick dominates.
const FIT_CAP: f64 = 5.0;

/// Outcome of classifying a set of champions against the archetype catalog.
/// `key` is a built-in archetype key, or `unknown`/`mixed`.
#[derive(Debug, Clone, Serialize)]
pub struct DetectedComposition {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub desc: String,
    pub confidence: f64,
}

impl DetectedComposition {
    fn unknown() -> Self {
        DetectedComposition {
            key: "unknown".to_string(),
            name: "Unknown".to_string(),
            icon: "❓".to_string(),
            desc: "Not enough picks to classify".to_string(),
            confidence: 0.0,
        }
    }

    fn mixed() -> Self {
        DetectedComposition {
            key: "mixed".to_string(),
            name: "Mixed".to_string(),
            icon: "🌀".to_string(),
            desc: "No clear identity yet".to_string(),
            confidence: 0.0,
        }
    }

    fn from_archetype(archetype: &Archetype, confidence: f64) -> Self {
        DetectedComposition {
            key: archetype.key.to_string(),
            name: archetype.name.to_string(),
            icon: archetype.icon.to_string(),
            desc: archetype.desc.to_string(),
            confidence,
        }
    }

    pub fn is_known(&self) -> bool {
        self.key != "unknown" && self.key != "mixed"
    }
}

/// Quality label for an entire team composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompTier {
    S,
    A,
    B,
    C,
    D,
}

impl fmt::Display for CompTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompTier::S => "S",
            CompTier::A => "A",
            CompTier::B => "B",
            CompTier::C => "C",
            CompTier::D => "D",
        };
        f.write_str(label)
    }
}

/// Composition classification handed back next to recommendations. The
/// roster review additionally fills `meta_score`, `is_out_of_meta` and
/// `suggestions`; the live-draft path leaves them empty.
#[derive(Debug, Clone, Serialize)]
pub struct CompositionAnalysis {
    pub archetype: DetectedComposition,
    pub tier: CompTier,
    pub meta_score: Option<u32>,
    pub is_out_of_meta: bool,
    pub suggestions: Vec<crate::analysis::substitution::Substitution>,
}

/// One team member as the tier calculator sees it: class tags plus an
/// optional real win rate (absent data falls back to the 0.50 prior).
#[derive(Debug, Clone)]
pub struct TeamMember {
    pub tags: Vec<String>,
    pub win_rate: Option<f64>,
}

/// Classifies a set of champions (given as tag lists) against the built-in
/// catalog. Each archetype scores 3 per required-role occurrence and 1 per
/// bonus-role occurrence across all champions; the first archetype with the
/// strictly highest score wins, so earlier declarations take ties.
pub fn detect_team_composition(champion_tags: &[Vec<String>]) -> DetectedComposition {
    if champion_tags.is_empty() {
        return DetectedComposition::unknown();
    }

    let mut counts: HashMap<CompositionRole, u32> = HashMap::new();
    for tags in champion_tags {
        for role in composition_roles(tags) {
            *counts.entry(role).or_insert(0) += 1;
        }
    }

    let mut best: Option<(&Archetype, f64)> = None;
    for archetype in &BUILTINS {
        let score = weighted_role_score(archetype.required, archetype.bonus, &counts);
        trace!(archetype = archetype.key, score, "archetype candidate");
        if score > best.map(|(_, s)| s).unwrap_or(0.0) {
            best = Some((archetype, score));
        }
    }

    match best {
        Some((archetype, score)) => DetectedComposition::from_archetype(archetype, score),
        // Champions were supplied but no tag produced a usable role.
        None => DetectedComposition::mixed(),
    }
}

fn weighted_role_score(
    required: &[CompositionRole],
    bonus: &[CompositionRole],
    counts: &HashMap<CompositionRole, u32>,
) -> f64 {
    let required_hits: u32 = required.iter().filter_map(|r| counts.get(r)).sum();
    let bonus_hits: u32 = bonus.iter().filter_map(|r| counts.get(r)).sum();
    REQUIRED_WEIGHT * required_hits as f64 + BONUS_WEIGHT * bonus_hits as f64
}

/// How well a single champion (by tags) fits an archetype's role profile:
/// 3 per required role present, 1 per bonus role, capped at 5. Unknown keys
/// and empty tags are worth 0.
pub fn archetype_fit_bonus(tags: &[String], archetype_key: &str) -> f64 {
    match builtin(archetype_key) {
        Some(archetype) => fit_bonus_for_roles(tags, archetype.required, archetype.bonus),
        None => 0.0,
    }
}

/// Fit against explicit role sets, for user-defined archetypes.
pub fn fit_bonus_for_roles(
    tags: &[String],
    required: &[CompositionRole],
    bonus: &[CompositionRole],
) -> f64 {
    let roles = composition_roles(tags);
    if roles.is_empty() {
        return 0.0;
    }
    let mut fit = 0.0;
    for role in required {
        if roles.contains(role) {
            fit += REQUIRED_WEIGHT;
        }
    }
    for role in bonus {
        if roles.contains(role) {
            fit += BONUS_WEIGHT;
        }
    }
    fit.min(FIT_CAP)
}

/// Per-team tier (the live-draft variant): normalizes detector confidence by
/// `n × 3 × 2`, blends it 50/50 with an average-win-rate score mapped from
/// the 45%..55% band, and buckets the result. An empty team is a D.
pub fn composition_tier(members: &[TeamMember]) -> CompTier {
    if members.is_empty() {
        return CompTier::D;
    }

    let tags: Vec<Vec<String>> = members.iter().map(|m| m.tags.clone()).collect();
    let detected = detect_team_composition(&tags);

    let max_confidence = members.len() as f64 * 3.0 * 2.0;
    let comp_fit = (detected.confidence / max_confidence).min(1.0);

    let avg_win_rate = members
        .iter()
        .map(|m| m.win_rate.unwrap_or(0.5))
        .sum::<f64>()
        / members.len() as f64;
    let wr_score = ((avg_win_rate - 0.45) / 0.10).clamp(0.0, 1.0);

    let combined = comp_fit * 50.0 + wr_score * 50.0;
    if combined >= 80.0 {
        CompTier::S
    } else if combined >= 60.0 {
        CompTier::A
    } else if combined >= 40.0 {
        CompTier::B
    } else if combined >= 20.0 {
        CompTier::C
    } else {
        CompTier::D
    }
}

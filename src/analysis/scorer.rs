use crate::analysis::archetypes::{builtin, Archetype, CustomArchetype};
use crate::analysis::composition::{
    composition_tier, detect_team_composition, fit_bonus_for_roles, CompositionAnalysis,
    TeamMember,
};
use crate::analysis::tags::{composition_roles, CompositionRole};
use crate::config::RosterConfig;
use crate::data::champions::ChampionBook;
use crate::data::counters::{CounterDb, DynamicCounters};
use crate::data::stats::{Lane, Queue, StatsProvider};
use serde::Serialize;
use tracing::debug;

const TOP_N: usize = 5;

const MATCHUP_SCALE: f64 = 100.0;
const WIN_RATE_SCALE: f64 = 50.0;
const PICK_RATE_SCALE: f64 = 10.0;
const POPULAR_PICK_RATE: f64 = 0.15;
const ROLE_MATCH_BONUS: f64 = 1.0;

const PLANNED_PICK_BONUS: f64 = 20.0;
const FLEX_PRIORITY_BONUS: f64 = 50.0;
/// At most this many allies locked in still counts as "early draft" for
/// flex-priority purposes.
const EARLY_DRAFT_PICKS: usize = 2;

const MAIN_ROLE_FAVORITE_BONUS: f64 = 15.0;
const TEAMMATE_FAVORITE_BONUS: f64 = 5.0;
const FLEX_SYNERGY_FLOOR: f64 = 0.52;
const FLEX_SYNERGY_SCALE: f64 = 20.0;

/// Requested target archetype: a built-in by key or name, or a full
/// user-defined archetype (the only way to bring `typical_comp` into play).
#[derive(Debug, Clone)]
pub enum ArchetypeTarget {
    Named(String),
    Custom(CustomArchetype),
}

/// An ally seat in the lobby, as far as the scorer needs to know it: which
/// role it covers and whether its pick is already locked.
#[derive(Debug, Clone)]
pub struct AllyPlayer {
    pub role: Lane,
    pub has_picked: bool,
}

/// Everything the scorer is given for one invocation. All champion lists are
/// names; id translation happens at the session boundary.
#[derive(Debug, Clone, Default)]
pub struct DraftContext {
    pub role: Option<Lane>,
    pub queue: Queue,
    pub allies: Vec<String>,
    pub enemies: Vec<String>,
    pub bans: Vec<String>,
    pub target: Option<ArchetypeTarget>,
    pub roster: Option<RosterConfig>,
    pub ally_players: Vec<AllyPlayer>,
    pub dynamic_counters: DynamicCounters,
}

/// Synergy/counter subtotals, kept separate for display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoreBreakdown {
    pub counter_total: f64,
    pub synergy_total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub champion_id: Option<i32>,
    pub name: String,
    pub score: f64,
    pub win_rate: f64,
    pub pick_rate: f64,
    pub ban_rate: f64,
    pub matches: u32,
    pub roles: Vec<Lane>,
    pub tags: Vec<String>,
    pub composition_roles: Vec<CompositionRole>,
    pub tier: String,
    pub reasons: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftRecommendations {
    pub recommendations: Vec<Recommendation>,
    pub composition: CompositionAnalysis,
}

enum FitTarget<'a> {
    Builtin(&'static Archetype),
    Custom(&'a CustomArchetype),
    None,
}

impl FitTarget<'_> {
    fn bonus(&self, tags: &[String]) -> (f64, &str) {
        match self {
            FitTarget::Builtin(a) => (fit_bonus_for_roles(tags, a.required, a.bonus), a.name),
            FitTarget::Custom(c) => (
                fit_bonus_for_roles(tags, &c.required_roles, &c.bonus_roles),
                c.name.as_str(),
            ),
            FitTarget::None => (0.0, ""),
        }
    }
}

/// Scores every known champion against the current draft and returns the
/// top five together with the composition classification of the ally team.
pub fn score_draft(
    book: &ChampionBook,
    counters: &CounterDb,
    stats: &dyn StatsProvider,
    ctx: &DraftContext,
) -> DraftRecommendations {
    let ally_tags: Vec<Vec<String>> = ctx
        .allies
        .iter()
        .map(|name| book.tags_of(name).to_vec())
        .collect();
    let detected = detect_team_composition(&ally_tags);

    // An explicit target wins over the auto-detected archetype; an unknown
    // key simply yields no fit bonus.
    let fit_target = match &ctx.target {
        Some(ArchetypeTarget::Custom(custom)) => FitTarget::Custom(custom),
        Some(ArchetypeTarget::Named(key)) => match builtin(key) {
            Some(archetype) => FitTarget::Builtin(archetype),
            None => FitTarget::None,
        },
        None if detected.is_known() => match builtin(&detected.key) {
            Some(archetype) => FitTarget::Builtin(archetype),
            None => FitTarget::None,
        },
        None => FitTarget::None,
    };

    let mut recommendations = Vec::new();
    for name in book.names() {
        if ctx.allies.iter().any(|n| n == name)
            || ctx.enemies.iter().any(|n| n == name)
            || ctx.bans.iter().any(|n| n == name)
        {
            continue;
        }
        let Some(record) = counters.record(name) else {
            continue;
        };
        if let Some(role) = ctx.role {
            if !record.roles.contains(&role) {
                continue;
            }
        }

        let entry = stats.get_stats(name, ctx.role, ctx.queue);
        // A champion with zero recorded appearances in the requested role is
        // never recommended for it.
        if ctx.role.is_some() && !entry.has_data {
            continue;
        }

        let tags = book.tags_of(name);
        let mut score = 0.0;
        let mut reasons = Vec::new();
        let mut breakdown = ScoreBreakdown::default();

        // 1. Counters against enemy picks, dynamic overlay first.
        for enemy in &ctx.enemies {
            if let Some(rate) = counters.counter_win_rate(name, enemy, &ctx.dynamic_counters) {
                let delta = (rate - 0.5) * MATCHUP_SCALE;
                score += delta;
                breakdown.counter_total += delta;
                if delta > 0.0 {
                    reasons.push(format!("Counters {}", enemy));
                } else if delta < 0.0 {
                    reasons.push(format!("Countered by {}", enemy));
                }
            }
        }

        // 2. Synergies with ally picks (static table only).
        for ally in &ctx.allies {
            if let Some(rate) = record.synergies.get(ally) {
                let delta = (rate - 0.5) * MATCHUP_SCALE;
                score += delta;
                breakdown.synergy_total += delta;
                if delta > 0.0 {
                    reasons.push(format!("Synergy with {}", ally));
                } else if delta < 0.0 {
                    reasons.push(format!("Poor synergy with {}", ally));
                }
            }
        }

        // 3. Win rate.
        score += (entry.win_rate - 0.5) * WIN_RATE_SCALE;
        if entry.has_data {
            reasons.push(format!("{:.1}% win rate", entry.win_rate * 100.0));
        }

        // 4. Provider tier.
        let tier_bonus = match entry.tier.as_str() {
            "S+" => 10.0,
            "S" => 8.0,
            "A" => 5.0,
            "B" => 2.0,
            _ => 0.0,
        };
        if tier_bonus > 0.0 {
            score += tier_bonus;
            reasons.push(format!("Tier {}", entry.tier));
        }

        // 5. Pick rate.
        score += entry.pick_rate * PICK_RATE_SCALE;
        if entry.pick_rate > POPULAR_PICK_RATE {
            reasons.push("Popular pick".to_string());
        }

        // 6. Archetype fit.
        let (fit, fit_name) = fit_target.bonus(tags);
        if fit > 0.0 {
            score += fit;
            reasons.push(format!("Fits {}", fit_name));
        }

        // 7. Planned pick / flex priority from a custom archetype's comp.
        if let (Some(role), Some(ArchetypeTarget::Custom(custom))) = (ctx.role, &ctx.target) {
            if let Some((planned, is_flex)) = custom.planned_pick(role) {
                if planned == name {
                    score += PLANNED_PICK_BONUS;
                    reasons.push("Planned Pick".to_string());
                    // Lock a flex pick in early, before it can be contested.
                    if is_flex && ctx.allies.len() <= EARLY_DRAFT_PICKS {
                        score += FLEX_PRIORITY_BONUS;
                        reasons.push("FLEX PRIORITY".to_string());
                    }
                }
            }
        }

        // 8. Minor tie-breaker for champions at home in the requested role.
        if let Some(role) = ctx.role {
            if record.roles.contains(&role) {
                score += ROLE_MATCH_BONUS;
            }
        }

        // 9. Roster favorites.
        if let (Some(role), Some(roster)) = (ctx.role, &ctx.roster) {
            if roster.favorites(role).iter().any(|f| f == name) {
                if roster.my_role == role {
                    score += MAIN_ROLE_FAVORITE_BONUS;
                    reasons.push("Favorite pick".to_string());
                } else {
                    score += TEAMMATE_FAVORITE_BONUS;
                    reasons.push("Teammate favorite".to_string());
                }
            }
            if roster.game_mode == Queue::Flex {
                for lane in Lane::ALL {
                    if lane == role || lane_is_filled(&ctx.ally_players, lane) {
                        continue;
                    }
                    for favorite in roster.favorites(lane) {
                        if let Some(rate) = counters.synergy_win_rate(name, favorite) {
                            if rate > FLEX_SYNERGY_FLOOR {
                                score += (rate - 0.5) * FLEX_SYNERGY_SCALE;
                                reasons.push(format!("Pairs with teammate favorite {}", favorite));
                            }
                        }
                    }
                }
            }
        }

        let tier = if entry.tier.is_empty() {
            synthetic_tier(score).to_string()
        } else {
            entry.tier.clone()
        };

        recommendations.push(Recommendation {
            champion_id: book.id_of(name),
            name: name.to_string(),
            score,
            win_rate: entry.win_rate,
            pick_rate: entry.pick_rate,
            ban_rate: entry.ban_rate,
            matches: entry.matches,
            roles: record.roles.clone(),
            tags: tags.to_vec(),
            composition_roles: composition_roles(tags),
            tier,
            reasons,
            breakdown,
        });
    }

    debug!(
        candidates = recommendations.len(),
        archetype = detected.key.as_str(),
        "scored draft"
    );

    recommendations.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    recommendations.truncate(TOP_N);

    let members: Vec<TeamMember> = ctx
        .allies
        .iter()
        .map(|name| {
            let entry = stats.get_stats(name, None, ctx.queue);
            TeamMember {
                tags: book.tags_of(name).to_vec(),
                win_rate: entry.has_data.then_some(entry.win_rate),
            }
        })
        .collect();
    let tier = composition_tier(&members);

    DraftRecommendations {
        recommendations,
        composition: CompositionAnalysis {
            archetype: detected,
            tier,
            meta_score: None,
            is_out_of_meta: false,
            suggestions: Vec::new(),
        },
    }
}

fn lane_is_filled(ally_players: &[AllyPlayer], lane: Lane) -> bool {
    ally_players.iter().any(|p| p.role == lane && p.has_picked)
}

/// Display-only label for champions the provider did not tier. Does not feed
/// back into scoring.
fn synthetic_tier(score: f64) -> &'static str {
    if score >= 25.0 {
        "S+"
    } else if score >= 20.0 {
        "S"
    } else if score >= 15.0 {
        "A"
    } else if score >= 10.0 {
        "B"
    } else if score >= 5.0 {
        "C"
    } else {
        "D"
    }
}

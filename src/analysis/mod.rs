pub mod archetypes;
pub mod composition;
pub mod op_picks;
pub mod roster_review;
pub mod scorer;
pub mod substitution;
pub mod tags;

pub use archetypes::{builtin, Archetype, CustomArchetype, BUILTINS};
pub use composition::{
    archetype_fit_bonus, composition_tier, detect_team_composition, CompTier,
    CompositionAnalysis, DetectedComposition, TeamMember,
};
pub use op_picks::OpPick;
pub use scorer::{
    AllyPlayer, ArchetypeTarget, DraftContext, DraftRecommendations, Recommendation,
    ScoreBreakdown,
};
pub use substitution::Substitution;
pub use tags::{composition_roles, CompositionRole};

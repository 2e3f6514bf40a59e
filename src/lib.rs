//! Decision support for the 5v5 draft phase: ranks candidate champions for a
//! role, classifies the emerging team composition into a named archetype and
//! quality tier, and proposes substitutions for weak roster members.
//!
//! The engine is a synchronous library. All I/O lives with its collaborators:
//! champion metadata, win-rate statistics and the counter/synergy table are
//! handed in as read-only snapshots, and a host UI consumes the results.

pub mod analysis;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;

pub use analysis::{
    AllyPlayer, ArchetypeTarget, CompTier, CompositionAnalysis, CompositionRole, CustomArchetype,
    DetectedComposition, DraftContext, DraftRecommendations, OpPick, Recommendation, Substitution,
};
pub use config::{RosterConfig, Settings};
pub use data::{ChampionBook, CounterDb, CounterSynergyRecord, Lane, Queue, StatsProvider,
    StatsTable, WinRateEntry};
pub use engine::{DraftEngine, Snapshot};
pub use error::AdvisorError;

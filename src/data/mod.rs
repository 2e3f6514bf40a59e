pub mod champions;
pub mod counters;
pub mod stats;

pub use champions::ChampionBook;
pub use counters::{CounterDb, CounterSynergyRecord, DynamicCounters};
pub use stats::{Lane, Queue, StatsProvider, StatsTable, WinRateEntry};

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::InMemoryMatchStore;
pub use app::{render_summary, OutputFormat, ReplayOutcome, ScriptRunner};
pub use config::{MatchEvent, OnError, ScriptConfig};
pub use crate::core::scoreboard::Scoreboard;
pub use domain::model::{Match, MatchId, Score, Team, TeamNamePolicy};
pub use domain::ports::MatchStore;
pub use utils::error::{NameRejection, Result, ScoreRejection, ScoreboardError};

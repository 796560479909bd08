pub mod scoreboard;
pub mod summary;

pub use crate::domain::model::{Match, MatchId, Score, Team, TeamNamePolicy};
pub use crate::domain::ports::MatchStore;
pub use crate::utils::error::Result;

#[cfg(feature = "cli")]
pub mod cli;
pub mod script;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use script::{MatchEvent, OnError, ScriptConfig};

use std::fmt;
use thiserror::Error;

/// Why a team name was refused when starting a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    Blank,
    SameAsOpponent,
    AlreadyPlaying,
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRejection::Blank => write!(f, "team name must not be empty or whitespace-only"),
            NameRejection::SameAsOpponent => {
                write!(f, "home team and away team must be different")
            }
            NameRejection::AlreadyPlaying => write!(f, "team is already playing an active match"),
        }
    }
}

/// Why a score update was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRejection {
    Negative,
    OutOfRange,
    Unchanged,
}

impl fmt::Display for ScoreRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreRejection::Negative => write!(f, "score must be greater than or equal to 0"),
            ScoreRejection::OutOfRange => write!(f, "score is too large"),
            ScoreRejection::Unchanged => write!(f, "score must differ from the current score"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ScoreboardError {
    #[error("Invalid team name '{name}': {reason}")]
    InvalidTeamName { name: String, reason: NameRejection },

    #[error("Invalid score {home}-{away}: {reason}")]
    InvalidScore {
        home: i64,
        away: i64,
        reason: ScoreRejection,
    },

    #[error("Match not found: {reference}")]
    MatchNotFound { reference: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Script step {step} failed: {message}")]
    ScriptError { step: usize, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    Script,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScoreboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoreboardError::InvalidTeamName { .. }
            | ScoreboardError::InvalidScore { .. }
            | ScoreboardError::MatchNotFound { .. } => ErrorCategory::Domain,
            ScoreboardError::TomlError(_)
            | ScoreboardError::ConfigError { .. }
            | ScoreboardError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ScoreboardError::ScriptError { .. } => ErrorCategory::Script,
            ScoreboardError::SerializationError(_) | ScoreboardError::CsvError(_) => {
                ErrorCategory::Output
            }
            ScoreboardError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Script => ErrorSeverity::High,
            ErrorCategory::Output | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScoreboardError::InvalidTeamName { name, reason } => {
                format!("Cannot start match with team '{}': {}", name, reason)
            }
            ScoreboardError::InvalidScore { home, away, reason } => {
                format!("Cannot set score {}-{}: {}", home, away, reason)
            }
            ScoreboardError::MatchNotFound { reference } => {
                format!("No active match for {}", reference)
            }
            ScoreboardError::IoError(e) => format!("Could not read or write a file: {}", e),
            ScoreboardError::TomlError(e) => format!("Match script is not valid TOML: {}", e),
            ScoreboardError::ConfigError { message } => format!("Configuration problem: {}", message),
            ScoreboardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            ScoreboardError::ScriptError { step, message } => {
                format!("Match script stopped at event #{}: {}", step, message)
            }
            ScoreboardError::SerializationError(e) => format!("Could not render JSON: {}", e),
            ScoreboardError::CsvError(e) => format!("Could not render CSV: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScoreboardError::InvalidTeamName { reason, .. } => match reason {
                NameRejection::Blank => "Provide a non-empty name for both teams",
                NameRejection::SameAsOpponent => "Pick two different teams",
                NameRejection::AlreadyPlaying => "Finish the team's current match first",
            },
            ScoreboardError::InvalidScore { reason, .. } => match reason {
                ScoreRejection::Negative | ScoreRejection::OutOfRange => {
                    "Use non-negative scores"
                }
                ScoreRejection::Unchanged => "Only send updates that change the score",
            },
            ScoreboardError::MatchNotFound { .. } => {
                "Check that the match was started and has not been finished"
            }
            ScoreboardError::ScriptError { .. } => {
                "Fix the failing event or set replay.on_error = \"skip\""
            }
            ScoreboardError::TomlError(_)
            | ScoreboardError::ConfigError { .. }
            | ScoreboardError::InvalidConfigValueError { .. } => {
                "Check the match script against the documented format"
            }
            ScoreboardError::IoError(_) => "Check the file path and permissions",
            ScoreboardError::SerializationError(_) | ScoreboardError::CsvError(_) => {
                "Try a different output format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;

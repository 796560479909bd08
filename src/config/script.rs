use crate::domain::model::TeamNamePolicy;
use crate::utils::error::{Result, ScoreboardError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "csv"];

/// A match script: scoreboard settings plus the ordered list of events to replay.
///
/// ```toml
/// [scoreboard]
/// name = "World Cup"
///
/// [[events]]
/// action = "start"
/// home = "Mexico"
/// away = "Canada"
/// at = "2026-06-11T18:00:00Z"
///
/// [[events]]
/// action = "update"
/// home = "Mexico"
/// away = "Canada"
/// home_score = 0
/// away_score = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub scoreboard: ScoreboardSection,
    #[serde(default)]
    pub replay: ReplayConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardSection {
    pub name: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayConfig {
    #[serde(default)]
    pub on_error: OnError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MatchEvent {
    Start {
        home: String,
        away: String,
        /// RFC 3339 start time; defaults to the moment the event is replayed.
        #[serde(default)]
        at: Option<DateTime<Utc>>,
    },
    Update {
        home: String,
        away: String,
        home_score: i64,
        away_score: i64,
    },
    Finish {
        home: String,
        away: String,
    },
}

impl MatchEvent {
    pub fn teams(&self) -> (&str, &str) {
        match self {
            MatchEvent::Start { home, away, .. }
            | MatchEvent::Update { home, away, .. }
            | MatchEvent::Finish { home, away } => (home.as_str(), away.as_str()),
        }
    }
}

impl ScriptConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScoreboardError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn policy(&self) -> TeamNamePolicy {
        if self.scoreboard.case_sensitive {
            TeamNamePolicy::CaseSensitive
        } else {
            TeamNamePolicy::CaseInsensitive
        }
    }
}

impl Validate for ScriptConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("scoreboard.name", &self.scoreboard.name)?;
        validate_one_of("output.format", &self.output.format, &OUTPUT_FORMATS)?;

        if self.events.is_empty() {
            return Err(ScoreboardError::InvalidConfigValueError {
                field: "events".to_string(),
                value: "[]".to_string(),
                reason: "Script must contain at least one event".to_string(),
            });
        }

        for (idx, event) in self.events.iter().enumerate() {
            let (home, away) = event.teams();
            validate_non_empty_string(&format!("events[{}].home", idx), home)?;
            validate_non_empty_string(&format!("events[{}].away", idx), away)?;
        }

        Ok(())
    }
}

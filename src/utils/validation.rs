use crate::domain::model::Score;
use crate::utils::error::{NameRejection, Result, ScoreRejection, ScoreboardError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_team_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ScoreboardError::InvalidTeamName {
            name: name.to_string(),
            reason: NameRejection::Blank,
        });
    }
    Ok(())
}

/// Converts raw caller input into a [`Score`], rejecting negative or oversized components.
pub fn validate_score(home: i64, away: i64) -> Result<Score> {
    let reject = |reason| ScoreboardError::InvalidScore { home, away, reason };

    if home < 0 || away < 0 {
        return Err(reject(ScoreRejection::Negative));
    }
    let home_goals = u32::try_from(home).map_err(|_| reject(ScoreRejection::OutOfRange))?;
    let away_goals = u32::try_from(away).map_err(|_| reject(ScoreRejection::OutOfRange))?;

    Ok(Score::new(home_goals, away_goals))
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScoreboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScoreboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScoreboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ScoreboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

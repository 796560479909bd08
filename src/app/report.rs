use crate::domain::model::Match;
use crate::utils::error::{Result, ScoreboardError};
use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ScoreboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ScoreboardError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    rank: usize,
    home_team: &'a str,
    home_score: u32,
    away_team: &'a str,
    away_score: u32,
    total: u64,
    start_time: String,
}

impl<'a> SummaryRow<'a> {
    fn new(rank: usize, m: &'a Match) -> Self {
        Self {
            rank,
            home_team: m.home_team().name(),
            home_score: m.score().home(),
            away_team: m.away_team().name(),
            away_score: m.score().away(),
            total: m.total_score(),
            start_time: m.start_time().to_rfc3339(),
        }
    }
}

/// Renders an already-ranked list of matches.
pub fn render_summary(matches: &[Match], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(matches)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(matches)?),
        OutputFormat::Csv => render_csv(matches),
    }
}

fn render_text(matches: &[Match]) -> String {
    if matches.is_empty() {
        return "No matches in progress\n".to_string();
    }

    let mut out = String::new();
    for (idx, m) in matches.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}. {}", idx + 1, m);
    }
    out
}

fn render_csv(matches: &[Match]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if matches.is_empty() {
        writer.write_record([
            "rank",
            "home_team",
            "home_score",
            "away_team",
            "away_score",
            "total",
            "start_time",
        ])?;
    }
    for (idx, m) in matches.iter().enumerate() {
        writer.serialize(SummaryRow::new(idx + 1, m))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScoreboardError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        ScoreboardError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Score, Team};
    use chrono::{DateTime, Utc};

    fn ranked() -> Vec<Match> {
        let kickoff: DateTime<Utc> = "2026-06-11T18:00:00Z".parse().unwrap();
        vec![
            Match::new(Team::new("Spain"), Team::new("Brazil"), kickoff)
                .with_score(Score::new(10, 2)),
            Match::new(Team::new("Mexico"), Team::new("Canada"), kickoff)
                .with_score(Score::new(0, 5)),
        ]
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text() {
        let text = render_summary(&ranked(), OutputFormat::Text).unwrap();
        assert_eq!(text, "1. Spain 10 - Brazil 2\n2. Mexico 0 - Canada 5\n");
        assert_eq!(
            render_summary(&[], OutputFormat::Text).unwrap(),
            "No matches in progress\n"
        );
    }

    #[test]
    fn test_render_csv() {
        let csv = render_summary(&ranked(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "rank,home_team,home_score,away_team,away_score,total,start_time"
        );
        assert_eq!(lines[1], "1,Spain,10,Brazil,2,12,2026-06-11T18:00:00+00:00");
        assert_eq!(lines.len(), 3);

        let empty = render_summary(&[], OutputFormat::Csv).unwrap();
        assert_eq!(empty.lines().count(), 1);
    }

    #[test]
    fn test_render_json() {
        let json = render_summary(&ranked(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["home_team"], "Spain");
        assert_eq!(value[0]["score"]["home"], 10);
        assert_eq!(value[1]["away_team"], "Canada");
    }
}

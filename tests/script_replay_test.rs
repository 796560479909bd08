use anyhow::Result;
use scoreboard::utils::validation::Validate;
use scoreboard::{
    render_summary, OnError, OutputFormat, ScoreboardError, ScriptConfig, ScriptRunner,
};
use tempfile::TempDir;

const WORLD_CUP_SCRIPT: &str = r#"
[scoreboard]
name = "World Cup"

[output]
format = "csv"

[[events]]
action = "start"
home = "Mexico"
away = "Canada"
at = "2026-06-11T18:00:00Z"

[[events]]
action = "start"
home = "Spain"
away = "Brazil"
at = "2026-06-11T18:05:00Z"

[[events]]
action = "start"
home = "Germany"
away = "France"
at = "2026-06-11T18:10:00Z"

[[events]]
action = "update"
home = "Mexico"
away = "Canada"
home_score = 0
away_score = 5

[[events]]
action = "update"
home = "Spain"
away = "Brazil"
home_score = 10
away_score = 2

[[events]]
action = "update"
home = "Germany"
away = "France"
home_score = 2
away_score = 2
"#;

#[test]
fn test_replay_world_cup_script_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let script_path = temp_dir.path().join("world_cup.toml");
    std::fs::write(&script_path, WORLD_CUP_SCRIPT)?;

    let config = ScriptConfig::from_file(&script_path)?;
    config.validate()?;

    let mut runner = ScriptRunner::from_config(&config);
    let outcome = runner.run(&config.events)?;
    assert_eq!(outcome.applied, 6);
    assert!(outcome.skipped.is_empty());

    let format: OutputFormat = config.output.format.parse()?;
    let csv = render_summary(&runner.scoreboard().get_summary(), format)?;
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(
        rows,
        [
            "1,Spain,10,Brazil,2,12,2026-06-11T18:05:00+00:00",
            "2,Mexico,0,Canada,5,5,2026-06-11T18:00:00+00:00",
            "3,Germany,2,France,2,4,2026-06-11T18:10:00+00:00",
        ]
    );
    Ok(())
}

#[test]
fn test_finish_event_removes_match() -> Result<()> {
    let script = format!(
        "{}\n[[events]]\naction = \"finish\"\nhome = \"brazil\"\naway = \"spain\"\n",
        WORLD_CUP_SCRIPT
    );
    let config = ScriptConfig::from_toml_str(&script)?;

    let mut runner = ScriptRunner::from_config(&config);
    runner.run(&config.events)?;

    let text = render_summary(&runner.scoreboard().get_summary(), OutputFormat::Text)?;
    assert_eq!(text, "1. Mexico 0 - Canada 5\n2. Germany 2 - France 2\n");
    Ok(())
}

#[test]
fn test_abort_on_duplicate_team() -> Result<()> {
    let script = format!(
        "{}\n[[events]]\naction = \"start\"\nhome = \"CANADA\"\naway = \"USA\"\n",
        WORLD_CUP_SCRIPT
    );
    let config = ScriptConfig::from_toml_str(&script)?;
    assert_eq!(config.replay.on_error, OnError::Abort);

    let mut runner = ScriptRunner::from_config(&config);
    let err = runner.run(&config.events).unwrap_err();
    match err {
        ScoreboardError::ScriptError { step, message } => {
            assert_eq!(step, 7);
            assert!(message.contains("CANADA"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(runner.scoreboard().len(), 3);
    Ok(())
}

#[test]
fn test_case_sensitive_script_allows_recased_team() -> Result<()> {
    let script = format!(
        "{}\n[[events]]\naction = \"start\"\nhome = \"CANADA\"\naway = \"USA\"\n",
        WORLD_CUP_SCRIPT.replace("name = \"World Cup\"", "name = \"World Cup\"\ncase_sensitive = true")
    );
    let config = ScriptConfig::from_toml_str(&script)?;

    let mut runner = ScriptRunner::from_config(&config);
    let outcome = runner.run(&config.events)?;
    assert_eq!(outcome.applied, 7);
    assert_eq!(runner.scoreboard().len(), 4);
    Ok(())
}

#[test]
fn test_skip_mode_keeps_going() -> Result<()> {
    let script = format!(
        "{}\n[replay]\non_error = \"skip\"\n{}",
        "[scoreboard]\nname = \"Friendly\"\n",
        r#"
[[events]]
action = "update"
home = "Mexico"
away = "Canada"
home_score = 1
away_score = 0

[[events]]
action = "start"
home = "Mexico"
away = "Canada"

[[events]]
action = "update"
home = "Mexico"
away = "Canada"
home_score = 1
away_score = -2

[[events]]
action = "update"
home = "Mexico"
away = "Canada"
home_score = 1
away_score = 2
"#
    );
    let config = ScriptConfig::from_toml_str(&script)?;

    let mut runner = ScriptRunner::from_config(&config);
    let outcome = runner.run(&config.events)?;
    assert_eq!(outcome.applied, 2);
    let steps: Vec<usize> = outcome.skipped.iter().map(|s| s.step).collect();
    assert_eq!(steps, [1, 3]);
    assert!(outcome.skipped[0].error.contains("Match not found"));

    let summary = runner.into_scoreboard().get_summary();
    assert_eq!(summary[0].total_score(), 3);
    Ok(())
}

#[test]
fn test_missing_script_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ScriptConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ScoreboardError::IoError(_)));
}

use anyhow::Context;
use clap::Parser;
use scoreboard::utils::error::{ErrorSeverity, ScoreboardError};
use scoreboard::utils::{logger, validation::Validate};
use scoreboard::{render_summary, CliConfig, OutputFormat, ScriptConfig, ScriptRunner};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting scoreboard CLI");
    tracing::debug!("CLI config: {:?}", config);

    let rendered = match run(&config) {
        Ok(rendered) => rendered,
        Err(e) => exit_with(&e),
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write summary to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}

fn run(config: &CliConfig) -> scoreboard::Result<String> {
    config.validate()?;

    tracing::info!("Loading match script from: {}", config.script);
    let mut script = ScriptConfig::from_file(&config.script)?;

    if config.case_sensitive {
        script.scoreboard.case_sensitive = true;
    }
    if let Some(format) = &config.format {
        script.output.format = format.clone();
    }
    script.validate()?;

    let format: OutputFormat = script.output.format.parse()?;
    tracing::info!(
        "Replaying {} events for '{}'",
        script.events.len(),
        script.scoreboard.name
    );

    let mut runner = ScriptRunner::from_config(&script);
    let outcome = runner.run(&script.events)?;
    for skipped in &outcome.skipped {
        eprintln!("Skipped event #{}: {}", skipped.step, skipped.error);
    }

    render_summary(&runner.scoreboard().get_summary(), format)
}

fn exit_with(e: &ScoreboardError) -> ! {
    tracing::error!(
        "Scoreboard run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}

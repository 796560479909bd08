use crate::adapters::InMemoryMatchStore;
use crate::config::script::{MatchEvent, OnError, ScriptConfig};
use crate::core::scoreboard::Scoreboard;
use crate::domain::ports::MatchStore;
use crate::utils::error::{Result, ScoreboardError};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEvent {
    /// 1-based position in the script.
    pub step: usize,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub applied: usize,
    pub skipped: Vec<SkippedEvent>,
}

/// Drives a [`Scoreboard`] from a list of script events, addressing matches by team pair.
pub struct ScriptRunner<S: MatchStore> {
    board: Scoreboard<S>,
    on_error: OnError,
}

impl ScriptRunner<InMemoryMatchStore> {
    pub fn from_config(config: &ScriptConfig) -> Self {
        Self::new(
            Scoreboard::with_policy(InMemoryMatchStore::new(), config.policy()),
            config.replay.on_error,
        )
    }
}

impl<S: MatchStore> ScriptRunner<S> {
    pub fn new(board: Scoreboard<S>, on_error: OnError) -> Self {
        Self { board, on_error }
    }

    pub fn run(&mut self, events: &[MatchEvent]) -> Result<ReplayOutcome> {
        let mut outcome = ReplayOutcome::default();

        for (idx, event) in events.iter().enumerate() {
            let step = idx + 1;
            match self.apply(event) {
                Ok(()) => outcome.applied += 1,
                Err(e) => match self.on_error {
                    OnError::Abort => {
                        return Err(ScoreboardError::ScriptError {
                            step,
                            message: e.to_string(),
                        });
                    }
                    OnError::Skip => {
                        warn!(step = step, error = %e, "Skipping failed event");
                        outcome.skipped.push(SkippedEvent {
                            step,
                            error: e.to_string(),
                        });
                    }
                },
            }
        }

        info!(
            applied = outcome.applied,
            skipped = outcome.skipped.len(),
            active = self.board.len(),
            "Replay finished"
        );
        Ok(outcome)
    }

    pub fn apply(&mut self, event: &MatchEvent) -> Result<()> {
        debug!(?event, "Applying event");
        match event {
            MatchEvent::Start { home, away, at } => {
                match at {
                    Some(at) => self.board.start_match_at(home, away, *at)?,
                    None => self.board.start_match(home, away)?,
                };
            }
            MatchEvent::Update {
                home,
                away,
                home_score,
                away_score,
            } => {
                self.board
                    .update_score_by_teams(home, away, *home_score, *away_score)?;
            }
            MatchEvent::Finish { home, away } => {
                self.board.finish_match_by_teams(home, away)?;
            }
        }
        Ok(())
    }

    pub fn scoreboard(&self) -> &Scoreboard<S> {
        &self.board
    }

    pub fn into_scoreboard(self) -> Scoreboard<S> {
        self.board
    }
}

use crate::adapters::InMemoryMatchStore;
use crate::core::summary;
use crate::domain::model::{Match, MatchId, Team, TeamNamePolicy};
use crate::domain::ports::MatchStore;
use crate::utils::error::{NameRejection, Result, ScoreRejection, ScoreboardError};
use crate::utils::validation::{validate_score, validate_team_name};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Live scoreboard over a [`MatchStore`].
///
/// Every operation validates against the current store contents first and
/// then performs at most one store mutation, so a rejected call leaves the
/// store untouched. Not synchronized: wrap it in a lock to share it between
/// threads.
#[derive(Debug)]
pub struct Scoreboard<S: MatchStore> {
    store: S,
    policy: TeamNamePolicy,
}

impl Scoreboard<InMemoryMatchStore> {
    pub fn in_memory() -> Self {
        Self::new(InMemoryMatchStore::new())
    }
}

impl Default for Scoreboard<InMemoryMatchStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: MatchStore> Scoreboard<S> {
    pub fn new(store: S) -> Self {
        Self::with_policy(store, TeamNamePolicy::default())
    }

    pub fn with_policy(store: S, policy: TeamNamePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> TeamNamePolicy {
        self.policy
    }

    /// Starts a match now. See [`Scoreboard::start_match_at`].
    pub fn start_match(&mut self, home: &str, away: &str) -> Result<MatchId> {
        self.start_match_at(home, away, Utc::now())
    }

    /// Starts a match between two teams with an explicit start time.
    ///
    /// Fails with `InvalidTeamName` when a name is blank, when both names are
    /// the same, or when either team is already playing (in any slot).
    pub fn start_match_at(
        &mut self,
        home: &str,
        away: &str,
        start_time: DateTime<Utc>,
    ) -> Result<MatchId> {
        self.check_new_pairing(home, away).inspect_err(|e| {
            warn!(home = home, away = away, error = %e, "Rejected match start");
        })?;

        let new_match = Match::new(Team::new(home), Team::new(away), start_time);
        let id = new_match.id();
        self.store.insert(new_match);

        info!(match_id = %id, home = home, away = away, start_time = %start_time, "Match started");
        Ok(id)
    }

    /// Replaces the score of an active match.
    ///
    /// Existence is checked before the score itself, so an unknown id always
    /// reports `MatchNotFound`.
    pub fn update_score(&mut self, id: MatchId, home_score: i64, away_score: i64) -> Result<()> {
        let current = self.get_match(id).inspect_err(|e| {
            warn!(match_id = %id, error = %e, "Rejected score update");
        })?;
        self.apply_score(current, home_score, away_score)
    }

    /// Team-pair variant of [`Scoreboard::update_score`]; the pair may be given in either order.
    pub fn update_score_by_teams(
        &mut self,
        home: &str,
        away: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<()> {
        let current = self.find_by_teams(home, away).inspect_err(|e| {
            warn!(home = home, away = away, error = %e, "Rejected score update");
        })?;
        self.apply_score(current, home_score, away_score)
    }

    /// Removes an active match and returns it as it stood at the final whistle.
    pub fn finish_match(&mut self, id: MatchId) -> Result<Match> {
        self.get_match(id).inspect_err(|e| {
            warn!(match_id = %id, error = %e, "Rejected match finish");
        })?;
        self.remove(id)
    }

    pub fn finish_match_by_teams(&mut self, home: &str, away: &str) -> Result<Match> {
        let current = self.find_by_teams(home, away).inspect_err(|e| {
            warn!(home = home, away = away, error = %e, "Rejected match finish");
        })?;
        self.remove(current.id())
    }

    pub fn get_match(&self, id: MatchId) -> Result<Match> {
        self.store
            .get(id)
            .ok_or_else(|| ScoreboardError::MatchNotFound {
                reference: format!("id {}", id),
            })
    }

    /// Snapshot of all active matches in store order.
    pub fn get_matches(&self) -> Vec<Match> {
        let matches = self.store.list_all();
        debug!(count = matches.len(), "Listed matches");
        matches
    }

    pub fn get_matches_with_score(&self, home_score: i64, away_score: i64) -> Result<Vec<Match>> {
        let score = validate_score(home_score, away_score)?;
        Ok(self.store.find_by_score(score))
    }

    /// Snapshot of all active matches ranked by total score, most recent start first on ties.
    pub fn get_summary(&self) -> Vec<Match> {
        let ranked = summary::rank(self.store.list_all());
        debug!(count = ranked.len(), "Built summary");
        ranked
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn check_new_pairing(&self, home: &str, away: &str) -> Result<()> {
        validate_team_name(home)?;
        validate_team_name(away)?;

        if self.policy.same_name(home, away) {
            return Err(ScoreboardError::InvalidTeamName {
                name: away.to_string(),
                reason: NameRejection::SameAsOpponent,
            });
        }

        let active = self.store.list_all();
        for name in [home, away] {
            if active.iter().any(|m| m.involves(name, self.policy)) {
                return Err(ScoreboardError::InvalidTeamName {
                    name: name.to_string(),
                    reason: NameRejection::AlreadyPlaying,
                });
            }
        }

        Ok(())
    }

    fn find_by_teams(&self, home: &str, away: &str) -> Result<Match> {
        let found = match self.policy {
            TeamNamePolicy::CaseSensitive => self
                .store
                .find_by_team_pair(&Team::new(home), &Team::new(away)),
            TeamNamePolicy::CaseInsensitive => self
                .store
                .list_all()
                .into_iter()
                .find(|m| m.is_between(home, away, self.policy)),
        };

        found.ok_or_else(|| ScoreboardError::MatchNotFound {
            reference: format!("{} vs {}", home, away),
        })
    }

    fn apply_score(&mut self, current: Match, home_score: i64, away_score: i64) -> Result<()> {
        let id = current.id();
        let score = validate_score(home_score, away_score)
            .and_then(|score| {
                if score == current.score() {
                    Err(ScoreboardError::InvalidScore {
                        home: home_score,
                        away: away_score,
                        reason: ScoreRejection::Unchanged,
                    })
                } else {
                    Ok(score)
                }
            })
            .inspect_err(|e| {
                warn!(match_id = %id, error = %e, "Rejected score update");
            })?;

        self.store.insert(current.with_score(score));
        debug!(match_id = %id, score = %score, "Score updated");
        Ok(())
    }

    fn remove(&mut self, id: MatchId) -> Result<Match> {
        let finished = self
            .store
            .remove(id)
            .ok_or_else(|| ScoreboardError::MatchNotFound {
                reference: format!("id {}", id),
            })?;
        info!(match_id = %id, result = %finished, "Match finished");
        Ok(finished)
    }
}

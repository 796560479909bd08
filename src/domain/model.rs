use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier assigned to a match when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A team, identified only by its name. Equality is exact; policy-aware
/// comparison lives in [`TeamNamePolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    name: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    home: u32,
    away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn home(&self) -> u32 {
        self.home
    }

    pub fn away(&self) -> u32 {
        self.away
    }

    pub fn total(&self) -> u64 {
        u64::from(self.home) + u64::from(self.away)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// How team names are compared for uniqueness and lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamNamePolicy {
    #[default]
    CaseInsensitive,
    CaseSensitive,
}

impl TeamNamePolicy {
    pub fn same_name(&self, a: &str, b: &str) -> bool {
        match self {
            TeamNamePolicy::CaseSensitive => a == b,
            TeamNamePolicy::CaseInsensitive => {
                a == b || a.to_lowercase() == b.to_lowercase()
            }
        }
    }
}

/// An active match between two teams.
///
/// Teams, id and start time are fixed at creation. The score is changed by
/// building a replacement through [`Match::with_score`], so snapshots handed
/// out to callers never change underneath them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    id: MatchId,
    home_team: Team,
    away_team: Team,
    score: Score,
    start_time: DateTime<Utc>,
}

impl Match {
    pub fn new(home_team: Team, away_team: Team, start_time: DateTime<Utc>) -> Self {
        Self {
            id: MatchId::new(),
            home_team,
            away_team,
            score: Score::default(),
            start_time,
        }
    }

    pub fn with_score(&self, score: Score) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn total_score(&self) -> u64 {
        self.score.total()
    }

    /// True if `name` plays in either slot of this match.
    pub fn involves(&self, name: &str, policy: TeamNamePolicy) -> bool {
        policy.same_name(self.home_team.name(), name) || policy.same_name(self.away_team.name(), name)
    }

    /// True if this match is between `a` and `b`, in either order.
    pub fn is_between(&self, a: &str, b: &str, policy: TeamNamePolicy) -> bool {
        let (home, away) = (self.home_team.name(), self.away_team.name());
        (policy.same_name(home, a) && policy.same_name(away, b))
            || (policy.same_name(home, b) && policy.same_name(away, a))
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team,
            self.score.home,
            self.away_team,
            self.score.away
        )
    }
}

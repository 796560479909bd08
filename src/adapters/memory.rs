use crate::domain::model::{Match, MatchId, Score, Team};
use crate::domain::ports::MatchStore;

/// Vec-backed store that keeps matches in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMatchStore {
    matches: Vec<Match>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: MatchId) -> Option<usize> {
        self.matches.iter().position(|m| m.id() == id)
    }
}

impl MatchStore for InMemoryMatchStore {
    fn insert(&mut self, m: Match) {
        match self.position(m.id()) {
            Some(idx) => self.matches[idx] = m,
            None => self.matches.push(m),
        }
    }

    fn get(&self, id: MatchId) -> Option<Match> {
        self.matches.iter().find(|m| m.id() == id).cloned()
    }

    fn find_by_team_pair(&self, a: &Team, b: &Team) -> Option<Match> {
        self.matches
            .iter()
            .find(|m| {
                (m.home_team() == a && m.away_team() == b)
                    || (m.home_team() == b && m.away_team() == a)
            })
            .cloned()
    }

    fn find_by_score(&self, score: Score) -> Vec<Match> {
        self.matches
            .iter()
            .filter(|m| m.score() == score)
            .cloned()
            .collect()
    }

    fn list_all(&self) -> Vec<Match> {
        self.matches.clone()
    }

    fn remove(&mut self, id: MatchId) -> Option<Match> {
        let idx = self.position(id)?;
        Some(self.matches.remove(idx))
    }

    fn len(&self) -> usize {
        self.matches.len()
    }
}

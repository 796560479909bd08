use crate::domain::model::{Match, MatchId, Score, Team};

/// Storage for the active matches of one scoreboard.
///
/// Implementations do not validate anything: the scoreboard checks every
/// invariant before calling in. `list_all` must return matches in a stable
/// order; ranking is applied on top of it.
pub trait MatchStore {
    /// Adds `m`, or replaces the entry with the same id in place.
    fn insert(&mut self, m: Match);

    fn get(&self, id: MatchId) -> Option<Match>;

    /// Exact-name lookup in either home/away order.
    fn find_by_team_pair(&self, a: &Team, b: &Team) -> Option<Match>;

    fn find_by_score(&self, score: Score) -> Vec<Match>;

    fn list_all(&self) -> Vec<Match>;

    fn remove(&mut self, id: MatchId) -> Option<Match>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

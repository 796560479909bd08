use crate::domain::model::Match;
use std::cmp::Ordering;

/// Summary order: higher total first, then the most recently started.
pub fn summary_order(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.start_time().cmp(&a.start_time()))
}

/// Ranks a snapshot for the summary. The sort is stable, so matches that tie
/// on both keys keep their store order.
pub fn rank(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by(summary_order);
    matches
}

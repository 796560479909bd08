use chrono::{DateTime, Duration, Utc};
use scoreboard::{InMemoryMatchStore, Match, Scoreboard};

fn at(minutes: i64) -> DateTime<Utc> {
    let base: DateTime<Utc> = "2026-06-11T18:00:00Z".parse().unwrap();
    base + Duration::minutes(minutes)
}

fn teams(matches: &[Match]) -> Vec<(String, String)> {
    matches
        .iter()
        .map(|m| {
            (
                m.home_team().name().to_string(),
                m.away_team().name().to_string(),
            )
        })
        .collect()
}

fn world_cup() -> Scoreboard<InMemoryMatchStore> {
    let mut board = Scoreboard::in_memory();
    let fixtures = [
        ("Mexico", "Canada", 0, 5),
        ("Spain", "Brazil", 10, 2),
        ("Germany", "France", 2, 2),
        ("Uruguay", "Italy", 6, 6),
        ("Argentina", "Australia", 3, 1),
    ];
    for (minute, (home, away, h, a)) in fixtures.into_iter().enumerate() {
        let id = board.start_match_at(home, away, at(minute as i64)).unwrap();
        board.update_score(id, h, a).unwrap();
    }
    board
}

#[test]
fn test_summary_orders_by_total_score() {
    let mut board = Scoreboard::in_memory();
    let mexico = board.start_match_at("Mexico", "Canada", at(0)).unwrap();
    let spain = board.start_match_at("Spain", "Brazil", at(1)).unwrap();
    let germany = board.start_match_at("Germany", "France", at(2)).unwrap();

    board.update_score(mexico, 0, 5).unwrap();
    board.update_score(spain, 10, 2).unwrap();
    board.update_score(germany, 2, 2).unwrap();

    let summary = board.get_summary();
    let ids: Vec<_> = summary.iter().map(|m| m.id()).collect();
    assert_eq!(ids, [spain, mexico, germany]);
    let totals: Vec<u64> = summary.iter().map(|m| m.total_score()).collect();
    assert_eq!(totals, [12, 5, 4]);
}

#[test]
fn test_equal_totals_most_recent_first() {
    let mut board = Scoreboard::in_memory();
    let early = board.start_match_at("Mexico", "Canada", at(0)).unwrap();
    let late = board.start_match_at("Spain", "Brazil", at(1)).unwrap();

    board.update_score(early, 3, 2).unwrap();
    board.update_score(late, 1, 4).unwrap();

    let ids: Vec<_> = board.get_summary().iter().map(|m| m.id()).collect();
    assert_eq!(ids, [late, early]);
}

#[test]
fn test_full_world_cup_summary() {
    let board = world_cup();

    assert_eq!(
        teams(&board.get_summary()),
        [
            ("Uruguay".to_string(), "Italy".to_string()),
            ("Spain".to_string(), "Brazil".to_string()),
            ("Mexico".to_string(), "Canada".to_string()),
            ("Argentina".to_string(), "Australia".to_string()),
            ("Germany".to_string(), "France".to_string()),
        ]
    );
}

#[test]
fn test_get_matches_keeps_start_order() {
    let board = world_cup();
    let homes: Vec<String> = teams(&board.get_matches())
        .into_iter()
        .map(|(home, _)| home)
        .collect();
    assert_eq!(homes, ["Mexico", "Spain", "Germany", "Uruguay", "Argentina"]);
}

#[test]
fn test_reads_are_repeatable() {
    let board = world_cup();
    assert_eq!(board.get_matches(), board.get_matches());
    assert_eq!(board.get_summary(), board.get_summary());
}

#[test]
fn test_summary_reflects_finish() {
    let mut board = world_cup();
    board.finish_match_by_teams("Uruguay", "Italy").unwrap();

    let summary = board.get_summary();
    assert_eq!(summary.len(), 4);
    assert_eq!(summary[0].home_team().name(), "Spain");
}

#[test]
fn test_empty_summary() {
    let board = Scoreboard::in_memory();
    assert!(board.get_summary().is_empty());
}

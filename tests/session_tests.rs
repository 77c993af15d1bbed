//! Session tests - click sequences through the public facade

use tui_boggle::core::{
    CommitResult, DieSet, GameError, GameSession, Grid, Lexicon, Outcome, ScoreTable, SimpleRng,
};
use tui_boggle::types::{CellState, Phase, Position, Selection};

// C A S E
// X T E X
// X X X X
// X X X Qu
fn session_with(words: &[&str], table: ScoreTable) -> GameSession {
    let grid = Grid::from_letters(
        4,
        4,
        &[
            "C", "A", "S", "E", "X", "T", "E", "X", "X", "X", "X", "X", "X", "X", "X", "Qu",
        ],
    )
    .unwrap();
    GameSession::with_grid(
        Lexicon::from_words(words).unwrap(),
        table,
        grid,
        DieSet::standard(),
        SimpleRng::new(2024),
    )
    .unwrap()
}

fn cat_session() -> GameSession {
    session_with(&["CAT"], ScoreTable::new([(3, 1)], 11))
}

fn pick(session: &mut GameSession, row: usize, col: usize) -> Outcome {
    session
        .handle_selection(Selection::GridPick(Position::new(row, col)))
        .unwrap()
        .outcome
}

fn trace(session: &mut GameSession, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        let _ = pick(session, row, col);
    }
}

#[test]
fn test_cat_end_to_end() {
    let mut session = cat_session();

    assert_eq!(pick(&mut session, 0, 0), Outcome::Started);
    assert_eq!(session.current_word(), "C");
    assert_eq!(session.phase(), Phase::Building);

    assert_eq!(pick(&mut session, 0, 1), Outcome::Extended);
    assert_eq!(session.current_word(), "CA");

    assert_eq!(pick(&mut session, 1, 1), Outcome::Extended);
    assert_eq!(session.current_word(), "CAT");

    assert_eq!(
        pick(&mut session, 1, 1),
        Outcome::Committed(CommitResult::Scored {
            word: "CAT".to_string(),
            points: 1
        })
    );
    assert_eq!(session.found_words(), &["CAT".to_string()]);
    assert_eq!(session.score(), 1);
    assert_eq!(session.max_score(), 1);
    assert!(session.path().is_empty());
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn test_abandon_on_non_adjacent_pick() {
    let mut session = cat_session();
    trace(&mut session, &[(0, 0), (0, 1)]);

    assert_eq!(pick(&mut session, 3, 3), Outcome::Abandoned);
    assert!(session.path().is_empty());
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.found_words().is_empty());
    assert_eq!(session.score(), 0);
    assert!(session
        .grid()
        .cells()
        .iter()
        .all(|c| c.state() == CellState::Unselected));
}

#[test]
fn test_abandon_does_not_start_new_word() {
    let mut session = cat_session();
    trace(&mut session, &[(0, 0), (0, 1), (3, 3)]);

    // The abandoning click is consumed; the next click starts fresh.
    assert_eq!(pick(&mut session, 3, 3), Outcome::Started);
    assert_eq!(session.current_word(), "Qu");
}

#[test]
fn test_exit_from_any_phase() {
    let mut idle = cat_session();
    let t = idle.handle_selection(Selection::Exit).unwrap();
    assert!(!t.continue_playing);

    let mut building = cat_session();
    trace(&mut building, &[(0, 0), (0, 1)]);
    let before = building.snapshot();
    let t = building.handle_selection(Selection::Exit).unwrap();
    assert!(!t.continue_playing);
    assert_eq!(t.outcome, Outcome::Exited);
    assert_eq!(building.snapshot(), before);
}

#[test]
fn test_duplicate_word_scores_once() {
    let mut session = cat_session();
    trace(&mut session, &[(0, 0), (0, 1), (1, 1), (1, 1)]);

    trace(&mut session, &[(0, 0), (0, 1), (1, 1)]);
    assert_eq!(
        pick(&mut session, 1, 1),
        Outcome::Committed(CommitResult::Duplicate {
            word: "CAT".to_string()
        })
    );
    assert_eq!(session.found_words().len(), 1);
    assert_eq!(session.score(), 1);
    assert!(session.path().is_empty());
}

#[test]
fn test_lookup_ignores_case_of_lexicon() {
    let mut session = session_with(&["seat", "eats"], ScoreTable::standard());
    // S(0,2) E(1,2) A(0,1) T(1,1)
    trace(&mut session, &[(0, 2), (1, 2), (0, 1), (1, 1), (1, 1)]);
    assert_eq!(session.found_words(), &["SEAT".to_string()]);
    assert_eq!(session.score(), 1);
}

#[test]
fn test_found_words_keep_insertion_order() {
    let mut session = session_with(&["CAT", "SEAT", "EAT"], ScoreTable::standard());
    trace(&mut session, &[(0, 2), (1, 2), (0, 1), (1, 1), (1, 1)]);
    trace(&mut session, &[(0, 0), (0, 1), (1, 1), (1, 1)]);
    trace(&mut session, &[(1, 2), (0, 1), (1, 1), (1, 1)]);

    assert_eq!(
        session.found_words(),
        &["SEAT".to_string(), "CAT".to_string(), "EAT".to_string()]
    );
    assert_eq!(session.score(), 3);
    assert_eq!(session.status_line(), "Current Score: 3, Max Score: 3");
}

#[test]
fn test_reset_twice_matches_reset_once() {
    let mut session = cat_session();
    trace(&mut session, &[(0, 0), (0, 1), (1, 1), (1, 1), (0, 2)]);

    let _ = session.handle_selection(Selection::Reset).unwrap();
    let once = (
        session.path().is_empty(),
        session.found_words().len(),
        session.score(),
        session.max_score(),
        session.phase(),
    );
    let _ = session.handle_selection(Selection::Reset).unwrap();
    let twice = (
        session.path().is_empty(),
        session.found_words().len(),
        session.score(),
        session.max_score(),
        session.phase(),
    );

    assert_eq!(once, (true, 0, 0, 1, Phase::Idle));
    assert_eq!(once, twice);
    assert_eq!(session.grid().cells().len(), 16);
    assert!(session
        .grid()
        .cells()
        .iter()
        .all(|c| c.state() == CellState::Unselected));
}

#[test]
fn test_reset_reshakes_from_standard_dice() {
    let mut session = cat_session();
    let _ = session.handle_selection(Selection::Reset).unwrap();

    let dice = DieSet::standard();
    for cell in session.grid().cells() {
        assert!(dice.dice().iter().any(|d| d.has_face(cell.letter())));
    }
}

#[test]
fn test_out_of_bounds_pick_is_an_error() {
    let mut session = cat_session();
    let err = session
        .handle_selection(Selection::GridPick(Position::new(7, 0)))
        .unwrap_err();
    assert!(matches!(
        err,
        GameError::OutOfBounds {
            row: 7,
            col: 0,
            rows: 4,
            cols: 4
        }
    ));
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn test_clicks_off_the_board_change_nothing() {
    let mut session = cat_session();
    trace(&mut session, &[(0, 0)]);
    let before = session.snapshot();

    let t = session.handle_selection(Selection::OutsideGrid).unwrap();
    assert!(t.continue_playing);
    assert_eq!(t.outcome, Outcome::Ignored);
    assert_eq!(session.snapshot(), before);
}

//! Game state integration tests
//!
//! Level progression and used-flag bookkeeping over documents built in code.

use trivia::game::{
    Category, CategoryBoard, FinalQuestion, GameDocument, GameState, Level, LevelContent, Question,
};

fn board_level(number: u32, names: &[&str], values: &[i64]) -> Level {
    let categories = names
        .iter()
        .map(|name| {
            Category::new(
                *name,
                values
                    .iter()
                    .map(|&v| Question::new(v, format!("{} {}?", name, v), format!("{} {}!", name, v)))
                    .collect(),
            )
        })
        .collect();
    Level {
        number,
        content: LevelContent::Board(CategoryBoard::new(categories).unwrap()),
    }
}

fn final_level(number: u32) -> Level {
    Level {
        number,
        content: LevelContent::Final(FinalQuestion {
            prompt: "Final?".to_string(),
            answer: "Final!".to_string(),
            value: 2000,
        }),
    }
}

fn document(levels: Vec<Level>) -> GameDocument {
    GameDocument {
        id: "test".to_string(),
        title: "Test Game".to_string(),
        levels,
    }
}

// ============================================================================
// Level cursor
// ============================================================================

#[test]
fn test_fresh_state_starts_at_first_level() {
    let doc = document(vec![
        board_level(1, &["A"], &[100]),
        board_level(2, &["B"], &[200]),
        final_level(3),
    ]);
    let first = doc.levels[0].clone();
    let state = GameState::new(doc);

    assert_eq!(state.current_level(), Some(&first));
    assert_eq!(state.level_index(), 0);
}

#[test]
fn test_advance_level_true_len_minus_one_times() {
    let state_levels = vec![
        board_level(1, &["A"], &[100]),
        board_level(2, &["B"], &[200]),
        board_level(3, &["C"], &[300]),
        final_level(4),
    ];
    let count = state_levels.len();
    let mut state = GameState::new(document(state_levels));

    for _ in 0..count - 1 {
        assert!(state.advance_level());
    }
    for _ in 0..5 {
        assert!(!state.advance_level());
    }
    assert_eq!(state.level_index(), count - 1);
    assert!(state.is_last_level());
}

#[test]
fn test_empty_document_has_no_current_level() {
    let mut state = GameState::new(document(vec![]));

    assert!(state.current_level().is_none());
    assert!(state.question_at(0, 0).is_none());
    assert!(!state.mark_used(0, 0));
    assert!(!state.is_level_complete());
    assert!(!state.advance_level());
}

// ============================================================================
// Used flags and completion
// ============================================================================

#[test]
fn test_two_by_two_completes_after_fourth_clue() {
    let mut state = GameState::new(document(vec![board_level(1, &["A", "B"], &[100, 200])]));

    let order = [(0, 0), (1, 0), (0, 1), (1, 1)];
    for (i, (c, q)) in order.iter().enumerate() {
        assert!(state.mark_used(*c, *q));
        let expect_complete = i == order.len() - 1;
        assert_eq!(state.is_level_complete(), expect_complete, "after clue {}", i + 1);
    }
}

#[test]
fn test_mark_used_is_idempotent() {
    let mut state = GameState::new(document(vec![board_level(1, &["A"], &[100])]));

    assert!(state.mark_used(0, 0));
    let complete_once = state.is_level_complete();
    assert!(!state.mark_used(0, 0));

    assert!(state.question_at(0, 0).unwrap().used);
    assert_eq!(state.is_level_complete(), complete_once);
}

#[test]
fn test_out_of_range_mark_used_is_noop() {
    let mut state = GameState::new(document(vec![board_level(1, &["A", "B"], &[100])]));

    assert!(!state.mark_used(5, 0));
    assert!(!state.mark_used(0, 5));
    assert_eq!(state.remaining_questions(), 2);
}

#[test]
fn test_final_only_level_has_no_questions_and_never_completes() {
    let mut state = GameState::new(document(vec![final_level(1)]));

    for c in 0..3 {
        for q in 0..3 {
            assert!(state.question_at(c, q).is_none());
            assert!(!state.mark_used(c, q));
        }
    }
    assert!(!state.is_level_complete());
    assert!(state.current_level().unwrap().is_final());
}

#[test]
fn test_used_flags_stay_with_their_level() {
    let mut state = GameState::new(document(vec![
        board_level(1, &["A"], &[100]),
        board_level(2, &["B"], &[100]),
    ]));

    state.mark_used(0, 0);
    assert!(state.is_level_complete());
    assert!(state.advance_level());

    assert!(!state.question_at(0, 0).unwrap().used);
    assert!(!state.is_level_complete());
    assert!(state.document().levels[0].board().unwrap().question(0, 0).unwrap().used);
}

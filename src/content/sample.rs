//! Built-in sample game, used when no game files are available.

use crate::game::{
    Category, CategoryBoard, FinalQuestion, GameDocument, Level, LevelContent, Question,
};

const LEVEL_ONE_VALUES: [i64; 5] = [100, 200, 300, 400, 500];
const LEVEL_TWO_VALUES: [i64; 5] = [200, 400, 600, 800, 1000];
const SAMPLE_CATEGORIES: usize = 5;
const SAMPLE_FINAL_VALUE: i64 = 2000;

fn sample_board(name_suffix: &str, values: &[i64]) -> CategoryBoard {
    let categories = (1..=SAMPLE_CATEGORIES)
        .map(|c| {
            Category::new(
                format!("Category {}{}", c, name_suffix),
                values
                    .iter()
                    .map(|&v| {
                        Question::new(
                            v,
                            format!("Sample Question ${}", v),
                            format!("Sample Answer ${}", v),
                        )
                    })
                    .collect(),
            )
        })
        .collect();

    // Every category shares the same value list, so the board is uniform
    CategoryBoard::new(categories).unwrap_or_default()
}

/// Two 5x5 boards followed by a final question.
pub fn sample_game() -> GameDocument {
    GameDocument {
        id: "sample".to_string(),
        title: "Sample Trivia".to_string(),
        levels: vec![
            Level {
                number: 1,
                content: LevelContent::Board(sample_board("", &LEVEL_ONE_VALUES)),
            },
            Level {
                number: 2,
                content: LevelContent::Board(sample_board("+", &LEVEL_TWO_VALUES)),
            },
            Level {
                number: 3,
                content: LevelContent::Final(FinalQuestion {
                    prompt: "Final: Sample Final".to_string(),
                    answer: "Sample Answer".to_string(),
                    value: SAMPLE_FINAL_VALUE,
                }),
            },
        ],
    }
}

//! Wire format for game documents (JSON).
//!
//! These mirror the file layout exactly, including the two optional level
//! fields. Validation into the core types happens in `loader`.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RawGame {
    pub id: String,
    pub title: String,
    pub levels: Vec<RawLevel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLevel {
    pub level: u32,
    #[serde(default)]
    pub categories: Option<Vec<RawCategory>>,
    #[serde(default, rename = "final")]
    pub final_question: Option<RawFinal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub name: String,
    pub questions: Vec<RawQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub value: i64,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFinal {
    pub question: String,
    pub answer: String,
    pub value: i64,
}

//! Category classifier
//!
//! The table below is the only place that knows which label belongs to which
//! category.

use super::MatchOutcome;
use crate::domain::entities::{Category, TypeLabel};

const CATEGORY_TABLE: &[(&str, Category)] = &[
    ("jpeg", Category::Image),
    ("png", Category::Image),
    ("gif", Category::Image),
    ("wav", Category::Audio),
    ("ogg", Category::Audio),
    ("mp3", Category::Audio),
    ("pdf", Category::Document),
    ("docx", Category::Document),
];

/// Maps a type label to its category; unlisted labels are `Unknown`
pub fn classify(label: &str) -> Category {
    CATEGORY_TABLE
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, category)| *category)
        .unwrap_or(Category::Unknown)
}

/// Classifies a matcher outcome; `Empty` and `NoMatch` are `Unknown`
pub fn classify_outcome(outcome: &MatchOutcome) -> Category {
    outcome
        .label()
        .map(TypeLabel::as_str)
        .map(classify)
        .unwrap_or(Category::Unknown)
}

//! Password evaluation sections
//!
//! Each section scores one aspect of the password and may add suggestions.

mod common;
mod length;
mod repetition;
mod variety;

pub use common::common_pattern_section;
pub use length::length_section;
pub use repetition::repetition_section;
pub use variety::character_variety_section;

/// Points and suggestions contributed by one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionResult {
    pub points: i64,
    pub feedback: Vec<String>,
}

impl SectionResult {
    pub fn points(points: i64) -> Self {
        Self {
            points,
            feedback: Vec::new(),
        }
    }

    pub fn add(&mut self, points: i64) {
        self.points += points;
    }

    pub fn suggest(&mut self, feedback: &str) {
        self.feedback.push(feedback.to_string());
    }
}

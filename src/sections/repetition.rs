//! Repetition section - penalizes runs of the same character.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MAX_RUN: usize = 2;
const REPETITION_PENALTY: i64 = -1;

/// Penalizes any character repeated three or more times in a row.
pub fn repetition_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();

    let mut run = 1;
    for pair in chars.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
            if run > MAX_RUN {
                let mut result = SectionResult::points(REPETITION_PENALTY);
                result.suggest("Avoid repeating characters");
                return result;
            }
        } else {
            run = 1;
        }
    }

    SectionResult::default()
}

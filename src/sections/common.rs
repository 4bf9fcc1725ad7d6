//! Common pattern section - detects well-known keyboard and word fragments.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const COMMON_PATTERNS: [&str; 5] = ["123", "abc", "qwe", "password", "admin"];
const COMMON_PATTERN_PENALTY: i64 = -2;

/// Penalizes passwords containing a common fragment, ignoring case.
pub fn common_pattern_section(password: &SecretString) -> SectionResult {
    let lowered = password.expose_secret().to_lowercase();
    if COMMON_PATTERNS.iter().any(|pattern| lowered.contains(pattern)) {
        let mut result = SectionResult::points(COMMON_PATTERN_PENALTY);
        result.suggest("Avoid common patterns");
        return result;
    }
    SectionResult::default()
}

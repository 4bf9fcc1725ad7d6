//! Length section - rewards longer passwords.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MIN_LENGTH: usize = 8;
const LENGTH_STEPS: [usize; 3] = [MIN_LENGTH, 12, 16];

/// One point per length step reached (8, 12, 16 characters).
///
/// Passwords under the minimum get a suggestion instead.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    let steps = LENGTH_STEPS.iter().filter(|&&step| len >= step).count();

    let mut result = SectionResult::points(steps as i64);
    if len < MIN_LENGTH {
        result.suggest(&format!("Consider using at least {} characters", MIN_LENGTH));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(pwd: &str) -> SectionResult {
        length_section(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_length_section_too_short() {
        let result = section("Short1!");
        assert_eq!(result.points, 0);
        assert_eq!(
            result.feedback,
            vec!["Consider using at least 8 characters".to_string()]
        );
    }

    #[test]
    fn test_length_section_steps() {
        assert_eq!(section("12345678").points, 1);
        assert_eq!(section("12345678901").points, 1);
        assert_eq!(section("123456789012").points, 2);
        assert_eq!(section("1234567890123456").points, 3);
        assert_eq!(section(&"x".repeat(50)).points, 3);
    }

    #[test]
    fn test_length_section_no_feedback_at_minimum() {
        assert!(section("12345678").feedback.is_empty());
    }
}

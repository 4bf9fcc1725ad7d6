//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::ClassPresence;
use crate::sections::{
    SectionResult, character_variety_section, common_pattern_section, length_section,
    repetition_section,
};
use crate::types::{StrengthLabel, StrengthResult, StrengthScore};

const MAX_FEEDBACK: usize = 3;

/// Estimates entropy in bits as `length * log2(pool)`, where the pool is
/// the summed size of the character classes found in the password.
pub fn estimate_entropy(password: &str) -> f64 {
    let pool = ClassPresence::detect(password).pool_size();
    if pool == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(pool).log2()
}

/// Evaluates password strength.
///
/// Deterministic: the same password always yields the same result.
/// An empty password is rated Very Weak with no suggestions.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthResult {
    if password.expose_secret().is_empty() {
        return StrengthResult {
            score: StrengthScore::new(0),
            label: StrengthLabel::VeryWeak,
            entropy_bits: 0.0,
            feedback: Vec::new(),
        };
    }

    let mut raw_score: i64 = 0;
    let mut feedback = Vec::new();

    // Orchestrator: execute sections in sequence, feedback keeps section order
    let sections: [(&str, fn(&SecretString) -> SectionResult); 4] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("repetition", repetition_section),
        ("common", common_pattern_section),
    ];

    for (_section_name, section_fn) in sections {
        let result = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, points = result.points, "section evaluated");

        raw_score += result.points;
        feedback.extend(result.feedback);
    }

    let entropy_bits = estimate_entropy(password.expose_secret());
    feedback.truncate(MAX_FEEDBACK);

    StrengthResult {
        score: StrengthScore::new(raw_score),
        label: StrengthLabel::classify(raw_score, entropy_bits),
        entropy_bits,
        feedback,
    }
}

/// Async version that sends the evaluation result via channel.
///
/// Waits a short debounce first; if `token` is cancelled in the meantime
/// nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(Duration::from_millis(300)) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(pwd: &str) -> StrengthResult {
        evaluate_password_strength(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_evaluate_repeated_lowercase() {
        let evaluation = evaluate("aaaaaaaa");

        // +1 length, +1 lowercase, -1 repetition
        assert_eq!(evaluation.score.value(), 1);
        assert_eq!(evaluation.label, StrengthLabel::VeryWeak);
        assert_eq!(
            evaluation.feedback,
            vec![
                "Add uppercase letters".to_string(),
                "Add numbers".to_string(),
                "Add special characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_evaluate_repetition_penalty_applied() {
        // Same shape without the run scores one point higher
        assert_eq!(evaluate("asdfghjk").score.value(), 2);
        assert_eq!(evaluate("aaaaaaaa").score.value(), 1);
    }

    #[test]
    fn test_evaluate_all_classes_sixteen_chars() {
        let evaluation = evaluate("Tr0ub4dor&3XyZ!q");

        // 3 length steps + 4 classes + 2 bonus
        assert_eq!(evaluation.score.value(), 9);
        assert!((evaluation.entropy_bits - 16.0 * 94f64.log2()).abs() < 1e-9);
        assert_eq!(evaluation.rounded_entropy(), 105);
        assert_eq!(evaluation.label, StrengthLabel::Strong);
        assert!(evaluation.feedback.is_empty());
    }

    #[test]
    fn test_evaluate_fifteen_chars_is_good() {
        let evaluation = evaluate("Tr0ub4dor&3XyZ!");
        assert_eq!(evaluation.score.value(), 8);
        assert_eq!(evaluation.label, StrengthLabel::Good);
    }

    #[test]
    fn test_evaluate_common_pattern() {
        let evaluation = evaluate("Password123!");
        // 2 length + 4 classes + 2 bonus - 2 common
        assert_eq!(evaluation.score.value(), 6);
        assert_eq!(evaluation.label, StrengthLabel::Fair);
        assert_eq!(evaluation.feedback, vec!["Avoid common patterns".to_string()]);
    }

    #[test]
    fn test_evaluate_short_password_feedback_first() {
        let evaluation = evaluate("ab1");
        assert_eq!(
            evaluation.feedback,
            vec![
                "Consider using at least 8 characters".to_string(),
                "Add uppercase letters".to_string(),
                "Add special characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_evaluate_score_never_negative() {
        let evaluation = evaluate("123");
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.label, StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.entropy_bits, 0.0);
        assert_eq!(evaluation.label, StrengthLabel::VeryWeak);
        assert!(evaluation.feedback.is_empty());
    }

    #[test]
    fn test_evaluate_single_char_still_gets_feedback() {
        let evaluation = evaluate("a");
        assert_eq!(
            evaluation.feedback,
            vec![
                "Consider using at least 8 characters".to_string(),
                "Add uppercase letters".to_string(),
                "Add numbers".to_string(),
            ]
        );
    }

    #[test]
    fn test_evaluate_entropy_downgrades_label() {
        // Score alone would be Good, but 8 * log2(94) is only ~52 bits
        let evaluation = evaluate("Zk4!Zk4!");
        assert_eq!(evaluation.score.value(), 7);
        assert_eq!(evaluation.label, StrengthLabel::Fair);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        for pwd in ["", "aaaaaaaa", "Tr0ub4dor&3XyZ!q", "qwerty", "x"] {
            assert_eq!(evaluate(pwd), evaluate(pwd));
        }
    }

    #[test]
    fn test_estimate_entropy() {
        assert_eq!(estimate_entropy(""), 0.0);
        assert!((estimate_entropy("abcd") - 4.0 * 26f64.log2()).abs() < 1e-9);
        assert!((estimate_entropy("aB") - 2.0 * 52f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_score_bounds() {
        let long = "aB3$".repeat(12);
        for pwd in ["", "a", "password", "MyPass123!", long.as_str()] {
            let score = evaluate(pwd).score.value();
            assert!((0..=12).contains(&score), "score {score} out of bounds for {pwd}");
        }
    }
}

//! Strength evaluation types.

use std::fmt;

/// Upper bound of the heuristic score.
pub const MAX_SCORE: i64 = 12;

/// Heuristic score, clamped to `0..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrengthScore(i64);

impl StrengthScore {
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, MAX_SCORE))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Coarse strength category derived from score and entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Picks the label for a raw score and entropy estimate.
    ///
    /// Tiers are checked from weakest up; a low entropy pulls an otherwise
    /// good score down to the first tier whose entropy floor it misses.
    pub fn classify(score: i64, entropy_bits: f64) -> Self {
        if score <= 2 || entropy_bits < 30.0 {
            StrengthLabel::VeryWeak
        } else if score <= 4 || entropy_bits < 50.0 {
            StrengthLabel::Weak
        } else if score <= 6 || entropy_bits < 70.0 {
            StrengthLabel::Fair
        } else if score <= 8 || entropy_bits < 90.0 {
            StrengthLabel::Good
        } else if score <= 10 || entropy_bits < 120.0 {
            StrengthLabel::Strong
        } else {
            StrengthLabel::VeryStrong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a strength evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthResult {
    pub score: StrengthScore,
    pub label: StrengthLabel,
    pub entropy_bits: f64,
    /// At most three suggestions, in evaluation order.
    pub feedback: Vec<String>,
}

impl StrengthResult {
    /// Entropy rounded to whole bits, as shown to users.
    pub fn rounded_entropy(&self) -> u32 {
        self.entropy_bits.round() as u32
    }

    pub fn entropy_hint(&self) -> &'static str {
        match self.rounded_entropy() {
            90.. => "Excellent entropy!",
            70..=89 => "Good entropy.",
            50..=69 => "Fair entropy.",
            _ => "Consider increasing complexity.",
        }
    }
}

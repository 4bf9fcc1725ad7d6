//! Password generator - builds the alphabet and samples characters.

use rand::Rng;
use secrecy::SecretString;
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::charset::CharClass;

/// Validation failures reported instead of a password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Please select at least one character type")]
    EmptyAlphabet,
    #[error("Length must be between {min}-{max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },
}

/// Accepted length bounds.
///
/// `Classic` is the single-field form with a fixed full alphabet, `Extended`
/// the form with per-class toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    Classic,
    #[default]
    Extended,
}

impl LengthPolicy {
    pub fn range(&self) -> RangeInclusive<usize> {
        match self {
            LengthPolicy::Classic => 8..=20,
            LengthPolicy::Extended => 4..=50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
    pub policy: LengthPolicy,
}

impl GenerationOptions {
    /// Toggleable classes (all enabled), length bounded to 4..=50.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_symbols: true,
            policy: LengthPolicy::Extended,
        }
    }

    /// Full fixed alphabet, length bounded to 8..=20.
    pub fn classic(length: usize) -> Self {
        Self {
            policy: LengthPolicy::Classic,
            ..Self::new(length)
        }
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.use_upper,
            CharClass::Lower => self.use_lower,
            CharClass::Digit => self.use_digits,
            CharClass::Symbol => self.use_symbols,
        }
    }

    /// Enabled classes concatenated in upper, lower, digit, symbol order.
    pub fn alphabet(&self) -> Vec<char> {
        CharClass::ALL
            .iter()
            .filter(|class| self.is_enabled(**class))
            .flat_map(|class| class.chars().chars())
            .collect()
    }

    fn validate(&self) -> Result<Vec<char>, GenerateError> {
        let alphabet = self.alphabet();
        if alphabet.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }

        let range = self.policy.range();
        if !range.contains(&self.length) {
            return Err(GenerateError::LengthOutOfRange {
                length: self.length,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(alphabet)
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(12)
    }
}

/// Generates a password using the supplied random source.
///
/// Every position is drawn independently and uniformly from the alphabet.
///
/// # Errors
///
/// - `EmptyAlphabet` if no class is enabled (checked first)
/// - `LengthOutOfRange` if the length falls outside the policy bound
pub fn generate<R: Rng + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<SecretString, GenerateError> {
    let alphabet = options.validate()?;

    let password: String = (0..options.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    Ok(SecretString::new(password.into()))
}

/// Generates a password with the thread-local random source.
pub fn generate_password(options: &GenerationOptions) -> Result<SecretString, GenerateError> {
    generate(options, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;

    fn flag_combinations() -> Vec<GenerationOptions> {
        (1u8..16)
            .map(|bits| GenerationOptions {
                length: 12,
                use_upper: bits & 1 != 0,
                use_lower: bits & 2 != 0,
                use_digits: bits & 4 != 0,
                use_symbols: bits & 8 != 0,
                policy: LengthPolicy::Extended,
            })
            .collect()
    }

    #[test]
    fn test_alphabet_order() {
        let options = GenerationOptions::new(12);
        let alphabet: String = options.alphabet().into_iter().collect();
        assert!(alphabet.starts_with("ABC"));
        assert!(alphabet.ends_with("-="));
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 29);

        let options = GenerationOptions {
            use_upper: false,
            use_symbols: false,
            ..GenerationOptions::new(12)
        };
        let alphabet: String = options.alphabet().into_iter().collect();
        assert_eq!(alphabet, "abcdefghijklmnopqrstuvwxyz0123456789");
    }

    #[test]
    fn test_generate_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(7);
        for options in flag_combinations() {
            let alphabet = options.alphabet();
            for length in [4, 12, 50] {
                let options = GenerationOptions { length, ..options.clone() };
                let pwd = generate(&options, &mut rng).expect("valid options");
                let pwd = pwd.expose_secret();
                assert_eq!(pwd.chars().count(), length);
                assert!(pwd.chars().all(|c| alphabet.contains(&c)));
            }
        }
    }

    #[test]
    fn test_generate_empty_alphabet_for_every_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in 0..=60 {
            let options = GenerationOptions {
                length,
                use_upper: false,
                use_lower: false,
                use_digits: false,
                use_symbols: false,
                policy: LengthPolicy::Extended,
            };
            assert_eq!(
                generate(&options, &mut rng).unwrap_err(),
                GenerateError::EmptyAlphabet
            );
        }
    }

    #[test]
    fn test_generate_length_out_of_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for options in flag_combinations() {
            for length in [0, 3, 51, 100] {
                let options = GenerationOptions { length, ..options.clone() };
                assert!(matches!(
                    generate(&options, &mut rng),
                    Err(GenerateError::LengthOutOfRange { min: 4, max: 50, .. })
                ));
            }
        }
    }

    #[test]
    fn test_classic_policy_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate(&GenerationOptions::classic(7), &mut rng).is_err());
        assert!(generate(&GenerationOptions::classic(21), &mut rng).is_err());

        let pwd = generate(&GenerationOptions::classic(8), &mut rng).unwrap();
        assert_eq!(pwd.expose_secret().len(), 8);
        let pwd = generate(&GenerationOptions::classic(20), &mut rng).unwrap();
        assert_eq!(pwd.expose_secret().len(), 20);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GenerateError::EmptyAlphabet.to_string(),
            "Please select at least one character type"
        );
        let err = GenerateError::LengthOutOfRange { length: 2, min: 8, max: 20 };
        assert_eq!(err.to_string(), "Length must be between 8-20");
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let options = GenerationOptions::default();
        let a = generate(&options, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&options, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn test_generate_password_thread_rng() {
        let pwd = generate_password(&GenerationOptions::default()).unwrap();
        assert_eq!(pwd.expose_secret().len(), 12);
    }
}

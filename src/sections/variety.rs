//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::{CharClass, ClassPresence};

const ALL_CLASSES_BONUS: i64 = 2;

/// One point per class present, plus a bonus when all four are present.
///
/// Missing classes are reported in lowercase, uppercase, numbers, special order.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let presence = ClassPresence::detect(password.expose_secret());
    let checks = [
        (CharClass::Lower, "Add lowercase letters"),
        (CharClass::Upper, "Add uppercase letters"),
        (CharClass::Digit, "Add numbers"),
        (CharClass::Symbol, "Add special characters"),
    ];

    let mut result = SectionResult::default();
    for (class, suggestion) in checks {
        if presence.contains(class) {
            result.add(1);
        } else {
            result.suggest(suggestion);
        }
    }

    if presence.all() {
        result.add(ALL_CLASSES_BONUS);
    }
    result
}

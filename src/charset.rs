//! Character classes shared by the generator and the scorer.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// One of the four character classes, in alphabet assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Characters contributed to a generation alphabet.
    pub fn chars(&self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Pool size assumed when the class is detected in a password.
    ///
    /// Symbols count as 32 regardless of which symbols the generator offers.
    pub fn pool_size(&self) -> u32 {
        match self {
            CharClass::Upper | CharClass::Lower => 26,
            CharClass::Digit => 10,
            CharClass::Symbol => 32,
        }
    }

    /// Classifies a single character. Anything not ASCII alphanumeric is a symbol.
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            CharClass::Upper
        } else if c.is_ascii_lowercase() {
            CharClass::Lower
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Symbol
        }
    }
}

/// Classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassPresence {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl ClassPresence {
    pub fn detect(password: &str) -> Self {
        password
            .chars()
            .fold(ClassPresence::default(), |mut presence, c| {
                match CharClass::of(c) {
                    CharClass::Upper => presence.upper = true,
                    CharClass::Lower => presence.lower = true,
                    CharClass::Digit => presence.digit = true,
                    CharClass::Symbol => presence.symbol = true,
                }
                presence
            })
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digit,
            CharClass::Symbol => self.symbol,
        }
    }

    pub fn all(&self) -> bool {
        self.upper && self.lower && self.digit && self.symbol
    }

    /// Sum of the pool sizes of the detected classes.
    pub fn pool_size(&self) -> u32 {
        CharClass::ALL
            .iter()
            .filter(|class| self.contains(**class))
            .map(CharClass::pool_size)
            .sum()
    }
}

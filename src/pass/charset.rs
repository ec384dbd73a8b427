//! Character set building for password generation.

use super::GenerationConfig;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()";

/// A fixed, ordered set of characters that can be switched on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Classes in charset order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Numbers => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    fn selected(self, config: &GenerationConfig) -> bool {
        match self {
            CharClass::Uppercase => config.include_uppercase,
            CharClass::Lowercase => config.include_lowercase,
            CharClass::Numbers => config.include_numbers,
            CharClass::Symbols => config.include_symbols,
        }
    }
}

/// Build the character pool for a config.
///
/// Selected classes are concatenated in [`CharClass::ALL`] order. A config
/// that selects no class gets the full pool instead of an empty one.
pub fn build(config: &GenerationConfig) -> Vec<u8> {
    let fallback = config.selects_nothing();
    CharClass::ALL
        .iter()
        .filter(|class| fallback || class.selected(config))
        .flat_map(|class| class.chars().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

    fn config(upper: bool, lower: bool, numbers: bool, symbols: bool) -> GenerationConfig {
        GenerationConfig {
            length: 8,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn class_sizes() {
        assert_eq!(CharClass::Uppercase.chars().len(), 26);
        assert_eq!(CharClass::Lowercase.chars().len(), 26);
        assert_eq!(CharClass::Numbers.chars().len(), 10);
        assert_eq!(CharClass::Symbols.chars().len(), 10);
    }

    #[test]
    fn full_pool_in_class_order() {
        let chars = build(&config(true, true, true, true));
        assert_eq!(chars, FULL.as_bytes());
    }

    #[test]
    fn empty_selection_falls_back_to_everything() {
        let none = config(false, false, false, false);
        assert_eq!(build(&none), FULL.as_bytes());
        assert_eq!(build(&none).len(), 72);
    }

    #[test]
    fn partial_selection_keeps_order() {
        let chars = build(&config(false, true, false, true));
        assert_eq!(chars, b"abcdefghijklmnopqrstuvwxyz!@#$%^&*()");
    }
}

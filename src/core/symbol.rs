//! Code peg symbols
//!
//! A Symbol is one color from the fixed game alphabet. Codes are ordered
//! sequences of symbols, and all matching is exact value equality.

use rand::Rng;
use std::fmt;

/// One color in the game alphabet
///
/// Each symbol is written as its first letter when codes are displayed or
/// parsed (`R`, `O`, `G`, `B`, `P`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Red,
    Orange,
    Green,
    Blue,
    Purple,
}

impl Symbol {
    /// Every symbol in the alphabet, in display order
    pub const ALPHABET: [Self; 5] = [
        Self::Red,
        Self::Orange,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// The single-letter form used in codes
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Orange => 'O',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Purple => 'P',
        }
    }

    /// The full color name, for help text
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
        }
    }

    /// Parse a symbol from its letter, case-insensitively
    ///
    /// Returns `None` for any character outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('R'), Some(Symbol::Red));
    /// assert_eq!(Symbol::from_char('g'), Some(Symbol::Green));
    /// assert_eq!(Symbol::from_char('X'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'O' => Some(Self::Orange),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'P' => Some(Self::Purple),
            _ => None,
        }
    }

    /// Draw one symbol uniformly at random from the alphabet
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALPHABET[rng.random_range(0..Self::ALPHABET.len())]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn alphabet_letters_round_trip() {
        for symbol in Symbol::ALPHABET {
            assert_eq!(Symbol::from_char(symbol.letter()), Some(symbol));
        }
    }

    #[test]
    fn from_char_case_insensitive() {
        assert_eq!(Symbol::from_char('r'), Some(Symbol::Red));
        assert_eq!(Symbol::from_char('R'), Some(Symbol::Red));
        assert_eq!(Symbol::from_char('b'), Some(Symbol::Blue));
        assert_eq!(Symbol::from_char('P'), Some(Symbol::Purple));
    }

    #[test]
    fn from_char_rejects_foreign_characters() {
        assert_eq!(Symbol::from_char('Y'), None); // Yellow is not in the alphabet
        assert_eq!(Symbol::from_char('X'), None);
        assert_eq!(Symbol::from_char('1'), None);
        assert_eq!(Symbol::from_char(' '), None);
    }

    #[test]
    fn alphabet_has_five_distinct_symbols() {
        assert_eq!(Symbol::ALPHABET.len(), 5);
        for (i, a) in Symbol::ALPHABET.iter().enumerate() {
            for b in &Symbol::ALPHABET[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn random_stays_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let symbol = Symbol::random(&mut rng);
            assert!(Symbol::ALPHABET.contains(&symbol));
        }
    }

    #[test]
    fn random_is_deterministic_with_seeded_rng() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(Symbol::random(&mut rng1), Symbol::random(&mut rng2));
        }
    }

    #[test]
    fn display_matches_letter() {
        assert_eq!(format!("{}", Symbol::Red), "R");
        assert_eq!(format!("{}", Symbol::Purple), "P");
    }
}

//! Code sequence representation
//!
//! A Code is an ordered sequence of symbols with a fixed length. Order is
//! semantically significant: it is the whole basis of positional matching.

use super::Symbol;
use rand::Rng;
use std::fmt;

/// An ordered, fixed-length sequence of symbols
///
/// Immutable after creation. Used both for the secret and for each guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    symbols: Vec<Symbol>,
}

/// Error type for structurally invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, actual: usize },
    InvalidSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Code must be exactly {expected} symbols, got {actual}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "'{ch}' is not a color in the alphabet")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a Code from a sequence of symbols
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if the sequence length differs
    /// from `expected_len`.
    pub fn new(symbols: Vec<Symbol>, expected_len: usize) -> Result<Self, CodeError> {
        if symbols.len() != expected_len {
            return Err(CodeError::InvalidLength {
                expected: expected_len,
                actual: symbols.len(),
            });
        }
        Ok(Self { symbols })
    }

    /// Parse a Code from text like `"ROGB"`, case-insensitively
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if the character count differs
    /// from `expected_len` (including empty input), or
    /// `CodeError::InvalidSymbol` for the first character outside the
    /// alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::parse("rogb", 4).unwrap();
    /// assert_eq!(code.to_string(), "ROGB");
    ///
    /// assert!(Code::parse("ROG", 4).is_err());
    /// assert!(Code::parse("ROGX", 4).is_err());
    /// ```
    pub fn parse(text: &str, expected_len: usize) -> Result<Self, CodeError> {
        let actual = text.chars().count();
        if actual != expected_len {
            return Err(CodeError::InvalidLength {
                expected: expected_len,
                actual,
            });
        }

        let symbols = text
            .chars()
            .map(|ch| Symbol::from_char(ch).ok_or(CodeError::InvalidSymbol(ch)))
            .collect::<Result<Vec<Symbol>, CodeError>>()?;

        Ok(Self { symbols })
    }

    /// Generate a random Code of `len` symbols
    ///
    /// Each symbol is drawn independently and uniformly from the alphabet,
    /// with replacement, so repeats are possible.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let symbols = (0..len).map(|_| Symbol::random(rng)).collect();
        Self { symbols }
    }

    /// The symbols in order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of symbols in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the code holds no symbols
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_valid_code() {
        let code = Code::parse("ROGB", 4).unwrap();
        assert_eq!(
            code.symbols(),
            &[Symbol::Red, Symbol::Orange, Symbol::Green, Symbol::Blue]
        );
    }

    #[test]
    fn parse_lowercase_normalized() {
        let lower = Code::parse("rogb", 4).unwrap();
        let upper = Code::parse("ROGB", 4).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn parse_invalid_length() {
        assert!(matches!(
            Code::parse("ROG", 4),
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 3
            })
        ));
        assert!(matches!(
            Code::parse("ROGBP", 4),
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 5
            })
        ));
        assert!(matches!(
            Code::parse("", 4),
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 0
            })
        ));
    }

    #[test]
    fn parse_invalid_symbol() {
        assert!(matches!(
            Code::parse("ROGX", 4),
            Err(CodeError::InvalidSymbol('X'))
        ));
        assert!(matches!(
            Code::parse("R1GB", 4),
            Err(CodeError::InvalidSymbol('1'))
        ));
    }

    #[test]
    fn parse_length_checked_before_symbols() {
        // Both wrong length and a foreign character: length wins
        assert!(matches!(
            Code::parse("XX", 4),
            Err(CodeError::InvalidLength { .. })
        ));
    }

    #[test]
    fn new_rejects_wrong_length() {
        let symbols = vec![Symbol::Red, Symbol::Orange];
        assert!(matches!(
            Code::new(symbols, 4),
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 2
            })
        ));
    }

    #[test]
    fn random_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let code = Code::random(4, &mut rng);
        assert_eq!(code.len(), 4);
    }

    #[test]
    fn random_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(Code::random(4, &mut rng1), Code::random(4, &mut rng2));
    }

    #[test]
    fn equality_is_element_wise_in_order() {
        let a = Code::parse("ROGB", 4).unwrap();
        let b = Code::parse("ROGB", 4).unwrap();
        let reordered = Code::parse("BGOR", 4).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, reordered);
    }

    #[test]
    fn display_round_trips() {
        let code = Code::parse("PBRG", 4).unwrap();
        assert_eq!(code.to_string(), "PBRG");
        assert_eq!(Code::parse(&code.to_string(), 4).unwrap(), code);
    }
}

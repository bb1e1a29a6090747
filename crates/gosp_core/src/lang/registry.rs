//! Shareable metadata for `gosp_core::lang` registries.
//!
//! These types are `Copy` so registries can live in `const` tables.

/// Represent a small example snippet for documentation.
///
/// ## Notes
/// - `code` is written in gosp surface syntax and is expected to analyze without errors.
/// - `note` is an optional short explanation (one or two sentences).
///
/// ## Examples
/// ```rust
/// use gosp_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "(if #t 1 2)",
///     note: Some("Two-armed conditional."),
/// };
/// assert!(ex.code.starts_with("(if"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Describe how many parts a special form accepts after its keyword.
///
/// `(if a b c)` has three parts; the keyword itself is never counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    /// Inclusive range.
    Between(usize, usize),
}

impl Arity {
    /// Return `true` if `parts` satisfies this arity.
    pub fn accepts(self, parts: usize) -> bool {
        match self {
            Arity::Exactly(n) => parts == n,
            Arity::AtLeast(n) => parts >= n,
            Arity::Between(lo, hi) => (lo..=hi).contains(&parts),
        }
    }

    /// Human-readable expectation, e.g. `"exactly 1 part"`.
    pub fn describe(self) -> String {
        fn parts(n: usize) -> &'static str {
            if n == 1 { "part" } else { "parts" }
        }
        match self {
            Arity::Exactly(n) => format!("exactly {n} {}", parts(n)),
            Arity::AtLeast(n) => format!("at least {n} {}", parts(n)),
            Arity::Between(lo, hi) if hi == lo + 1 => format!("{lo} or {hi} parts"),
            Arity::Between(lo, hi) => format!("{lo} to {hi} parts"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_accepts() {
        assert!(Arity::Exactly(1).accepts(1));
        assert!(!Arity::Exactly(1).accepts(0));
        assert!(Arity::AtLeast(2).accepts(5));
        assert!(!Arity::AtLeast(2).accepts(1));
        assert!(Arity::Between(2, 3).accepts(2));
        assert!(Arity::Between(2, 3).accepts(3));
        assert!(!Arity::Between(2, 3).accepts(4));
    }

    #[test]
    fn test_arity_describe() {
        assert_eq!(Arity::Exactly(1).describe(), "exactly 1 part");
        assert_eq!(Arity::AtLeast(2).describe(), "at least 2 parts");
        assert_eq!(Arity::Between(2, 3).describe(), "2 or 3 parts");
        assert_eq!(Arity::Between(1, 4).describe(), "1 to 4 parts");
    }
}

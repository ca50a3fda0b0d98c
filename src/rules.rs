//! Rule constants for password evaluation.
//!
//! The defaults are fixed process-wide constants. Callers (mostly
//! tests) may build an alternate `Rules` value; there is no file or
//! environment loading.

/// Minimum acceptable password length in characters.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Upper bound for the final score.
pub const DEFAULT_MAX_SCORE: i64 = 100;

/// Substrings that mark a password as a frequently used pattern.
pub const DEFAULT_COMMON_SUBSTRINGS: [&str; 6] =
    ["password", "123456", "qwerty", "admin", "welcome", "abc123"];

/// Immutable rule set consumed by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Passwords shorter than this fail outright with a score of zero.
    pub min_length: usize,
    /// Final scores are clamped to `0 ..= max_score`.
    pub max_score: i64,
    /// Blacklisted substrings, matched case-insensitively by literal
    /// containment.
    pub common_substrings: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_score: DEFAULT_MAX_SCORE,
            common_substrings: DEFAULT_COMMON_SUBSTRINGS
                .iter()
                .map(|word| word.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.min_length, 8);
        assert_eq!(rules.max_score, 100);
        assert_eq!(rules.common_substrings.len(), 6);
        assert!(rules.common_substrings.contains(&"qwerty".to_string()));
    }
}

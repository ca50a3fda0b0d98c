//! Score, strength category and evaluation report types.

use std::fmt;

const STRONG_THRESHOLD: i64 = 80;
const MEDIUM_THRESHOLD: i64 = 50;

/// Final password score, clamped to the valid range on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score(i64);

impl Score {
    /// Clamps a raw running score into `0 ..= max`.
    pub(crate) fn clamped(raw: i64, max: i64) -> Self {
        Self(raw.clamp(0, max))
    }

    /// Returns the numeric score value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns the strength category for this score.
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative strength category, a pure function of the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Maps a score to its category: `>= 80` Strong, `>= 50` Medium,
    /// otherwise Weak.
    pub fn from_score(score: i64) -> Self {
        if score >= STRONG_THRESHOLD {
            Strength::Strong
        } else if score >= MEDIUM_THRESHOLD {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Result of a password evaluation.
///
/// `warnings` holds one suggestion per failed check, in the order the
/// checks ran: length, uppercase, lowercase, number, special,
/// repetition, common-word. The password itself never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub score: Score,
    pub warnings: Vec<String>,
}

impl Report {
    /// Strength category derived from the final clamped score.
    pub fn strength(&self) -> Strength {
        self.score.strength()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamped_below_zero() {
        assert_eq!(Score::clamped(-10, 100).value(), 0);
    }

    #[test]
    fn test_score_clamped_above_max() {
        assert_eq!(Score::clamped(130, 100).value(), 100);
    }

    #[test]
    fn test_score_clamped_in_range() {
        assert_eq!(Score::clamped(82, 100).value(), 82);
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(Strength::from_score(100), Strength::Strong);
        assert_eq!(Strength::from_score(80), Strength::Strong);
        assert_eq!(Strength::from_score(79), Strength::Medium);
        assert_eq!(Strength::from_score(50), Strength::Medium);
        assert_eq!(Strength::from_score(49), Strength::Weak);
        assert_eq!(Strength::from_score(0), Strength::Weak);
    }

    #[test]
    fn test_strength_mapping_has_no_gaps() {
        for score in 0..=100 {
            let strength = Strength::from_score(score);
            let expected = if score >= 80 {
                Strength::Strong
            } else if score >= 50 {
                Strength::Medium
            } else {
                Strength::Weak
            };
            assert_eq!(strength, expected, "score {}", score);
        }
    }

    #[test]
    fn test_strength_display() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Medium.to_string(), "Medium");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }
}

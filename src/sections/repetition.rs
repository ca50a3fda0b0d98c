//! Repetition section - penalizes excessively repeated characters.

use std::collections::HashMap;

use super::SectionOutcome;
use crate::rules::Rules;

const ALLOWED_REPEATS: i64 = 2;
const PENALTY_PER_EXTRA: i64 = 2;
const MAX_PENALTY: i64 = 20;

/// Counts occurrences of each distinct character. Every occurrence of a
/// character beyond its second costs 2 points; the total penalty is
/// capped at 20. Position does not matter, only frequency.
pub(crate) fn repetition_section(pwd: &str, _rules: &Rules) -> SectionOutcome {
    let mut frequency: HashMap<char, i64> = HashMap::new();
    for c in pwd.chars() {
        *frequency.entry(c).or_insert(0) += 1;
    }

    let penalty: i64 = frequency
        .values()
        .filter(|&&count| count > ALLOWED_REPEATS)
        .map(|&count| (count - ALLOWED_REPEATS) * PENALTY_PER_EXTRA)
        .sum();
    let penalty = penalty.min(MAX_PENALTY);

    if penalty > 0 {
        return SectionOutcome {
            points: -penalty,
            warnings: vec![
                "Repeated characters: Avoid repeating characters multiple times.".to_string(),
            ],
        };
    }
    SectionOutcome::silent(0)
}

//! Common-substring section - penalizes frequently used patterns.

use super::SectionOutcome;
use crate::rules::Rules;

const COMMON_WORD_PENALTY: i64 = 30;

/// Lower-cases the password and looks for blacklisted entries by
/// literal containment, not whole-word matching ("passwordish" still
/// triggers it). The 30-point penalty is flat: it applies at most once
/// no matter how many entries match.
pub(crate) fn common_substring_section(pwd: &str, rules: &Rules) -> SectionOutcome {
    let lowered = pwd.to_lowercase();
    let found = rules
        .common_substrings
        .iter()
        .any(|word| lowered.contains(&word.to_lowercase()));

    if found {
        return SectionOutcome {
            points: -COMMON_WORD_PENALTY,
            warnings: vec![
                "Common password: Your password contains a frequently used pattern \
                 (e.g., 'password', '123456')."
                    .to_string(),
            ],
        };
    }
    SectionOutcome::silent(0)
}

//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use super::SectionOutcome;
use crate::rules::Rules;

const CLASS_BONUS: i64 = 20;
const SPECIAL_CHARS: &str = "!@#$%^&*()-_=+{};:,<.>?";

/// Checks each character class independently, in a fixed order:
/// uppercase, lowercase, digit, special.
///
/// Each class present awards +20; each class absent emits a warning.
pub(crate) fn character_variety_section(pwd: &str, _rules: &Rules) -> SectionOutcome {
    let checks: [(bool, &str); 4] = [
        (
            pwd.chars().any(|c| c.is_ascii_uppercase()),
            "No uppercase letters: Try adding some uppercase letters (A-Z).",
        ),
        (
            pwd.chars().any(|c| c.is_ascii_lowercase()),
            "No lowercase letters: Include lowercase letters (a-z) for better security.",
        ),
        (
            pwd.chars().any(|c| c.is_ascii_digit()),
            "No numbers: Add digits (0-9) to increase complexity.",
        ),
        (
            pwd.chars().any(|c| SPECIAL_CHARS.contains(c)),
            "No special characters: Try using symbols like @, #, $, %, etc.",
        ),
    ];

    let mut outcome = SectionOutcome::silent(0);
    for (present, warning) in checks {
        if present {
            outcome.points += CLASS_BONUS;
        } else {
            outcome.warnings.push(warning.to_string());
        }
    }
    outcome
}

//! Length section - minimum length gate and long-password bonuses.

use super::SectionOutcome;
use crate::rules::Rules;

const LONG_LENGTH: usize = 12;
const VERY_LONG_LENGTH: usize = 16;
const LENGTH_BONUS: i64 = 10;

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(warning)` if the password is too short; evaluation must stop
///   and score zero without running any other section
/// - `None` if the password has sufficient length
pub(crate) fn too_short_warning(pwd: &str, rules: &Rules) -> Option<String> {
    if pwd.chars().count() < rules.min_length {
        return Some(format!(
            "Too short: Use at least {} characters.",
            rules.min_length
        ));
    }
    None
}

/// Awards bonuses for long passwords: +10 at 12 characters and a
/// further +10 at 16. The bonuses are additive and never warn.
pub(crate) fn length_bonus_section(pwd: &str, _rules: &Rules) -> SectionOutcome {
    let len = pwd.chars().count();
    let mut points = 0;
    if len >= LONG_LENGTH {
        points += LENGTH_BONUS;
    }
    if len >= VERY_LONG_LENGTH {
        points += LENGTH_BONUS;
    }
    SectionOutcome::silent(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short() {
        let rules = Rules::default();
        let warning = too_short_warning("Short1!", &rules);
        assert_eq!(
            warning,
            Some("Too short: Use at least 8 characters.".to_string())
        );
    }

    #[test]
    fn test_exactly_minimum_length() {
        let rules = Rules::default();
        assert_eq!(too_short_warning("12345678", &rules), None);
    }

    #[test]
    fn test_empty_password_is_too_short() {
        let rules = Rules::default();
        assert!(too_short_warning("", &rules).is_some());
    }

    #[test]
    fn test_no_bonus_below_twelve() {
        let rules = Rules::default();
        let outcome = length_bonus_section("elevenchars", &rules);
        assert_eq!(outcome.points, 0);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_bonus_at_twelve() {
        let rules = Rules::default();
        assert_eq!(length_bonus_section("twelvechars!", &rules).points, 10);
    }

    #[test]
    fn test_double_bonus_at_sixteen() {
        let rules = Rules::default();
        assert_eq!(
            length_bonus_section("sixteencharslong", &rules).points,
            20
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rules = Rules::default();
        // 7 characters, more than 8 bytes
        assert!(too_short_warning("pässwör", &rules).is_some());
    }
}

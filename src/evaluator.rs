//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::Rules;
use crate::sections::{
    character_variety_section, common_substring_section, length_bonus_section,
    repetition_section, too_short_warning,
};
use crate::types::{Report, Score};

/// Evaluates password strength against the default rule set.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `Report` containing the clamped score and warnings.
pub fn evaluate_password_strength(password: &SecretString) -> Report {
    evaluate_with_rules(password, &Rules::default())
}

/// Evaluates password strength against a caller-supplied rule set.
///
/// Sections run in a fixed order: length bonus, character variety,
/// repetition, common substrings. A password shorter than
/// `rules.min_length` short-circuits to a zero score with a single
/// warning; no other section runs for it.
///
/// The function is total: every input, including the empty string,
/// yields a valid `Report`.
pub fn evaluate_with_rules(password: &SecretString, rules: &Rules) -> Report {
    let pwd = password.expose_secret();

    if let Some(warning) = too_short_warning(pwd, rules) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password below minimum length, evaluation short-circuited");

        return Report {
            score: Score::clamped(0, rules.max_score),
            warnings: vec![warning],
        };
    }

    let mut score: i64 = 0;
    let mut warnings = Vec::new();

    for outcome in [
        length_bonus_section(pwd, rules),
        character_variety_section(pwd, rules),
        repetition_section(pwd, rules),
        common_substring_section(pwd, rules),
    ] {
        score += outcome.points;
        warnings.extend(outcome.warnings);
    }

    let score = Score::clamped(score, rules.max_score);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = score.value(),
        warnings = warnings.len(),
        "password evaluated"
    );

    Report { score, warnings }
}

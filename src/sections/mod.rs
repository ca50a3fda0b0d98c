//! Password evaluation sections
//!
//! Each section scores a specific aspect of password strength.

mod common;
mod length;
mod repetition;
mod variety;

pub(crate) use common::common_substring_section;
pub(crate) use length::{length_bonus_section, too_short_warning};
pub(crate) use repetition::repetition_section;
pub(crate) use variety::character_variety_section;

/// Outcome of a single scoring section.
/// - `points` - delta applied to the running score (negative for penalties)
/// - `warnings` - suggestions emitted by the section, in check order
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct SectionOutcome {
    pub(crate) points: i64,
    pub(crate) warnings: Vec<String>,
}

impl SectionOutcome {
    /// An outcome that adjusts the score without emitting warnings.
    pub(crate) fn silent(points: i64) -> Self {
        Self {
            points,
            warnings: Vec::new(),
        }
    }
}

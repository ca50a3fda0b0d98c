//! Password strength scoring library
//!
//! Scores a password 0-100 against a fixed rule set and reports
//! improvement suggestions as data, leaving all printing to the caller.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::evaluate_password_strength;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!x".to_string().into());
//! let report = evaluate_password_strength(&password);
//!
//! println!("Score: {}", report.score.value());
//! println!("Strength: {}", report.strength());
//! for warning in &report.warnings {
//!     println!("[WARNING] {warning}");
//! }
//! ```

// Internal modules
mod evaluator;
mod rules;
mod sections;
mod types;

// Public API
pub use evaluator::{evaluate_password_strength, evaluate_with_rules};
pub use rules::Rules;
pub use types::{Report, Score, Strength};

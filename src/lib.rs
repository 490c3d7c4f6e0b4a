//! Password strength meter library
//!
//! Rule-based password evaluation (five requirements, score 0 to 5) and a
//! secure random password generator.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GENERATE_LENGTH`: Default length used by [`generate_default`]
//!   (default: `10`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{evaluate, generate, RequirementId, StrengthMeter};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate(&password);
//!
//! println!("Score: {}/5", evaluation.score());
//! println!("Strength: {}", evaluation.strength());
//! println!("Meter: {:?}", StrengthMeter::from_score(evaluation.score()));
//! for requirement in evaluation.requirements() {
//!     let icon = if requirement.met { "ok" } else { "missing" };
//!     println!("- [{}] {}", icon, requirement.message);
//! }
//! assert!(evaluation.is_met(RequirementId::Special));
//!
//! let generated = generate(16).expect("length is positive");
//! println!("Generated: {}", generated.expose_secret());
//! ```

// Internal modules
mod charset;
mod config;
mod error;
mod evaluator;
mod generator;
mod sections;
mod session;
mod strength;
mod types;

#[cfg(test)]
mod test_utils;

// Public API
pub use charset::{ALPHABET, SPECIAL_CHARS};
pub use config::{DEFAULT_LENGTH, LENGTH_ENV, default_length};
pub use error::PasswordError;
pub use evaluator::{evaluate, evaluate_str};
pub use generator::{generate, generate_default, generate_with};
pub use session::PasswordSession;
pub use strength::{PasswordStrength, StrengthMeter};
pub use types::{EvaluationResult, MAX_SCORE, Requirement, RequirementId};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_tx};

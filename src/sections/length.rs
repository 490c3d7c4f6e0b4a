//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length, counted in characters.
///
/// # Returns
/// - `SectionResult::unmet_with(feedback)` if password is too short
/// - `SectionResult::met()` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return SectionResult::unmet_with(format!(
            "Password should be at least {} characters long.",
            MIN_LENGTH
        ));
    }
    SectionResult::met()
}

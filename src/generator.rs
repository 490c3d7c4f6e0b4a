//! Utilities for generating passwords.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

use crate::charset::ALPHABET;
use crate::config::default_length;
use crate::error::PasswordError;

/// Generates a password of `length` characters using the operating system RNG.
///
/// Characters are sampled independently and uniformly from the 70-character
/// alphabet (`A-Z`, `a-z`, `0-9`, `!@#$%^&*`). No character class is
/// guaranteed to appear; pass the result through [`crate::evaluate`] when
/// coverage matters.
///
/// # Errors
/// Returns `PasswordError::InvalidArgument` if `length` is zero.
pub fn generate(length: usize) -> Result<SecretString, PasswordError> {
    generate_with(&mut OsRng, length)
}

/// Generates a password with the default length.
///
/// The length comes from `PWD_GENERATE_LENGTH` when set, otherwise 10.
pub fn generate_default() -> Result<SecretString, PasswordError> {
    generate(default_length()?)
}

/// Same as [`generate`], drawing from a caller-supplied cryptographic RNG.
///
/// `gen_range` rejects out-of-range samples instead of reducing them modulo
/// the alphabet size, so every character is equally likely.
pub fn generate_with<R>(rng: &mut R, length: usize) -> Result<SecretString, PasswordError>
where
    R: Rng + CryptoRng,
{
    if length == 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!("refusing to generate a zero-length password");
        return Err(PasswordError::invalid("password length must be positive"));
    }

    let password: String = (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("generated password of {} chars", length);

    Ok(SecretString::new(password.into()))
}

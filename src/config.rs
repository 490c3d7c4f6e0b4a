//! Environment configuration.

use crate::error::PasswordError;

/// Environment variable overriding the default generated length.
pub const LENGTH_ENV: &str = "PWD_GENERATE_LENGTH";

pub const DEFAULT_LENGTH: usize = 10;

/// Returns the default length for generated passwords.
///
/// Priority:
/// 1. Environment variable `PWD_GENERATE_LENGTH`
/// 2. `DEFAULT_LENGTH` (10)
///
/// # Errors
///
/// Returns `PasswordError::InvalidArgument` if the variable is set but is not
/// a positive integer.
pub fn default_length() -> Result<usize, PasswordError> {
    let Ok(raw) = std::env::var(LENGTH_ENV) else {
        return Ok(DEFAULT_LENGTH);
    };

    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Invalid {}: {:?}", LENGTH_ENV, raw);
            Err(PasswordError::invalid(format!(
                "{} must be a positive integer, got {:?}",
                LENGTH_ENV, raw
            )))
        }
        Ok(length) => Ok(length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{remove_env, set_env};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_length_unset() {
        remove_env(LENGTH_ENV);
        assert_eq!(default_length(), Ok(10));
    }

    #[test]
    #[serial]
    fn test_default_length_from_env() {
        set_env(LENGTH_ENV, " 16 ");
        assert_eq!(default_length(), Ok(16));
        remove_env(LENGTH_ENV);
    }

    #[test]
    #[serial]
    fn test_default_length_zero() {
        set_env(LENGTH_ENV, "0");
        assert!(matches!(default_length(), Err(PasswordError::InvalidArgument(_))));
        remove_env(LENGTH_ENV);
    }

    #[test]
    #[serial]
    fn test_default_length_not_a_number() {
        set_env(LENGTH_ENV, "twelve");
        let result = default_length();
        match result {
            Err(PasswordError::InvalidArgument(msg)) => assert!(msg.contains("twelve")),
            _ => panic!("Expected InvalidArgument error"),
        }
        remove_env(LENGTH_ENV);
    }
}

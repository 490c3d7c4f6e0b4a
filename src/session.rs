//! Caller-owned state between an input step and a display step.

use secrecy::{ExposeSecret, SecretString};

use crate::error::PasswordError;
use crate::evaluator::evaluate;
use crate::generator::generate;
use crate::types::EvaluationResult;

/// Input password plus the last generated one.
///
/// The input is what gets checked. The generated password is kept only so a
/// UI can keep showing it after the user edits the input.
///
/// The evaluator itself keeps no state; a UI keeps one of these per user and
/// passes it between steps.
#[derive(Debug)]
pub struct PasswordSession {
    password: SecretString,
    generated: Option<SecretString>,
}

impl Default for PasswordSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordSession {
    pub fn new() -> Self {
        Self {
            password: SecretString::new(String::new().into()),
            generated: None,
        }
    }

    /// Stores what the user typed.
    pub fn set_input(&mut self, password: SecretString) {
        self.password = password;
    }

    /// Generates a password and makes it the current input.
    pub fn generate(&mut self, length: usize) -> Result<&SecretString, PasswordError> {
        let generated = generate(length)?;
        self.password = SecretString::new(generated.expose_secret().to_string().into());
        Ok(&*self.generated.insert(generated))
    }

    pub fn generated(&self) -> Option<&SecretString> {
        self.generated.as_ref()
    }

    pub fn clear_generated(&mut self) {
        self.generated = None;
    }

    /// The input password: the last typed one, or the last generated one if
    /// generation happened after typing.
    pub fn current(&self) -> &SecretString {
        &self.password
    }

    /// Evaluates the input password.
    ///
    /// # Errors
    /// Returns `PasswordError::InvalidArgument` when there is nothing to check.
    pub fn check(&self) -> Result<EvaluationResult, PasswordError> {
        let current = self.current();
        if current.expose_secret().is_empty() {
            return Err(PasswordError::invalid("please enter a password first"));
        }
        Ok(evaluate(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_str;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_check_empty_session() {
        let session = PasswordSession::new();
        assert_eq!(
            session.check(),
            Err(PasswordError::InvalidArgument(
                "please enter a password first".to_string()
            ))
        );
    }

    #[test]
    fn test_check_typed_password() {
        let mut session = PasswordSession::default();
        session.set_input(secret("abcdefgh"));

        let evaluation = session.check().unwrap();
        assert_eq!(evaluation.score(), 2);
    }

    #[test]
    fn test_generate_replaces_input() {
        let mut session = PasswordSession::new();
        session.set_input(secret("abc"));

        let generated = session.generate(12).unwrap().expose_secret().to_string();
        assert_eq!(generated.len(), 12);
        assert_eq!(session.current().expose_secret(), generated);
        assert_eq!(session.check().unwrap(), evaluate_str(&generated));
    }

    #[test]
    fn test_typing_after_generate_is_checked() {
        let mut session = PasswordSession::new();
        let generated = session.generate(12).unwrap().expose_secret().to_string();

        session.set_input(secret("abc"));
        assert_eq!(session.current().expose_secret(), "abc");
        assert_eq!(session.check().unwrap().score(), 1);

        // Still available for display.
        assert_eq!(
            session.generated().map(|g| g.expose_secret().to_string()),
            Some(generated)
        );
    }

    #[test]
    fn test_generate_also_sets_input() {
        let mut session = PasswordSession::new();
        let generated = session.generate(10).unwrap().expose_secret().to_string();

        session.clear_generated();
        assert_eq!(session.current().expose_secret(), generated);
    }

    #[test]
    fn test_generate_zero_keeps_state() {
        let mut session = PasswordSession::new();
        session.set_input(secret("kept"));

        assert!(session.generate(0).is_err());
        assert_eq!(session.current().expose_secret(), "kept");
        assert!(session.generated().is_none());
    }
}

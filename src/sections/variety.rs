//! Character variety sections - uppercase, lowercase, numbers, special chars.
//!
//! Letters are ASCII only. Numbers are any Unicode decimal digit (category
//! Nd). `special` accepts exactly the generator's symbol set, other
//! punctuation is ignored.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::is_special;
use unicode_general_category::{GeneralCategory, get_general_category};

fn any_char(password: &SecretString, pred: impl Fn(char) -> bool) -> SectionResult {
    SectionResult::from_met(password.expose_secret().chars().any(pred))
}

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    any_char(password, |c| c.is_ascii_uppercase())
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    any_char(password, |c| c.is_ascii_lowercase())
}

pub fn number_section(password: &SecretString) -> SectionResult {
    any_char(password, |c| {
        get_general_category(c) == GeneralCategory::DecimalNumber
    })
}

pub fn special_section(password: &SecretString) -> SectionResult {
    any_char(password, is_special)
}

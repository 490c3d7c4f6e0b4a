//! Password requirement sections
//!
//! Each section checks one requirement against the password.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{lowercase_section, number_section, special_section, uppercase_section};

/// Result of a section check.
/// - `met` - whether the requirement is satisfied
/// - `feedback` - remediation text, only some sections produce one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub met: bool,
    pub feedback: Option<String>,
}

impl SectionResult {
    pub(crate) fn met() -> Self {
        Self {
            met: true,
            feedback: None,
        }
    }

    pub(crate) fn unmet() -> Self {
        Self {
            met: false,
            feedback: None,
        }
    }

    pub(crate) fn unmet_with(feedback: impl Into<String>) -> Self {
        Self {
            met: false,
            feedback: Some(feedback.into()),
        }
    }

    pub(crate) fn from_met(met: bool) -> Self {
        if met { Self::met() } else { Self::unmet() }
    }
}

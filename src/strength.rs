//! Qualitative rating and meter rendering data derived from a score.

use std::fmt;

use crate::types::MAX_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => PasswordStrength::Weak,
            3 => PasswordStrength::Moderate,
            4 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }

    /// Banner text for the rating.
    pub fn message(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak Password - Improve it using the suggestions below.",
            PasswordStrength::Moderate => {
                "Moderate Password - Consider adding more security features."
            }
            PasswordStrength::Strong => "Strong Password!",
            PasswordStrength::VeryStrong => "Very Strong Password!",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const METER_COLORS: [&str; MAX_SCORE as usize + 1] = [
    "#ff0000", "#ff4d4d", "#ffa64d", "#ffff4d", "#4dff4d", "#00ff00",
];

/// Color and fill of the strength bar for a given score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthMeter {
    pub color: &'static str,
    pub width_percent: u8,
}

impl StrengthMeter {
    /// Scores above the maximum are clamped. The bar never drops below one step.
    pub fn from_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            color: METER_COLORS[score as usize],
            width_percent: score.max(1) * 20,
        }
    }
}

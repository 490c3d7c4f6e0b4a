//! Evaluation result types.

use std::fmt;

use crate::strength::PasswordStrength;

/// Highest reachable score: one point per requirement.
pub const MAX_SCORE: u8 = 5;

/// Identifies one of the five password requirements.
///
/// Variants are declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequirementId {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl RequirementId {
    pub const ALL: [RequirementId; 5] = [
        RequirementId::Length,
        RequirementId::Uppercase,
        RequirementId::Lowercase,
        RequirementId::Number,
        RequirementId::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementId::Length => "length",
            RequirementId::Uppercase => "uppercase",
            RequirementId::Lowercase => "lowercase",
            RequirementId::Number => "number",
            RequirementId::Special => "special",
        }
    }

    /// Static description shown next to the pass/fail marker.
    pub fn message(&self) -> &'static str {
        match self {
            RequirementId::Length => "At least 8 characters",
            RequirementId::Uppercase => "At least one uppercase letter",
            RequirementId::Lowercase => "At least one lowercase letter",
            RequirementId::Number => "At least one number",
            RequirementId::Special => "At least one special character",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RequirementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub id: RequirementId,
    pub met: bool,
    pub message: &'static str,
}

impl Requirement {
    pub fn new(id: RequirementId, met: bool) -> Self {
        Self {
            id,
            met,
            message: id.message(),
        }
    }
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    score: u8,
    requirements: [Requirement; 5],
    feedback: Vec<String>,
}

impl EvaluationResult {
    /// Builds a result from requirements given in `RequirementId::ALL` order.
    /// The score is derived from the `met` flags.
    pub(crate) fn new(requirements: [Requirement; 5], feedback: Vec<String>) -> Self {
        debug_assert!(
            requirements
                .iter()
                .zip(RequirementId::ALL)
                .all(|(r, id)| r.id == id)
        );
        let score = requirements.iter().filter(|r| r.met).count() as u8;
        Self {
            score,
            requirements,
            feedback,
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// Requirements in fixed order: length, uppercase, lowercase, number, special.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn requirement(&self, id: RequirementId) -> &Requirement {
        &self.requirements[id.index()]
    }

    pub fn is_met(&self, id: RequirementId) -> bool {
        self.requirement(id).met
    }

    pub fn unmet(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter().filter(|r| !r.met)
    }

    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_with(met: [bool; 5]) -> [Requirement; 5] {
        std::array::from_fn(|i| Requirement::new(RequirementId::ALL[i], met[i]))
    }

    #[test]
    fn test_requirement_order_matches_index() {
        for (i, id) in RequirementId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_score_counts_met_requirements() {
        let result = EvaluationResult::new(all_with([true, false, true, false, true]), vec![]);
        assert_eq!(result.score(), 3);
        assert_eq!(result.unmet().count(), 2);
    }

    #[test]
    fn test_lookup_by_id() {
        let result = EvaluationResult::new(all_with([false, true, false, false, false]), vec![]);
        assert!(result.is_met(RequirementId::Uppercase));
        assert!(!result.is_met(RequirementId::Length));
        assert_eq!(
            result.requirement(RequirementId::Special).message,
            "At least one special character"
        );
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = RequirementId::ALL.iter().map(|id| id.to_string()).collect();
        assert_eq!(names, ["length", "uppercase", "lowercase", "number", "special"]);
    }
}

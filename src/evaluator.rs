//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, length_section, lowercase_section, number_section, special_section,
    uppercase_section,
};
use crate::types::{EvaluationResult, Requirement, RequirementId};

type Section = fn(&SecretString) -> SectionResult;

/// Sections in requirement order.
const SECTIONS: [(RequirementId, Section); 5] = [
    (RequirementId::Length, length_section),
    (RequirementId::Uppercase, uppercase_section),
    (RequirementId::Lowercase, lowercase_section),
    (RequirementId::Number, number_section),
    (RequirementId::Special, special_section),
];

/// Evaluates a password against the five requirements.
///
/// The score is the number of met requirements (0 to 5). Feedback is only
/// produced for an unmet length requirement.
pub fn evaluate(password: &SecretString) -> EvaluationResult {
    let mut feedback = Vec::new();

    let requirements = SECTIONS.map(|(id, section_fn)| {
        let result = section_fn(password);
        if let Some(reason) = result.feedback {
            feedback.push(reason);
        }
        Requirement::new(id, result.met)
    });

    let evaluation = EvaluationResult::new(requirements, feedback);

    #[cfg(feature = "tracing")]
    {
        use secrecy::ExposeSecret;
        tracing::debug!(
            "password evaluated: {} chars, score {}",
            password.expose_secret().chars().count(),
            evaluation.score()
        );
    }

    evaluation
}

/// Convenience wrapper for callers holding a plain `&str`.
pub fn evaluate_str(password: &str) -> EvaluationResult {
    evaluate(&SecretString::new(password.to_string().into()))
}

/// Delay before an async evaluation starts, so fast typing can cancel it.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the evaluation result via channel.
///
/// Nothing is sent when `token` is cancelled before the debounce delay ends.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

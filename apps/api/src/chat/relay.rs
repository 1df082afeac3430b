//! Core of the Answer Relay: validate, assemble, forward.

use crate::chat::prompts::build_answer_prompt;
use crate::context_store::ContextStore;
use crate::errors::AppError;
use crate::llm_client::Completer;

/// Returned instead of an empty completion so clients always see text.
pub const EMPTY_ANSWER_FALLBACK: &str = "No answer generated";

/// Answers one free-text question against the full context store.
///
/// Exactly one completion call per invocation; upstream failures are not
/// retried. A blank question is rejected before any upstream call is made.
pub async fn answer(
    question: &str,
    store: &ContextStore,
    completer: &dyn Completer,
) -> Result<String, AppError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AppError::InvalidRequest("Missing prompt".to_string()));
    }

    let prompt = build_answer_prompt(store.all_sections(), question);
    let output = completer.complete(&prompt).await?;

    if output.trim().is_empty() {
        Ok(EMPTY_ANSWER_FALLBACK.to_string())
    } else {
        Ok(output)
    }
}

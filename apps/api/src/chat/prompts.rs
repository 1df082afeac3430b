// Prompt constants and prompt assembly for the Answer Relay.

use crate::context_store::ContextSection;

/// Sections are joined with a blank line between them ("stuffing": the whole
/// store goes into every prompt, regardless of the question).
const SECTION_SEPARATOR: &str = "\n\n";

/// Q&A prompt template. Replace `{context}` and `{question}` before sending.
pub const ANSWER_PROMPT_TEMPLATE: &str = "\
You are a helpful AI assistant. Use the provided resume context to answer the user's question.
Context:
{context}

Question:
{question}";

/// Builds the single prompt sent to the completion capability: every section
/// of the store, in store order, followed by the question.
pub fn build_answer_prompt(sections: &[ContextSection], question: &str) -> String {
    let context = sections
        .iter()
        .map(|s| s.content.as_str())
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR);

    ANSWER_PROMPT_TEMPLATE
        .replace("{context}", &context)
        .replace("{question}", question)
}

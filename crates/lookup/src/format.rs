//! Renders a lookup outcome into a chat-ready reply.

use crate::provider::LookupOutcome;

/// Longest definition body we will put in a chat message, in characters.
const MAX_DEFINITION_CHARS: usize = 500;
const ELLIPSIS: &str = "...";

/// Render `outcome` as the text sent back to the user.
///
/// `search_term` is the normalized query; it names the term in the not-found
/// message and is the header fallback when the definition carries no term.
/// Pure function of its inputs.
#[must_use]
pub fn format_reply(outcome: &LookupOutcome, search_term: &str) -> String {
    match outcome {
        LookupOutcome::Found(def) => {
            let term = if def.term.is_empty() {
                search_term
            } else {
                &def.term
            };
            let body = truncate_definition(&def.definition);
            let mut reply = format!("📖 **{term}**\n\n{body}\n\n_Source: {}_", def.source);
            if !def.url.is_empty() {
                reply.push_str("\n🔗 ");
                reply.push_str(&def.url);
            }
            reply
        },
        LookupOutcome::NoTerm | LookupOutcome::NotFound { .. } => format!(
            "Sorry, I couldn't find a definition for **{search_term}**.\n\n\
             Try:\n\
             • Checking the spelling\n\
             • Using a more common term\n\
             • Asking about a specific technology"
        ),
    }
}

/// Cut an over-long definition to 497 characters plus an ellipsis marker.
///
/// Counted in characters, not bytes, so multi-byte text never splits.
fn truncate_definition(text: &str) -> String {
    if text.chars().count() <= MAX_DEFINITION_CHARS {
        return text.to_string();
    }
    let mut cut: String = text
        .chars()
        .take(MAX_DEFINITION_CHARS - ELLIPSIS.len())
        .collect();
    cut.push_str(ELLIPSIS);
    cut
}

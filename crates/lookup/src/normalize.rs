//! Turns a conversational question into a bare search term.

/// Lead-in phrases and punctuation stripped from raw questions, in order.
///
/// Removal is plain substring replacement, not whole-word matching, so a
/// phrase occurring inside a longer word is stripped too ("whatsapp" loses
/// its "whats"). Known behavior, kept as-is.
const REMOVE_PHRASES: &[&str] = &[
    "what is",
    "what's",
    "whats",
    "explain",
    "define",
    "meaning of",
    "tell me about",
    "what does",
    "?",
    "!",
];

/// Strip conversational boilerplate from a raw message, leaving the term to
/// look up. Always returns a trimmed, lower-cased, possibly empty string.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut text = raw.trim().to_lowercase();
    for phrase in REMOVE_PHRASES {
        text = text.replace(phrase, " ");
    }
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    text.trim().to_string()
}

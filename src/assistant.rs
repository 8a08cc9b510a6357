//! Canned-response chat assistant.
//!
//! Stateless keyword matcher: the first keyword found in the lowercased
//! message (in table order) picks the response. No context is kept across
//! turns.

/// Keyword table in priority order. Earlier rows win when several match.
const RESPONSES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi"],
        "Hello! I'm your rehabilitation assistant. How can I help you today?",
    ),
    (
        &["pain"],
        "I'm sorry to hear you're experiencing pain. Remember to log your pain levels \
         in the progress logger. If your pain is severe, please contact your healthcare provider.",
    ),
    (
        &["exercise"],
        "Regular exercise is important for your recovery. Make sure to follow your \
         rehabilitation plan and don't push yourself too hard. Log your progress to track \
         improvements over time.",
    ),
    (
        &["progress"],
        "Your progress is being tracked in the Progress section. The Analytics tab shows \
         visualizations of your improvement. It's common to have ups and downs during \
         rehabilitation, but consistent effort leads to positive outcomes.",
    ),
    (
        &["help"],
        "I can help answer questions about your rehabilitation, exercises, or how to use \
         this app. You can also check the Resources tab for helpful articles and videos.",
    ),
];

const FALLBACK: &str = "Thank you for your message. I'm a basic assistant for this demo. \
                        In a fully-implemented version, I would have more advanced capabilities \
                        to assist with your rehabilitation journey.";

/// Produce a canned response for a user message. Always succeeds.
pub fn respond(message: &str) -> &'static str {
    let lowered = message.to_lowercase();

    for (keywords, response) in RESPONSES {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return response;
        }
    }

    FALLBACK
}

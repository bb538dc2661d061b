//! Instruction text for the two remote calls.

use std::fmt::Write;

use stockprompt_core::models::ProposalRequest;

use crate::protocol::ChatMessage;

const PROPOSER_SYSTEM: &str = "You compose stock-image prompts by choosing values from fixed lists. \
Reply with a single JSON object and nothing else. Use only the listed values, copied exactly.";

const ENRICHMENT_SYSTEM: &str = "You write metadata for stock images. \
Reply with a JSON object {\"title\": string, \"keywords\": [string]}. \
The title is at most 70 characters. Give up to 49 single-concept keywords.";

/// Messages asking the proposer for one tuple.
pub fn proposal_messages(request: &ProposalRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(PROPOSER_SYSTEM),
        ChatMessage::user(proposal_body(request)),
    ]
}

/// The user turn: allowed values per category, shape rules, recent
/// tuples to avoid, and preference hints.
pub fn proposal_body(request: &ProposalRequest) -> String {
    let mut body = format!("Domain: {}\n\nAllowed values:\n", request.domain);
    for (category, options) in request.pools.iter() {
        let slots = request.slots.get(category).copied().unwrap_or(1);
        let shape = if slots > 1 {
            format!("array of exactly {slots} different values")
        } else {
            "one value".to_string()
        };
        let _ = writeln!(body, "- {category} ({shape}): {}", options.join(" | "));
    }

    if !request.recent_history.is_empty() {
        body.push_str("\nDo not repeat these recent prompts:\n");
        for recent in &request.recent_history {
            let label = recent.feedback.map_or("unrated", |f| f.as_str());
            let _ = writeln!(body, "- {} [{label}]", recent.rendered_text);
        }
    }

    let _ = write!(
        body,
        "\nPreferences: {}\n\nReturn a JSON object keyed by category name.",
        request.preference_hints
    );
    body
}

/// Messages asking for a title and keywords for one rendered prompt.
pub fn enrichment_messages(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(ENRICHMENT_SYSTEM),
        ChatMessage::user(format!("Image prompt:\n{prompt}")),
    ]
}

//! Reply selection.
//!
//! Replies are chosen by keyword: the lower-cased input is tested against an
//! ordered list of rules and the first rule that matches picks the template.
//! Later rules are never consulted once one has matched, so a message that
//! mentions both "documents" and "visa" always gets the documents reply.

mod documents;
pub mod templates;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::profile::TravelProfile;

pub use documents::{purpose_documents, GENERAL_DOCUMENTS};

/// The template a message resolves to, in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    Documents,
    VisaRequirements,
    Fees,
    Timeline,
    Procedure,
    Thanks,
    Greeting,
    Fallback,
}

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Resolves `user_text` to a topic using first-match-wins keyword rules.
///
/// Matching is plain substring search on the lower-cased text; "hi" inside
/// "this" counts as a greeting.
pub fn classify(user_text: &str) -> Topic {
    let lower = user_text.to_lowercase();
    let text = lower.as_str();

    if mentions_any(text, &["documents", "what do i need", "requirements", "list"]) {
        Topic::Documents
    } else if text.contains("visa") && mentions_any(text, &["need", "required", "do i"]) {
        Topic::VisaRequirements
    } else if mentions_any(text, &["fee", "cost", "price", "how much"]) {
        Topic::Fees
    } else if mentions_any(text, &["time", "how long", "processing", "duration"]) {
        Topic::Timeline
    } else if mentions_any(text, &["step", "process", "how to apply", "procedure"]) {
        Topic::Procedure
    } else if text.contains("thank") {
        Topic::Thanks
    } else if mentions_any(text, &["hello", "hi", "hey"]) {
        Topic::Greeting
    } else {
        Topic::Fallback
    }
}

/// Renders the template for `topic` with the profile's fields.
pub fn render(topic: Topic, profile: &TravelProfile) -> String {
    match topic {
        Topic::Documents => templates::documents(profile),
        Topic::VisaRequirements => templates::visa_requirements(profile),
        Topic::Fees => templates::FEES.to_string(),
        Topic::Timeline => templates::TIMELINE.to_string(),
        Topic::Procedure => templates::PROCEDURE.to_string(),
        Topic::Thanks => templates::THANKS.to_string(),
        Topic::Greeting => templates::greeting(profile),
        Topic::Fallback => templates::menu(profile),
    }
}

/// Produces the advisor's reply to `user_text`.
///
/// Total and pure: every input, including an empty one, yields a reply, and
/// identical arguments always yield identical text.
pub fn select_reply(user_text: &str, profile: &TravelProfile) -> String {
    let topic = classify(user_text);
    tracing::debug!(%topic, "Selected reply template");
    render(topic, profile)
}

//! Terminal rendering of transcript messages.

use colored::Colorize;

use visa_core::markup::{parse_line, Segment};
use visa_core::session::QUICK_REPLIES;
use visa_core::{Message, Sender, TravelProfile};

/// Renders one line of advisor text, emphasising `**bold**` runs.
pub fn render_bot_line(line: &str) -> String {
    parse_line(line)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.bright_blue().to_string(),
            Segment::Bold(text) => text.bright_blue().bold().to_string(),
        })
        .collect()
}

/// Renders a full message, one output line per text line.
pub fn render_message(message: &Message) -> String {
    match message.sender {
        Sender::User => format!("> {}", message.text).green().to_string(),
        Sender::Bot => {
            let mut out = format!("{}", "[Visa Advisor]".bright_magenta());
            for line in message.text.lines() {
                out.push('\n');
                out.push_str(&render_bot_line(line));
            }
            out
        }
    }
}

/// Chat header: title, route and purpose.
pub fn render_header(profile: &TravelProfile) -> String {
    format!(
        "{}\n{}  {}",
        "=== Visa Advisor ===".bright_magenta().bold(),
        profile.route_summary().bright_black(),
        format!("[{}]", profile.purpose).cyan(),
    )
}

/// Numbered quick replies, usable as `/1` .. `/4`.
pub fn render_quick_replies() -> String {
    let mut out = "Quick replies:".bright_yellow().to_string();
    for (index, reply) in QUICK_REPLIES.iter().enumerate() {
        out.push_str(&format!("\n  {} {}", format!("/{}", index + 1).bright_cyan(), reply.yellow()));
    }
    out
}

pub fn render_typing() -> String {
    "Visa Advisor is typing...".bright_black().italic().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_bot_message_strips_markup() {
        plain();
        let message = Message::bot("💰 **Visa Fees**\n\n• Single Entry: $50-80 USD");

        assert_eq!(
            render_message(&message),
            "[Visa Advisor]\n💰 Visa Fees\n\n• Single Entry: $50-80 USD"
        );
    }

    #[test]
    fn test_user_message_is_echoed() {
        plain();
        assert_eq!(render_message(&Message::user("hi")), "> hi");
    }

    #[test]
    fn test_quick_replies_are_numbered() {
        plain();
        let rendered = render_quick_replies();
        assert!(rendered.contains("/1 What documents do I need?"));
        assert!(rendered.contains("/4 Processing time?"));
    }
}

//! The chat screen.

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio::time::timeout;

use visa_core::session::QUICK_REPLIES;
use visa_core::{ConversationSession, Message, Sender, SubmitOutcome};

use crate::form::AdvisorEditor;
use crate::helper::PromptMode;
use crate::render;

const REPLY_TIMEOUT: Duration = Duration::from_secs(30);

/// How the chat screen ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Return to the travel form.
    Back,
    Quit,
}

/// Prints transcript entries that have not been shown yet.
struct TranscriptPrinter {
    printed: usize,
}

impl TranscriptPrinter {
    fn print_new(&mut self, transcript: &[Message]) {
        for message in transcript.iter().skip(self.printed) {
            // The user's own line is already on screen from the prompt.
            if message.sender == Sender::Bot {
                println!("{}", render::render_message(message));
                println!();
            }
        }
        self.printed = self.printed.max(transcript.len());
    }
}

fn print_help() {
    println!(
        "{}",
        "Ask about documents, visas, fees, processing time or the application steps.\n\
         Commands: /back (new trip), /profile, /help, /quit"
            .bright_black()
    );
}

fn print_profile(session: &ConversationSession) {
    let profile = session.profile();
    println!("{}", "Your Details:".bold());
    println!("  Nationality: {}", profile.nationality);
    println!("  From: {}", profile.origin);
    println!("  To: {}", profile.destination);
    println!("  Purpose: {}", profile.purpose);
}

/// Waits for the advisor's reply to arrive on `updates`, printing it.
async fn await_reply(
    updates: &mut mpsc::UnboundedReceiver<Vec<Message>>,
    printer: &mut TranscriptPrinter,
) {
    loop {
        match timeout(REPLY_TIMEOUT, updates.recv()).await {
            Ok(Some(transcript)) => {
                let replied = transcript
                    .last()
                    .is_some_and(|message| message.sender == Sender::Bot);
                printer.print_new(&transcript);
                if replied {
                    return;
                }
            }
            Ok(None) => return,
            Err(_) => {
                eprintln!("{}", "Error: Reply timed out.".red());
                return;
            }
        }
    }
}

/// Resolves `/1`..`/4` to a quick reply, if one is offered.
fn quick_reply(input: &str) -> Option<&'static str> {
    let index: usize = input.strip_prefix('/')?.parse().ok()?;
    QUICK_REPLIES.get(index.checked_sub(1)?).copied()
}

/// Runs the chat for `session` until the user goes back or quits.
///
/// `updates` receives the transcript after every append to this session.
pub async fn run(
    rl: &mut AdvisorEditor,
    session: &ConversationSession,
    updates: &mut mpsc::UnboundedReceiver<Vec<Message>>,
) -> Result<ChatOutcome> {
    if let Some(helper) = rl.helper_mut() {
        helper.set_mode(PromptMode::Chat);
    }

    println!("{}", render::render_header(session.profile()));
    println!();

    let mut printer = TranscriptPrinter { printed: 0 };
    while let Ok(transcript) = updates.try_recv() {
        printer.print_new(&transcript);
    }

    loop {
        if session.quick_replies_visible() {
            println!("{}", render::render_quick_replies());
        }

        let line = match rl.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                return Ok(ChatOutcome::Quit);
            }
            Err(err) => return Err(err.into()),
        };

        let trimmed = line.trim();
        let text = match trimmed {
            "/quit" | "quit" | "exit" => return Ok(ChatOutcome::Quit),
            "/back" => return Ok(ChatOutcome::Back),
            "/help" => {
                print_help();
                continue;
            }
            "/profile" => {
                print_profile(session);
                continue;
            }
            _ if trimmed.starts_with('/') => match quick_reply(trimmed) {
                Some(reply) if session.quick_replies_visible() => {
                    println!("{}", format!("> {reply}").green());
                    reply
                }
                Some(_) => {
                    println!("{}", "Quick replies are only offered before your first question.".bright_black());
                    continue;
                }
                None => {
                    println!("{}", format!("Unknown command: {trimmed}").bright_black());
                    continue;
                }
            },
            _ => trimmed,
        };

        if !text.is_empty() {
            let _ = rl.add_history_entry(text);
        }

        match session.submit_user_message(text) {
            SubmitOutcome::Accepted => {
                println!("{}", render::render_typing());
                await_reply(updates, &mut printer).await;
            }
            SubmitOutcome::Empty => {}
            SubmitOutcome::Busy => {
                println!("{}", "Still answering your last question...".bright_black());
            }
            SubmitOutcome::Closed => return Ok(ChatOutcome::Back),
        }
    }
}

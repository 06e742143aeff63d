use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use tokio::sync::mpsc;

use visa_core::paths::AdvisorPaths;
use visa_core::session::TranscriptListener;
use visa_core::{AdvisorConfig, AdvisorState, Country, Message, ProfileForm, Purpose};

mod chat;
mod form;
mod helper;
mod logging;
mod render;

use chat::ChatOutcome;
use form::FormOutcome;
use helper::AdvisorHelper;

#[derive(Parser)]
#[command(name = "visa-advisor")]
#[command(about = "Travel Visa Advisor - document & visa requirements for your trip", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/visa-advisor/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prefill your nationality
    #[arg(long, value_parser = parse_country)]
    nationality: Option<Country>,

    /// Prefill the origin country
    #[arg(long = "from", value_parser = parse_country)]
    origin: Option<Country>,

    /// Prefill the destination country
    #[arg(long = "to", value_parser = parse_country)]
    destination: Option<Country>,

    /// Prefill the purpose of travel
    #[arg(long, value_parser = parse_purpose)]
    purpose: Option<Purpose>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn parse_country(name: &str) -> Result<Country, String> {
    Country::parse(name).map_err(|e| e.to_string())
}

fn parse_purpose(name: &str) -> Result<Purpose, String> {
    Purpose::parse(name).map_err(|e| e.to_string())
}

impl Cli {
    fn prefilled_form(&self) -> ProfileForm {
        ProfileForm {
            nationality: self.nationality,
            origin: self.origin,
            destination: self.destination,
            purpose: self.purpose.unwrap_or_default(),
        }
    }
}

/// Forwards transcript snapshots to the chat screen.
struct ChannelListener(mpsc::UnboundedSender<Vec<Message>>);

impl TranscriptListener for ChannelListener {
    fn on_transcript_changed(&self, transcript: &[Message]) {
        // The receiver is gone once the chat screen has been left.
        let _ = self.0.send(transcript.to_vec());
    }
}

fn load_config(path: Option<PathBuf>) -> Result<AdvisorConfig> {
    let path = match path {
        Some(path) => path,
        None => match AdvisorPaths::config_file() {
            Ok(path) => path,
            Err(_) => return Ok(AdvisorConfig::default()),
        },
    };
    AdvisorConfig::load(&path).with_context(|| format!("Failed to load config {}", path.display()))
}

/// Entry point for the visa advisor REPL.
///
/// Alternates between the travel form and the chat: submitting a complete
/// form opens a chat, and `/back` discards it and shows a fresh form.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.clone())?;
    let _log_guard = logging::init(&config);

    if cli.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    let mut rl = Editor::new()?;
    rl.set_helper(Some(AdvisorHelper::new()));

    let delay = config.reply_delay();
    let mut form = cli.prefilled_form();
    let mut state = AdvisorState::default();
    let mut updates: Option<mpsc::UnboundedReceiver<Vec<Message>>> = None;

    loop {
        if !state.is_active() {
            // A fully prefilled form goes straight to the chat.
            if form.submit().is_err() && form::run(&mut rl, &mut form)? == FormOutcome::Quit {
                break;
            }

            let (tx, rx) = mpsc::unbounded_channel();
            if let Err(errors) = state.submit_profile(&form, delay, Arc::new(ChannelListener(tx))) {
                for error in &errors.errors {
                    println!("{}", error.message.red());
                }
                continue;
            }
            updates = Some(rx);
        }

        let (Some(session), Some(rx)) = (state.session(), updates.as_mut()) else {
            state.back();
            continue;
        };

        match chat::run(&mut rl, session, rx).await? {
            ChatOutcome::Back => {
                state.back();
                updates = None;
                form = ProfileForm::new();
                println!();
            }
            ChatOutcome::Quit => break,
        }
    }

    state.back();
    println!("{}", "Safe travels! Goodbye.".bright_green());
    Ok(())
}

//! The travel form screen.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use visa_core::{AdvisorError, Country, ProfileField, ProfileForm, Purpose};

use crate::helper::{AdvisorHelper, PromptMode};

pub type AdvisorEditor = Editor<AdvisorHelper, DefaultHistory>;

/// How the form screen ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Every field is filled; the caller may submit.
    Complete,
    Quit,
}

enum Answer {
    Value(String),
    Skip,
    Quit,
}

fn set_mode(rl: &mut AdvisorEditor, mode: PromptMode) {
    if let Some(helper) = rl.helper_mut() {
        helper.set_mode(mode);
    }
}

fn print_help() {
    println!(
        "{}",
        "Type a name (Tab completes), press Enter to skip, '/countries' to list countries, '/quit' to exit."
            .bright_black()
    );
}

fn print_countries() {
    let names: Vec<String> = Country::all().map(|c| c.to_string()).collect();
    for row in names.chunks(4) {
        let line = row
            .iter()
            .map(|name| format!("{name:<16}"))
            .collect::<String>();
        println!("  {}", line.trim_end());
    }
}

/// Reads one answer, handling the form's slash commands in place.
fn ask(rl: &mut AdvisorEditor, prompt: &str) -> Result<Answer> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                match trimmed {
                    "" => return Ok(Answer::Skip),
                    "/quit" | "quit" | "exit" => return Ok(Answer::Quit),
                    "/countries" => print_countries(),
                    "/help" => print_help(),
                    _ => {
                        let _ = rl.add_history_entry(trimmed);
                        return Ok(Answer::Value(trimmed.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => return Ok(Answer::Quit),
            Err(err) => return Err(err.into()),
        }
    }
}

fn ask_country(rl: &mut AdvisorEditor, form: &mut ProfileForm, field: ProfileField) -> Result<bool> {
    set_mode(rl, PromptMode::Country);
    let current = form
        .get(field)
        .map(|c| format!(" [{c}]"))
        .unwrap_or_default();
    let prompt = format!("{}{}: ", field.label(), current);

    loop {
        match ask(rl, &prompt)? {
            Answer::Quit => return Ok(false),
            Answer::Skip => return Ok(true),
            Answer::Value(name) => match form.select(field, &name) {
                Ok(_) => return Ok(true),
                Err(AdvisorError::UnknownCountry(name)) => {
                    println!("{}", format!("'{name}' is not in the country list.").red());
                }
                Err(err) => return Err(err.into()),
            },
        }
    }
}

fn ask_purpose(rl: &mut AdvisorEditor, form: &mut ProfileForm) -> Result<bool> {
    set_mode(rl, PromptMode::Purpose);
    let options = Purpose::all()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" / ");
    println!("{}", options.bright_black());
    let prompt = format!("Purpose of Travel [{}]: ", form.purpose);

    loop {
        match ask(rl, &prompt)? {
            Answer::Quit => return Ok(false),
            Answer::Skip => return Ok(true),
            Answer::Value(name) => match form.select_purpose(&name) {
                Ok(_) => return Ok(true),
                Err(err) => println!("{}", err.to_string().red()),
            },
        }
    }
}

/// Runs the form until every field validates or the user quits.
///
/// Validation messages for all missing fields are shown together, then only
/// those fields are asked again.
pub fn run(rl: &mut AdvisorEditor, form: &mut ProfileForm) -> Result<FormOutcome> {
    println!("{}", "=== Travel Visa Advisor ===".bright_magenta().bold());
    println!("{}", "Plan Your Trip - enter your travel details to get visa guidance".bright_black());
    print_help();
    println!();

    let mut fields: Vec<ProfileField> = ProfileField::ALL.to_vec();
    let mut ask_for_purpose = true;

    loop {
        for field in &fields {
            if !ask_country(rl, form, *field)? {
                return Ok(FormOutcome::Quit);
            }
        }
        if ask_for_purpose && !ask_purpose(rl, form)? {
            return Ok(FormOutcome::Quit);
        }

        match form.submit() {
            Ok(_) => return Ok(FormOutcome::Complete),
            Err(errors) => {
                for error in &errors.errors {
                    println!("{}", error.message.red());
                }
                fields = errors.errors.iter().map(|e| e.field).collect();
                ask_for_purpose = false;
            }
        }
    }
}

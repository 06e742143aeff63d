use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use visa_core::{Country, Purpose};

/// Slash commands understood on the chat screen.
pub const CHAT_COMMANDS: [&str; 8] = [
    "/back", "/help", "/profile", "/quit", "/1", "/2", "/3", "/4",
];

/// Slash commands understood on the form screen.
pub const FORM_COMMANDS: [&str; 3] = ["/countries", "/help", "/quit"];

/// What the current prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Country,
    Purpose,
    Chat,
}

/// rustyline helper providing completion, hints and highlighting for both screens.
#[derive(Clone)]
pub struct AdvisorHelper {
    mode: PromptMode,
}

impl AdvisorHelper {
    pub fn new() -> Self {
        Self {
            mode: PromptMode::Chat,
        }
    }

    pub fn set_mode(&mut self, mode: PromptMode) {
        self.mode = mode;
    }

    fn candidates(&self, line: &str) -> Vec<String> {
        if line.starts_with('/') {
            let commands: &[&str] = match self.mode {
                PromptMode::Chat => &CHAT_COMMANDS,
                PromptMode::Country | PromptMode::Purpose => &FORM_COMMANDS,
            };
            return commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| cmd.to_string())
                .collect();
        }

        match self.mode {
            PromptMode::Country => Country::names_with_prefix(line),
            PromptMode::Purpose => {
                let prefix = line.to_ascii_lowercase();
                Purpose::all()
                    .map(|p| p.to_string())
                    .filter(|name| name.to_ascii_lowercase().starts_with(&prefix))
                    .collect()
            }
            PromptMode::Chat => Vec::new(),
        }
    }
}

impl Default for AdvisorHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for AdvisorHelper {}

impl Completer for AdvisorHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.is_empty() && self.mode == PromptMode::Chat {
            return Ok((0, vec![]));
        }

        let candidates = self
            .candidates(line)
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for AdvisorHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for AdvisorHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || (self.mode == PromptMode::Chat && !line.starts_with('/')) {
            return None;
        }

        // Names are matched case-insensitively, so hint only when the typed
        // prefix already has the candidate's exact case.
        self.candidates(line)
            .into_iter()
            .find(|name| name.starts_with(line) && name.len() > line.len())
            .map(|name| name[line.len()..].to_string())
    }
}

impl Validator for AdvisorHelper {}

//! Lightweight `**bold**` markup used in advisor messages.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*.*?\*\*").expect("valid bold pattern"));

/// A run of text within one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Bold(&'a str),
}

/// Splits a single line into plain and bold runs.
///
/// Bold runs are the shortest `**...**` spans; the asterisks are stripped.
/// An unmatched `**` stays in the plain text.
pub fn parse_line(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for m in BOLD.find_iter(line) {
        if m.start() > cursor {
            segments.push(Segment::Plain(&line[cursor..m.start()]));
        }
        let inner = &line[m.start() + 2..m.end() - 2];
        if !inner.is_empty() {
            segments.push(Segment::Bold(inner));
        }
        cursor = m.end();
    }

    if cursor < line.len() {
        segments.push(Segment::Plain(&line[cursor..]));
    }

    segments
}

/// Returns `text` with all bold markers removed.
pub fn strip(text: &str) -> String {
    text.lines()
        .map(|line| {
            parse_line(line)
                .into_iter()
                .map(|segment| match segment {
                    Segment::Plain(s) | Segment::Bold(s) => s,
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        assert_eq!(parse_line("no markup"), vec![Segment::Plain("no markup")]);
        assert!(parse_line("").is_empty());
    }

    #[test]
    fn test_mixed_line() {
        assert_eq!(
            parse_line("**Step 1:** Gather Required Documents"),
            vec![
                Segment::Bold("Step 1:"),
                Segment::Plain(" Gather Required Documents"),
            ]
        );
    }

    #[test]
    fn test_shortest_spans() {
        assert_eq!(
            parse_line("a **b** c **d**"),
            vec![
                Segment::Plain("a "),
                Segment::Bold("b"),
                Segment::Plain(" c "),
                Segment::Bold("d"),
            ]
        );
    }

    #[test]
    fn test_unmatched_marker_is_plain() {
        assert_eq!(parse_line("a ** b"), vec![Segment::Plain("a ** b")]);
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("📋 **Documents**\n**A:** b"), "📋 Documents\nA: b");
    }
}

//! Travel purposes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use crate::error::AdvisorError;

/// Why the traveler is making the trip.
///
/// The set is closed; the reply selector's document lookup matches on it
/// exhaustively.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[strum(ascii_case_insensitive)]
pub enum Purpose {
    #[default]
    Tourism,
    Business,
    Student,
    Transit,
    Work,
    Medical,
}

impl Purpose {
    /// Returns every purpose in presentation order.
    pub fn all() -> impl Iterator<Item = Purpose> {
        Purpose::iter()
    }

    /// Parses a typed purpose name, ignoring ASCII case and surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self, AdvisorError> {
        name.trim()
            .parse()
            .map_err(|_| AdvisorError::unknown_purpose(name.trim()))
    }

    /// Lower-case label used inside reply sentences ("for student").
    pub fn label_lower(&self) -> String {
        self.to_string().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_six_purposes() {
        let names: Vec<String> = Purpose::all().map(|p| p.to_string()).collect();
        assert_eq!(Purpose::COUNT, 6);
        assert_eq!(
            names,
            vec!["Tourism", "Business", "Student", "Transit", "Work", "Medical"]
        );
    }

    #[test]
    fn test_default_is_tourism() {
        assert_eq!(Purpose::default(), Purpose::Tourism);
    }

    #[test]
    fn test_parse_and_label() {
        assert_eq!(Purpose::parse("medical").unwrap(), Purpose::Medical);
        assert_eq!(Purpose::Student.label_lower(), "student");
        assert!(Purpose::parse("Holiday").is_err());
    }
}

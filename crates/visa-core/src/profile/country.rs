//! The closed list of countries offered for nationality, origin and destination.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use crate::error::AdvisorError;

/// A country selectable in the travel form.
///
/// The same list backs all three country selectors. Variants are declared in
/// the order they are presented to the user.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum Country {
    Afghanistan,
    Albania,
    Algeria,
    Argentina,
    Australia,
    Austria,
    Bangladesh,
    Belgium,
    Brazil,
    Canada,
    Chile,
    China,
    Colombia,
    #[serde(rename = "Czech Republic")]
    #[strum(to_string = "Czech Republic")]
    CzechRepublic,
    Denmark,
    Egypt,
    Ethiopia,
    Finland,
    France,
    Germany,
    Ghana,
    Greece,
    Hungary,
    India,
    Indonesia,
    Iran,
    Iraq,
    Ireland,
    Israel,
    Italy,
    Japan,
    Jordan,
    Kenya,
    Malaysia,
    Mexico,
    Morocco,
    Nepal,
    Netherlands,
    #[serde(rename = "New Zealand")]
    #[strum(to_string = "New Zealand")]
    NewZealand,
    Nigeria,
    Norway,
    Pakistan,
    Peru,
    Philippines,
    Poland,
    Portugal,
    Qatar,
    Romania,
    Russia,
    #[serde(rename = "Saudi Arabia")]
    #[strum(to_string = "Saudi Arabia")]
    SaudiArabia,
    Singapore,
    #[serde(rename = "South Africa")]
    #[strum(to_string = "South Africa")]
    SouthAfrica,
    #[serde(rename = "South Korea")]
    #[strum(to_string = "South Korea")]
    SouthKorea,
    Spain,
    #[serde(rename = "Sri Lanka")]
    #[strum(to_string = "Sri Lanka")]
    SriLanka,
    Sweden,
    Switzerland,
    Taiwan,
    Thailand,
    Turkey,
    #[serde(rename = "UAE")]
    #[strum(to_string = "UAE")]
    Uae,
    #[serde(rename = "UK")]
    #[strum(to_string = "UK")]
    Uk,
    Ukraine,
    #[serde(rename = "USA")]
    #[strum(to_string = "USA")]
    Usa,
    Vietnam,
}

impl Country {
    /// Returns every country in presentation order.
    pub fn all() -> impl Iterator<Item = Country> {
        Country::iter()
    }

    /// Parses a typed country name, ignoring ASCII case and surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self, AdvisorError> {
        name.trim()
            .parse()
            .map_err(|_| AdvisorError::unknown_country(name.trim()))
    }

    /// Display names starting with `prefix` (case-insensitive), for completion.
    pub fn names_with_prefix(prefix: &str) -> Vec<String> {
        let prefix = prefix.to_ascii_lowercase();
        Country::iter()
            .map(|c| c.to_string())
            .filter(|name| name.to_ascii_lowercase().starts_with(&prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_list_is_closed_and_ordered() {
        let all: Vec<Country> = Country::all().collect();
        assert_eq!(all.len(), Country::COUNT);
        assert_eq!(all.len(), 65);
        assert_eq!(all.first(), Some(&Country::Afghanistan));
        assert_eq!(all.last(), Some(&Country::Vietnam));
    }

    #[test]
    fn test_display_uses_presented_names() {
        assert_eq!(Country::CzechRepublic.to_string(), "Czech Republic");
        assert_eq!(Country::Uae.to_string(), "UAE");
        assert_eq!(Country::Usa.to_string(), "USA");
        assert_eq!(Country::India.to_string(), "India");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Country::parse("germany").unwrap(), Country::Germany);
        assert_eq!(Country::parse("  south korea ").unwrap(), Country::SouthKorea);
        assert_eq!(Country::parse("usa").unwrap(), Country::Usa);
    }

    #[test]
    fn test_parse_unknown_country() {
        let err = Country::parse("Atlantis").unwrap_err();
        assert_eq!(err, AdvisorError::unknown_country("Atlantis"));
    }

    #[test]
    fn test_names_with_prefix() {
        let names = Country::names_with_prefix("sa");
        assert_eq!(names, vec!["Saudi Arabia".to_string()]);
        assert_eq!(Country::names_with_prefix("").len(), 65);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Country::NewZealand).unwrap();
        assert_eq!(json, "\"New Zealand\"");
        let back: Country = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Country::NewZealand);
    }
}

//! Profile capture: the travel form and its validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Country, Purpose, TravelProfile};
use crate::error::Result;

/// The selectable country fields of the travel form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileField {
    Nationality,
    Origin,
    Destination,
}

impl ProfileField {
    /// Fields in the order the form asks for them.
    pub const ALL: [ProfileField; 3] = [
        ProfileField::Nationality,
        ProfileField::Origin,
        ProfileField::Destination,
    ];

    /// Label shown next to the selector.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Nationality => "Your Nationality",
            ProfileField::Origin => "Origin Country",
            ProfileField::Destination => "Destination Country",
        }
    }

    /// Inline message shown when the field is left empty.
    pub fn missing_message(&self) -> &'static str {
        match self {
            ProfileField::Nationality => "Please select your nationality",
            ProfileField::Origin => "Please select origin country",
            ProfileField::Destination => "Please select destination country",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single inline validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ProfileField,
    pub message: String,
}

/// Returned when the form is submitted with one or more fields unselected.
///
/// Carries one entry per missing field so every message can be shown at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Profile is incomplete: {}", summarize(.errors))]
pub struct ProfileValidationError {
    pub errors: Vec<FieldError>,
}

impl ProfileValidationError {
    /// Message for a specific field, if that field failed validation.
    pub fn message_for(&self, field: ProfileField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Form state for the first screen.
///
/// Country fields start empty; the purpose starts as Tourism, mirroring the
/// form's initial selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub nationality: Option<Country>,
    pub origin: Option<Country>,
    pub destination: Option<Country>,
    pub purpose: Purpose,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection for `field`.
    pub fn get(&self, field: ProfileField) -> Option<Country> {
        match field {
            ProfileField::Nationality => self.nationality,
            ProfileField::Origin => self.origin,
            ProfileField::Destination => self.destination,
        }
    }

    /// Sets `field` to `country`.
    pub fn set(&mut self, field: ProfileField, country: Country) {
        let slot = match field {
            ProfileField::Nationality => &mut self.nationality,
            ProfileField::Origin => &mut self.origin,
            ProfileField::Destination => &mut self.destination,
        };
        *slot = Some(country);
    }

    /// Parses a typed country name and selects it for `field`.
    ///
    /// The form is left untouched when the name is not in the country list.
    pub fn select(&mut self, field: ProfileField, name: &str) -> Result<Country> {
        let country = Country::parse(name)?;
        self.set(field, country);
        Ok(country)
    }

    /// Parses a typed purpose name and selects it.
    pub fn select_purpose(&mut self, name: &str) -> Result<Purpose> {
        let purpose = Purpose::parse(name)?;
        self.purpose = purpose;
        Ok(purpose)
    }

    /// Fields still waiting for a selection, in form order.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// Validates the form and produces the immutable profile.
    ///
    /// Every missing field is reported, not only the first.
    pub fn submit(&self) -> std::result::Result<TravelProfile, ProfileValidationError> {
        match (self.nationality, self.origin, self.destination) {
            (Some(nationality), Some(origin), Some(destination)) => {
                let profile = TravelProfile::new(nationality, origin, destination, self.purpose);
                tracing::debug!(?profile, "Profile submitted");
                Ok(profile)
            }
            _ => {
                let errors = self
                    .missing_fields()
                    .into_iter()
                    .map(|field| FieldError {
                        field,
                        message: field.missing_message().to_string(),
                    })
                    .collect();
                Err(ProfileValidationError { errors })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;

    #[test]
    fn test_empty_form_reports_all_fields() {
        let form = ProfileForm::new();
        let err = form.submit().unwrap_err();

        assert_eq!(err.errors.len(), 3);
        assert_eq!(
            err.message_for(ProfileField::Nationality),
            Some("Please select your nationality")
        );
        assert_eq!(
            err.message_for(ProfileField::Origin),
            Some("Please select origin country")
        );
        assert_eq!(
            err.message_for(ProfileField::Destination),
            Some("Please select destination country")
        );
    }

    #[test]
    fn test_partial_form_reports_only_missing() {
        let mut form = ProfileForm::new();
        form.set(ProfileField::Nationality, Country::India);
        form.set(ProfileField::Destination, Country::Germany);

        let err = form.submit().unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, ProfileField::Origin);
        assert!(err.to_string().contains("Please select origin country"));
    }

    #[test]
    fn test_complete_form_submits() {
        let mut form = ProfileForm::new();
        form.select(ProfileField::Nationality, "india").unwrap();
        form.select(ProfileField::Origin, "India").unwrap();
        form.select(ProfileField::Destination, "Germany").unwrap();
        form.select_purpose("Student").unwrap();

        let profile = form.submit().unwrap();
        assert_eq!(
            profile,
            TravelProfile::new(Country::India, Country::India, Country::Germany, Purpose::Student)
        );
    }

    #[test]
    fn test_same_origin_and_destination_allowed() {
        let mut form = ProfileForm::new();
        form.set(ProfileField::Nationality, Country::Japan);
        form.set(ProfileField::Origin, Country::Japan);
        form.set(ProfileField::Destination, Country::Japan);

        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_unknown_country_leaves_form_unchanged() {
        let mut form = ProfileForm::new();
        let err = form.select(ProfileField::Origin, "Narnia").unwrap_err();

        assert!(matches!(err, AdvisorError::UnknownCountry(_)));
        assert_eq!(form.origin, None);
    }

    #[test]
    fn test_purpose_defaults_to_tourism() {
        let mut form = ProfileForm::new();
        form.set(ProfileField::Nationality, Country::Kenya);
        form.set(ProfileField::Origin, Country::Kenya);
        form.set(ProfileField::Destination, Country::Uk);

        assert_eq!(form.submit().unwrap().purpose, Purpose::Tourism);
    }
}

//! The traveler profile that drives every templated reply.

use serde::{Deserialize, Serialize};

use super::{Country, Purpose};

/// A completed traveler profile.
///
/// Produced by [`ProfileForm::submit`](super::ProfileForm::submit) and never
/// modified afterwards; going back to the form discards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelProfile {
    /// Passport the traveler holds.
    pub nationality: Country,
    /// Country the trip starts from.
    pub origin: Country,
    /// Country the traveler is going to.
    pub destination: Country,
    /// Reason for the trip.
    pub purpose: Purpose,
}

impl TravelProfile {
    pub fn new(nationality: Country, origin: Country, destination: Country, purpose: Purpose) -> Self {
        Self {
            nationality,
            origin,
            destination,
            purpose,
        }
    }

    /// One-line summary shown in the chat header, e.g. `India • India → Germany`.
    pub fn route_summary(&self) -> String {
        format!("{} • {} → {}", self.nationality, self.origin, self.destination)
    }
}

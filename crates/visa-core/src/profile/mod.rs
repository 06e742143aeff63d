//! Profile capture domain module.
//!
//! - `country`: the closed country list (`Country`)
//! - `purpose`: the six travel purposes (`Purpose`)
//! - `model`: the completed profile (`TravelProfile`)
//! - `capture`: form state and validation (`ProfileForm`)

mod capture;
mod country;
mod model;
mod purpose;

pub use capture::{FieldError, ProfileField, ProfileForm, ProfileValidationError};
pub use country::Country;
pub use model::TravelProfile;
pub use purpose::Purpose;

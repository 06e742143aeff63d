//! Core of the travel visa advisor.
//!
//! A traveler fills in a short profile (nationality, origin, destination and
//! purpose), then chats with an advisor whose replies are picked from canned
//! templates by keyword.

pub mod app_state;
pub mod config;
pub mod error;
pub mod markup;
pub mod paths;
pub mod profile;
pub mod reply;
pub mod session;

pub use app_state::AdvisorState;
pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use profile::{Country, ProfileField, ProfileForm, Purpose, TravelProfile};
pub use reply::select_reply;
pub use session::{ConversationSession, Message, ReplyDelay, Sender, SubmitOutcome};

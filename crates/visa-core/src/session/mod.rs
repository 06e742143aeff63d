//! Conversation session domain module.
//!
//! - `message`: transcript entries (`Message`, `Sender`)
//! - `delay`: the simulated thinking delay (`ReplyDelay`)
//! - `listener`: transcript change notification (`TranscriptListener`)
//! - `conversation`: the session itself (`ConversationSession`)

mod conversation;
mod delay;
mod listener;
mod message;

pub use conversation::{ConversationSession, SubmitOutcome, QUICK_REPLIES};
pub use delay::ReplyDelay;
pub use listener::{NoopListener, TranscriptListener};
pub use message::{Message, Sender};

use std::sync::{Arc, Mutex, MutexGuard};

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::{Message, ReplyDelay, TranscriptListener};
use crate::profile::TravelProfile;
use crate::reply::{select_reply, templates};

/// Canned prompts offered before the traveler has asked anything.
pub const QUICK_REPLIES: [&str; 4] = [
    "What documents do I need?",
    "Do I need a visa?",
    "How much does it cost?",
    "Processing time?",
];

/// What happened to a submitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was appended and a reply is pending.
    Accepted,
    /// The text was empty after trimming; nothing changed.
    Empty,
    /// A reply is still pending; nothing changed.
    Busy,
    /// The session has been closed; nothing changed.
    Closed,
}

struct SessionState {
    transcript: Vec<Message>,
    composing: bool,
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// One chat with the visa advisor, bound to a single profile.
///
/// The transcript is append-only. At most one reply is pending at a time:
/// `Idle --submit--> Composing --reply--> Idle`. Pending replies run on a
/// Tokio task tied to the session's cancellation token; closing or dropping
/// the session cancels it and no further append happens.
pub struct ConversationSession {
    id: Uuid,
    profile: TravelProfile,
    delay: ReplyDelay,
    state: Arc<Mutex<SessionState>>,
    listener: Arc<dyn TranscriptListener>,
    cancel: CancellationToken,
}

impl ConversationSession {
    /// Opens a session and seeds the transcript with the welcome message.
    ///
    /// The listener is notified of the seeded message before this returns.
    pub fn start(
        profile: TravelProfile,
        delay: ReplyDelay,
        listener: Arc<dyn TranscriptListener>,
    ) -> Self {
        let id = Uuid::new_v4();
        let welcome = Message::bot(templates::welcome(&profile));
        let session = Self {
            id,
            profile,
            delay,
            state: Arc::new(Mutex::new(SessionState {
                transcript: vec![welcome],
                composing: false,
            })),
            listener,
            cancel: CancellationToken::new(),
        };

        tracing::info!(
            session_id = %id,
            nationality = %profile.nationality,
            origin = %profile.origin,
            destination = %profile.destination,
            purpose = %profile.purpose,
            "Conversation session started"
        );

        {
            let state = lock(&session.state);
            session.listener.on_transcript_changed(&state.transcript);
        }

        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn profile(&self) -> &TravelProfile {
        &self.profile
    }

    /// Snapshot of the transcript in display order.
    pub fn transcript(&self) -> Vec<Message> {
        lock(&self.state).transcript.clone()
    }

    /// Whether an advisor reply is pending.
    pub fn is_composing(&self) -> bool {
        lock(&self.state).composing
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Quick replies are offered only until the first question is asked.
    pub fn quick_replies_visible(&self) -> bool {
        let state = lock(&self.state);
        state.transcript.len() == 1 && !state.composing && !self.cancel.is_cancelled()
    }

    /// Appends the traveler's message and schedules the advisor's reply.
    ///
    /// Returns immediately. Empty or whitespace-only text, a pending reply,
    /// or a closed session leave the transcript untouched. Must be called
    /// from within a Tokio runtime.
    pub fn submit_user_message(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();

        let mut state = lock(&self.state);
        let outcome = if self.cancel.is_cancelled() {
            SubmitOutcome::Closed
        } else if text.is_empty() {
            SubmitOutcome::Empty
        } else if state.composing {
            SubmitOutcome::Busy
        } else {
            state.transcript.push(Message::user(text));
            state.composing = true;
            self.listener.on_transcript_changed(&state.transcript);
            SubmitOutcome::Accepted
        };
        drop(state);

        tracing::debug!(session_id = %self.id, ?outcome, "User message submitted");

        if outcome == SubmitOutcome::Accepted {
            self.schedule_reply(text.to_string());
        }
        outcome
    }

    fn schedule_reply(&self, text: String) {
        let delay = self.delay.sample();
        let profile = self.profile;
        let session_id = self.id;
        let state = Arc::clone(&self.state);
        let listener = Arc::clone(&self.listener);
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(%session_id, "Pending reply cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    let reply = select_reply(&text, &profile);
                    let mut guard = lock(&state);
                    // close() takes the same lock, so this check cannot race it.
                    if cancel.is_cancelled() {
                        return;
                    }
                    guard.transcript.push(Message::bot(reply));
                    guard.composing = false;
                    listener.on_transcript_changed(&guard.transcript);
                    tracing::debug!(%session_id, delay_ms = delay.as_millis() as u64, "Reply appended");
                }
            }
        });
    }

    /// Ends the session. Any pending reply is dropped without touching the
    /// transcript or notifying the listener. Idempotent.
    pub fn close(&self) {
        let _state = lock(&self.state);
        if !self.cancel.is_cancelled() {
            self.cancel.cancel();
            tracing::info!(session_id = %self.id, "Conversation session closed");
        }
    }
}

impl Drop for ConversationSession {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSession")
            .field("id", &self.id)
            .field("profile", &self.profile)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Country, Purpose};
    use crate::session::{NoopListener, Sender};
    use std::time::Duration;

    fn profile() -> TravelProfile {
        TravelProfile::new(Country::India, Country::India, Country::Germany, Purpose::Student)
    }

    fn session() -> ConversationSession {
        ConversationSession::start(
            profile(),
            ReplyDelay::fixed(Duration::from_millis(800)),
            Arc::new(NoopListener),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_with_welcome() {
        let session = session();
        let transcript = session.transcript();

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].sender, Sender::Bot);
        assert!(transcript[0].text.contains("• Purpose: Student"));
        assert!(session.quick_replies_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_then_reply() {
        let session = session();

        assert_eq!(session.submit_user_message("  Hello  "), SubmitOutcome::Accepted);
        assert!(session.is_composing());
        assert!(!session.quick_replies_visible());

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].text, "Hello");

        tokio::time::sleep(Duration::from_secs(2)).await;

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].sender, Sender::Bot);
        assert!(transcript[2].text.starts_with("Hello! 👋"));
        assert!(!session.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_submit_is_ignored() {
        let session = session();

        assert_eq!(session.submit_user_message("fees"), SubmitOutcome::Accepted);
        assert_eq!(session.submit_user_message("time"), SubmitOutcome::Busy);
        assert_eq!(session.transcript().len(), 2);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(session.transcript().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_submit_is_ignored() {
        let session = session();

        assert_eq!(session.submit_user_message("   \t "), SubmitOutcome::Empty);
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_drops_pending_reply() {
        let session = session();

        session.submit_user_message("documents");
        session.close();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.submit_user_message("hi"), SubmitOutcome::Closed);
    }
}

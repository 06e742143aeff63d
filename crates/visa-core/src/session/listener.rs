//! Transcript change notification.

use super::Message;

/// Receives the full transcript after every append.
///
/// Called for the seeded welcome message, each user message and each advisor
/// reply. The session's state lock is held during the call, so an
/// implementation must not call back into the session; it should copy what
/// it needs and return.
pub trait TranscriptListener: Send + Sync {
    fn on_transcript_changed(&self, transcript: &[Message]);
}

impl<F> TranscriptListener for F
where
    F: Fn(&[Message]) + Send + Sync,
{
    fn on_transcript_changed(&self, transcript: &[Message]) {
        self(transcript)
    }
}

/// A listener that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl TranscriptListener for NoopListener {
    fn on_transcript_changed(&self, _transcript: &[Message]) {}
}

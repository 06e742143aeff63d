//! Which screen the advisor is showing.

use std::sync::Arc;

use crate::profile::{ProfileForm, ProfileValidationError};
use crate::session::{ConversationSession, ReplyDelay, TranscriptListener};

/// Top-level advisor state: either the form is showing, or a chat is active.
#[derive(Debug, Default)]
pub enum AdvisorState {
    /// No profile has been submitted; the travel form is showing.
    #[default]
    NoProfile,
    /// A profile was submitted and its chat is showing.
    ActiveSession(ConversationSession),
}

impl AdvisorState {
    /// Validates `form` and, on success, opens a chat for the new profile.
    ///
    /// On failure the state is left as it was. Any session already active is
    /// closed and replaced.
    pub fn submit_profile(
        &mut self,
        form: &ProfileForm,
        delay: ReplyDelay,
        listener: Arc<dyn TranscriptListener>,
    ) -> Result<(), ProfileValidationError> {
        let profile = form.submit()?;
        *self = AdvisorState::ActiveSession(ConversationSession::start(profile, delay, listener));
        Ok(())
    }

    /// Discards the active chat, cancelling any pending reply, and returns to the form.
    pub fn back(&mut self) {
        if let AdvisorState::ActiveSession(session) = std::mem::take(self) {
            session.close();
        }
    }

    pub fn session(&self) -> Option<&ConversationSession> {
        match self {
            AdvisorState::ActiveSession(session) => Some(session),
            AdvisorState::NoProfile => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AdvisorState::ActiveSession(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Country, ProfileField};
    use crate::session::NoopListener;

    fn complete_form() -> ProfileForm {
        let mut form = ProfileForm::new();
        form.set(ProfileField::Nationality, Country::Egypt);
        form.set(ProfileField::Origin, Country::Egypt);
        form.set(ProfileField::Destination, Country::France);
        form
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_stays_on_form() {
        let mut state = AdvisorState::default();
        let result = state.submit_profile(
            &ProfileForm::new(),
            ReplyDelay::default(),
            Arc::new(NoopListener),
        );

        assert!(result.is_err());
        assert!(!state.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_and_back() {
        let mut state = AdvisorState::default();
        state
            .submit_profile(&complete_form(), ReplyDelay::default(), Arc::new(NoopListener))
            .unwrap();
        let session = state.session().unwrap();
        assert_eq!(session.profile().destination, Country::France);
        assert!(state.is_active());

        state.back();
        assert!(state.session().is_none());
    }
}

//! Submission state machine for the contact form.
//!
//! `FormState` is a plain value and every transition consumes it and returns
//! the next one. The component owns the timers; the state only records which
//! dispatch a pending reset belongs to, so a reset fired for a superseded
//! dispatch changes nothing.

use crate::contact::compose::{compose, OutboundMessage};
use crate::contact::validation::{ContactSubmission, Field, FieldErrors};

/// Identity of one successful submission. A reset is honoured only for the
/// ticket that is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Dispatched(DispatchTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Default,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    FixRequired,
    Redirecting,
}

impl NoticeKind {
    pub fn title(self) -> &'static str {
        match self {
            NoticeKind::FixRequired => "Fix required fields",
            NoticeKind::Redirecting => "Redirecting to WhatsApp…",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NoticeKind::FixRequired => "Please check the form fields and try again.",
            NoticeKind::Redirecting => "Your message is being prepared.",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            NoticeKind::FixRequired => Tone::Destructive,
            NoticeKind::Redirecting => Tone::Default,
        }
    }
}

/// Toast raised by a submit attempt. `id` tells repeated notices apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub submission: ContactSubmission,
    pub errors: FieldErrors,
    pub phase: Phase,
    pub outbound: Option<OutboundMessage>,
    pub notice: Option<Notice>,
    attempts: u64,
}

impl FormState {
    pub fn edit(mut self, field: Field, value: String) -> Self {
        self.submission.set(field, value);
        self
    }

    /// Validates and, when every field passes, composes the outbound message
    /// and enters `Dispatched` under a fresh ticket. A failed attempt leaves
    /// the fields untouched.
    pub fn submit(mut self, destination: &str) -> Self {
        self.attempts += 1;
        match self.submission.validated() {
            Ok(valid) => {
                self.errors = FieldErrors::default();
                self.outbound = Some(compose(&valid, destination));
                self.phase = Phase::Dispatched(DispatchTicket(self.attempts));
                self.notice = Some(Notice {
                    id: self.attempts,
                    kind: NoticeKind::Redirecting,
                });
            }
            Err(errors) => {
                self.errors = errors;
                self.outbound = None;
                self.phase = Phase::Editing;
                self.notice = Some(Notice {
                    id: self.attempts,
                    kind: NoticeKind::FixRequired,
                });
            }
        }
        self
    }

    /// Clears fields and errors if `ticket` is still the current dispatch.
    pub fn reset(self, ticket: DispatchTicket) -> Self {
        if self.phase != Phase::Dispatched(ticket) {
            return self;
        }
        FormState {
            notice: self.notice,
            attempts: self.attempts,
            ..FormState::default()
        }
    }

    pub fn dismiss_notice(mut self, id: u64) -> Self {
        if self.notice.map(|notice| notice.id) == Some(id) {
            self.notice = None;
        }
        self
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self.phase, Phase::Dispatched(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::FieldError;

    const DEST: &str = "17183280000";

    fn filled() -> FormState {
        FormState::default()
            .edit(Field::Name, "Jane Doe".to_string())
            .edit(Field::Email, "jane@example.com".to_string())
            .edit(Field::Message, "I need help with my prescription".to_string())
    }

    fn ticket(state: &FormState) -> DispatchTicket {
        match state.phase {
            Phase::Dispatched(ticket) => ticket,
            Phase::Editing => panic!("expected a dispatched state"),
        }
    }

    #[test]
    fn invalid_submit_keeps_fields_and_shows_errors() {
        let state = FormState::default()
            .edit(Field::Name, "Jane Doe".to_string())
            .edit(Field::Email, "jane@@x".to_string())
            .submit(DEST);

        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.submission.name, "Jane Doe");
        assert_eq!(state.submission.email, "jane@@x");
        assert_eq!(state.errors.email, Some(FieldError::InvalidFormat));
        assert_eq!(state.errors.message, Some(FieldError::EmptyField));
        assert!(state.outbound.is_none());
        assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::FixRequired));
    }

    #[test]
    fn editing_keeps_last_errors_until_next_submit() {
        let state = FormState::default()
            .submit(DEST)
            .edit(Field::Name, "Jane".to_string());
        assert_eq!(state.errors.name, Some(FieldError::EmptyField));
    }

    #[test]
    fn valid_submit_dispatches_composed_message() {
        let state = filled().submit(DEST);
        assert!(state.is_dispatched());
        assert!(state.errors.is_empty());
        let outbound = state.outbound.as_ref().expect("composed");
        assert!(outbound.uri().starts_with("https://wa.me/17183280000?text="));
        assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Redirecting));
    }

    #[test]
    fn reset_with_current_ticket_clears_everything() {
        let state = filled().submit(DEST);
        let current = ticket(&state);
        let state = state.reset(current);

        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.submission, ContactSubmission::default());
        assert!(state.errors.is_empty());
        assert!(state.outbound.is_none());
    }

    #[test]
    fn stale_reset_is_ignored() {
        let first = filled().submit(DEST);
        let stale = ticket(&first);
        let second = first.submit(DEST);
        assert_ne!(ticket(&second), stale);

        let after = second.clone().reset(stale);
        assert_eq!(after, second);
    }

    #[test]
    fn reset_after_failed_resubmit_does_not_clear_edits() {
        let dispatched = filled().submit(DEST);
        let pending = ticket(&dispatched);
        let state = dispatched
            .edit(Field::Message, "short".to_string())
            .submit(DEST)
            .reset(pending);

        assert_eq!(state.submission.message, "short");
        assert_eq!(state.errors.message, Some(FieldError::TooShort));
    }

    #[test]
    fn editing_while_dispatched_keeps_pending_message_until_reset() {
        let dispatched = filled().submit(DEST);
        let pending = ticket(&dispatched);
        let composed = dispatched.outbound.clone();

        let edited = dispatched.edit(Field::Message, "Actually, one more thing".to_string());
        assert_eq!(edited.phase, Phase::Dispatched(pending));
        assert_eq!(edited.outbound, composed);
        assert_eq!(edited.submission.message, "Actually, one more thing");

        let state = edited.reset(pending);
        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.submission, ContactSubmission::default());
        assert!(state.outbound.is_none());
    }

    #[test]
    fn reset_while_editing_is_a_no_op() {
        let state = FormState::default().edit(Field::Name, "Jane".to_string());
        let after = state.clone().reset(DispatchTicket(1));
        assert_eq!(after, state);
    }

    #[test]
    fn notices_get_distinct_ids() {
        let first = FormState::default().submit(DEST);
        let first_id = first.notice.unwrap().id;
        let second = first.submit(DEST);
        assert_ne!(second.notice.unwrap().id, first_id);

        // dismissing an older toast leaves the newer one up
        let second = second.dismiss_notice(first_id);
        assert!(second.notice.is_some());
        let id = second.notice.unwrap().id;
        assert!(second.dismiss_notice(id).notice.is_none());
    }

    #[test]
    fn notice_tones() {
        assert_eq!(NoticeKind::FixRequired.tone(), Tone::Destructive);
        assert_eq!(NoticeKind::Redirecting.tone(), Tone::Default);
        assert_eq!(NoticeKind::FixRequired.description(), "Please check the form fields and try again.");
    }
}

//! Newsletter (contact call-to-action) and booking dialogs.

use std::time::Instant;

use launchpod_core::TransportError;
use launchpod_core::forms::{FormController, FormKind, SubmissionState};
use launchpod_core::widgets::Modal;

use crate::effect::Effect;
use crate::notifications::ToastManager;

#[derive(Clone, PartialEq, Eq)]
pub enum FormMessage {
    Open,
    Close,
    Field { name: String, value: String },
    Submit,
}

impl FormMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "Form::Open",
            Self::Close => "Form::Close",
            Self::Field { .. } => "Form::Field",
            Self::Submit => "Form::Submit",
        }
    }

    pub fn field(name: &str, value: impl Into<String>) -> Self {
        Self::Field {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

// Field values may carry contact details; keep them out of logs.
impl std::fmt::Debug for FormMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field { name, .. } => write!(f, "Form::Field({name})"),
            other => f.write_str(other.name()),
        }
    }
}

/// A form inside a modal. The modal cannot be dismissed while its form is
/// submitting.
#[derive(Debug)]
pub struct FormSection {
    pub modal: Modal,
    form: FormController,
}

impl FormSection {
    pub fn new(form: FormController) -> Self {
        Self {
            modal: Modal::default(),
            form,
        }
    }

    pub fn newsletter() -> Self {
        Self::new(FormController::newsletter())
    }

    pub fn booking() -> Self {
        Self::new(FormController::booking())
    }

    pub fn kind(&self) -> FormKind {
        self.form.kind()
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        self.form.state()
    }

    pub fn update(
        &mut self,
        message: FormMessage,
        toasts: &mut ToastManager,
        now: Instant,
    ) -> Vec<Effect> {
        match message {
            FormMessage::Open => {
                self.modal.open();
                Vec::new()
            }
            FormMessage::Close => {
                if self.modal.close() {
                    self.form.reset();
                }
                Vec::new()
            }
            FormMessage::Field { name, value } => {
                self.form.set_field(&name, value);
                Vec::new()
            }
            FormMessage::Submit => match self.form.begin() {
                Ok(draft) => {
                    self.modal.set_locked(true);
                    vec![Effect::Submit {
                        kind: self.kind(),
                        draft,
                    }]
                }
                Err(error) => {
                    tracing::debug!(form = %self.kind(), %error, "submission rejected");
                    toasts.error(error.user_message(), now);
                    Vec::new()
                }
            },
        }
    }

    /// Apply a relay outcome reported back by the runtime.
    pub fn finish(
        &mut self,
        outcome: Result<(), TransportError>,
        toasts: &mut ToastManager,
        now: Instant,
    ) {
        if !self.form.is_submitting() {
            tracing::warn!(form = %self.kind(), "submission result without a pending submission");
            return;
        }
        self.modal.set_locked(false);
        match self.form.finish(outcome) {
            Ok(()) => {
                self.modal.close();
                toasts.success(success_message(self.kind()), now);
            }
            Err(error) => {
                toasts.error(error.user_message(), now);
            }
        }
    }
}

fn success_message(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Newsletter => "Subscribed successfully!",
        FormKind::Booking => "Booking request submitted successfully!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ToastLevel;

    fn filled_newsletter() -> FormSection {
        let mut section = FormSection::newsletter();
        let mut toasts = ToastManager::default();
        let now = Instant::now();
        section.update(FormMessage::Open, &mut toasts, now);
        section.update(FormMessage::field("name", "Ada"), &mut toasts, now);
        section.update(FormMessage::field("email", "ada@example.com"), &mut toasts, now);
        section
    }

    #[test]
    fn invalid_draft_toasts_and_sends_nothing() {
        let mut section = FormSection::booking();
        let mut toasts = ToastManager::default();
        let effects = section.update(FormMessage::Submit, &mut toasts, Instant::now());
        assert!(effects.is_empty());
        assert_eq!(toasts.latest().map(|t| t.level), Some(ToastLevel::Error));
        assert_eq!(*section.state(), SubmissionState::Idle);
    }

    #[test]
    fn modal_stays_open_while_submitting() {
        let mut section = filled_newsletter();
        let mut toasts = ToastManager::default();
        let now = Instant::now();

        let effects = section.update(FormMessage::Submit, &mut toasts, now);
        assert!(matches!(effects.as_slice(), [Effect::Submit { kind: FormKind::Newsletter, .. }]));

        section.update(FormMessage::Close, &mut toasts, now);
        assert!(section.modal.is_open());

        section.finish(Ok(()), &mut toasts, now);
        assert!(!section.modal.is_open());
        assert!(section.form().draft().is_blank());
        assert_eq!(toasts.latest().map(|t| t.level), Some(ToastLevel::Success));
    }

    #[test]
    fn failed_relay_keeps_draft_and_unlocks() {
        let mut section = filled_newsletter();
        let mut toasts = ToastManager::default();
        let now = Instant::now();
        section.update(FormMessage::Submit, &mut toasts, now);

        section.finish(
            Err(TransportError::Status {
                status: 500,
                body: String::new(),
            }),
            &mut toasts,
            now,
        );
        assert!(section.modal.is_open());
        assert!(!section.modal.is_locked());
        assert_eq!(section.form().draft().get("email"), "ada@example.com");
        assert!(matches!(section.state(), SubmissionState::Failed(_)));
        assert_eq!(
            toasts.latest().map(|t| t.message.as_str()),
            Some("Something went wrong. Please try again.")
        );
    }
}

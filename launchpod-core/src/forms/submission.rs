//! Submission lifecycle of one form.

use crate::error::{FormError, FormResult, TransportError};
use crate::observable::{Observable, Subscription};

use super::draft::FormDraft;
use super::relay::{FormKind, FormRelay};
use super::schema::FormSchema;

/// `Idle -> Submitting -> Succeeded | Failed`; a finished state returns to
/// `Idle` on the next edit or [`FormController::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// Draft, schema and submission state of a single form.
///
/// Split into [`FormController::begin`] and [`FormController::finish`] so an
/// event loop can hand the network call to a runtime and feed the outcome
/// back later; [`FormController::submit`] runs both around one relay call.
#[derive(Debug)]
pub struct FormController {
    kind: FormKind,
    schema: FormSchema,
    draft: FormDraft,
    state: Observable<SubmissionState>,
}

impl FormController {
    pub fn new(kind: FormKind, schema: FormSchema) -> Self {
        let draft = schema.blank_draft();
        Self {
            kind,
            schema,
            draft,
            state: Observable::new(SubmissionState::Idle),
        }
    }

    pub fn newsletter() -> Self {
        Self::new(FormKind::Newsletter, FormSchema::newsletter())
    }

    pub fn booking() -> Self {
        Self::new(FormKind::Booking, FormSchema::booking())
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn state(&self) -> &SubmissionState {
        self.state.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.get().is_submitting()
    }

    pub fn subscribe(&self, callback: impl FnMut(&SubmissionState) + 'static) -> Subscription {
        self.state.subscribe(callback)
    }

    /// Edit a field. Ignored while a submission is in flight.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if self.is_submitting() {
            tracing::debug!(form = %self.kind, field = name, "edit ignored while submitting");
            return;
        }
        self.draft.set(name, value);
        if !matches!(self.state.get(), SubmissionState::Idle) {
            self.state.set(SubmissionState::Idle);
        }
    }

    /// Validate and enter `Submitting`. Returns the snapshot to send.
    ///
    /// Validation failures leave the state untouched; nothing is sent.
    pub fn begin(&mut self) -> FormResult<FormDraft> {
        if self.is_submitting() {
            return Err(FormError::Busy);
        }
        self.schema.validate(&self.draft)?;
        self.state.set(SubmissionState::Submitting);
        tracing::info!(form = %self.kind, "submitting form");
        Ok(self.draft.clone())
    }

    /// Apply the relay outcome. Success clears the draft; failure keeps it.
    pub fn finish(&mut self, outcome: Result<(), TransportError>) -> FormResult<()> {
        match outcome {
            Ok(()) => {
                self.draft.clear();
                self.state.set(SubmissionState::Succeeded);
                tracing::info!(form = %self.kind, "form submitted");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(form = %self.kind, %error, "form submission failed");
                let error = FormError::from(error);
                self.state.set(SubmissionState::Failed(error.user_message()));
                Err(error)
            }
        }
    }

    pub async fn submit<R: FormRelay + ?Sized>(&mut self, relay: &R) -> FormResult<()> {
        let snapshot = self.begin()?;
        let outcome = relay.submit(&snapshot).await;
        self.finish(outcome)
    }

    pub fn reset(&mut self) {
        if !self.is_submitting() {
            self.state.set(SubmissionState::Idle);
        }
    }
}

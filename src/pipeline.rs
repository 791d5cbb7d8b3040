//! Submission pipeline
//!
//! Validates the active field, optionally runs the academic email check, and
//! on the last step hands the whole record to the store. Work that has to
//! wait on the network is returned as [`PendingWork`] instead of being
//! awaited inline, so the caller can render the `Loading` status first and
//! feed the outcome back through [`SubmissionPipeline::complete`].

use crate::backend::{AcademicEmailVerifier, SignupStore, StoreError};
use crate::state::{FieldId, FlowEvent, FormRecord, SignupSession};
use std::sync::Arc;
use std::time::Duration;

pub const SAVING_MESSAGE: &str = "Saving your details…";
pub const DUPLICATE_MESSAGE: &str = "This email is already registered. Try signing in instead.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const VERIFYING_MESSAGE: &str = "Verifying your student email…";
pub const NOT_ACADEMIC_MESSAGE: &str =
    "This doesn't look like a valid student email. Please use your official college email.";
pub const VERIFY_UNAVAILABLE_MESSAGE: &str = "Could not verify email right now. Please try again.";
pub const ACADEMIC_OK_MESSAGE: &str = "✓ Valid academic email!";

/// How long the affirmative pre-check message stays up before moving on
const DEFAULT_SUCCESS_PAUSE: Duration = Duration::from_millis(600);

/// Optional remote check run after local validation of one field
#[derive(Clone)]
pub struct PrecheckStage {
    verifier: Arc<dyn AcademicEmailVerifier>,
    enabled: bool,
    field: FieldId,
    success_pause: Duration,
}

impl PrecheckStage {
    /// Academic email check on the email step
    pub fn academic_email(verifier: Arc<dyn AcademicEmailVerifier>, enabled: bool) -> Self {
        Self {
            verifier,
            enabled,
            field: FieldId::Email,
            success_pause: DEFAULT_SUCCESS_PAUSE,
        }
    }

    #[cfg(test)]
    pub fn with_success_pause(mut self, pause: Duration) -> Self {
        self.success_pause = pause;
        self
    }

    fn applies_to(&self, field: FieldId) -> bool {
        self.enabled && self.field == field
    }
}

/// Asynchronous work requested by the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingWork {
    Precheck { email: String },
    /// Hold the affirmative message for a moment
    Settle(Duration),
    Persist(FormRecord),
}

/// Outcome of a piece of [`PendingWork`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    PrecheckPassed,
    PrecheckRejected,
    /// The check could not be completed; the user may retry
    PrecheckInconclusive,
    Settled,
    Persisted,
    PersistFailed(StoreError),
}

/// Validation and submission for a [`SignupSession`]
#[derive(Clone)]
pub struct SubmissionPipeline {
    store: Arc<dyn SignupStore>,
    precheck: Option<PrecheckStage>,
}

impl SubmissionPipeline {
    pub fn new(store: Arc<dyn SignupStore>) -> Self {
        Self {
            store,
            precheck: None,
        }
    }

    pub fn with_precheck(mut self, stage: PrecheckStage) -> Self {
        self.precheck = Some(stage);
        self
    }

    /// Validate the active field and move the flow on.
    ///
    /// Local validation is synchronous. Returns the network work to run next,
    /// if any; the session already shows `Loading` when work is returned.
    /// Does nothing while busy or after submission.
    pub fn submit_active_field(&self, session: &mut SignupSession) -> Option<PendingWork> {
        if session.flow().is_submitted() || session.flow().is_busy() {
            return None;
        }

        let field = session.active_field();
        let id = field.id;
        let value = session.active_value();

        if let Err(reason) = field.validate(value) {
            tracing::debug!(field = id.as_str(), %reason, "field rejected");
            session.apply(FlowEvent::Reject(reason));
            return None;
        }

        if self.precheck.as_ref().is_some_and(|s| s.applies_to(id)) {
            let email = value.to_string();
            session.apply(FlowEvent::Busy(VERIFYING_MESSAGE.to_string()));
            return Some(PendingWork::Precheck { email });
        }

        self.proceed(session)
    }

    /// Perform the requested work
    pub async fn run(&self, work: PendingWork) -> PipelineEvent {
        match work {
            PendingWork::Precheck { email } => {
                let Some(stage) = &self.precheck else {
                    return PipelineEvent::PrecheckPassed;
                };
                match stage.verifier.verify(&email).await {
                    Ok(true) => PipelineEvent::PrecheckPassed,
                    Ok(false) => PipelineEvent::PrecheckRejected,
                    Err(err) => {
                        tracing::warn!(error = %err, "academic email check failed");
                        PipelineEvent::PrecheckInconclusive
                    }
                }
            }
            PendingWork::Settle(pause) => {
                tokio::time::sleep(pause).await;
                PipelineEvent::Settled
            }
            PendingWork::Persist(record) => match self.store.insert_signup(&record).await {
                Ok(()) => PipelineEvent::Persisted,
                Err(err) => PipelineEvent::PersistFailed(err),
            },
        }
    }

    /// Apply the outcome of finished work; may request follow-up work
    pub fn complete(
        &self,
        session: &mut SignupSession,
        event: PipelineEvent,
    ) -> Option<PendingWork> {
        if session.flow().is_submitted() {
            return None;
        }

        match event {
            PipelineEvent::PrecheckPassed => {
                session.apply(FlowEvent::Affirm(ACADEMIC_OK_MESSAGE.to_string()));
                let pause = self
                    .precheck
                    .as_ref()
                    .map_or(Duration::ZERO, |s| s.success_pause);
                Some(PendingWork::Settle(pause))
            }
            PipelineEvent::PrecheckRejected => {
                session.apply(FlowEvent::Reject(NOT_ACADEMIC_MESSAGE.to_string()));
                None
            }
            PipelineEvent::PrecheckInconclusive => {
                session.apply(FlowEvent::Reject(VERIFY_UNAVAILABLE_MESSAGE.to_string()));
                None
            }
            PipelineEvent::Settled => self.proceed(session),
            PipelineEvent::Persisted => {
                tracing::info!("signup stored");
                session.apply(FlowEvent::Submitted);
                None
            }
            PipelineEvent::PersistFailed(err) => {
                let message = if err.is_duplicate() {
                    tracing::info!(error = %err, "signup already registered");
                    DUPLICATE_MESSAGE
                } else {
                    tracing::error!(error = %err, "failed to store signup");
                    GENERIC_FAILURE_MESSAGE
                };
                session.apply(FlowEvent::Reject(message.to_string()));
                None
            }
        }
    }

    /// Advance, or on the last step start persisting the record
    fn proceed(&self, session: &mut SignupSession) -> Option<PendingWork> {
        if session.is_last_step() {
            session.apply(FlowEvent::Busy(SAVING_MESSAGE.to_string()));
            Some(PendingWork::Persist(session.record.clone()))
        } else {
            session.advance();
            None
        }
    }
}

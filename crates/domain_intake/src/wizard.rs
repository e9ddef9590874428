//! The intake wizard state machine
//!
//! ```text
//!            next            next            next (accepted)
//!   사고 ─────────► 보험사 ─────────► 상황 ─────────────────► Submitted
//!    │  ◄─────────        ◄─────────   │
//!    │     back              back      └─ next (rejected): stays on 상황
//!    │ back
//!    ▼
//!  Exited
//! ```
//!
//! `back` never touches the draft. `next` refuses while the active step is
//! incomplete. Submitted and Exited are terminal.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use core_kernel::OperationMetadata;

use crate::action::{reduce, DraftAction};
use crate::draft::Draft;
use crate::error::IntakeError;
use crate::field::Field;
use crate::limits::IntakeLimits;
use crate::ports::{ExitReason, NavigationPort, NavigationTarget, Session, SessionPort, SubmissionPort};
use crate::step::{progress, StepProgress, WizardStep};
use crate::submission::{IntakeSubmission, SubmissionReceipt};
use crate::validation::{validate_step, ValidationResult};
use crate::visibility;

/// Where the wizard is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum WizardState {
    Active(WizardStep),
    Submitted(SubmissionReceipt),
    Exited,
}

impl WizardState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WizardState::Active(_))
    }
}

/// Result of a `next` or `back` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    MovedTo(WizardStep),
    Exited,
    Submitted(SubmissionReceipt),
}

/// Drives one intake request from the first step to submission
pub struct IntakeWizard {
    draft: Draft,
    state: WizardState,
    limits: IntakeLimits,
    session: Session,
    submission: Arc<dyn SubmissionPort>,
    navigation: Arc<dyn NavigationPort>,
}

impl std::fmt::Debug for IntakeWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeWizard")
            .field("state", &self.state)
            .field("session_id", &self.session.session_id)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl IntakeWizard {
    /// Opens the wizard on the first step with an empty draft.
    ///
    /// Without a session the claimant is redirected to login and
    /// `NotAuthenticated` is returned.
    #[instrument(skip_all)]
    pub async fn enter(
        sessions: &dyn SessionPort,
        submission: Arc<dyn SubmissionPort>,
        navigation: Arc<dyn NavigationPort>,
        limits: IntakeLimits,
    ) -> Result<Self, IntakeError> {
        let Some(session) = sessions.current_session().await else {
            warn!("Intake wizard entered without a session");
            navigation.redirect(NavigationTarget::Login).await;
            return Err(IntakeError::NotAuthenticated);
        };

        info!(session_id = %session.session_id, "Intake wizard opened");
        Ok(Self {
            draft: Draft::new(),
            state: WizardState::Active(WizardStep::Incident),
            limits,
            session,
            submission,
            navigation,
        })
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The active step, or `None` once the wizard is closed
    pub fn current_step(&self) -> Option<WizardStep> {
        match self.state {
            WizardState::Active(step) => Some(step),
            _ => None,
        }
    }

    /// Applies an edit to the draft.
    ///
    /// A rejected document leaves the draft as it was.
    pub fn dispatch(&mut self, action: DraftAction) -> Result<(), IntakeError> {
        self.active_step()?;
        self.draft = reduce(&self.draft, action, &self.limits)?;
        Ok(())
    }

    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        validate_step(&self.draft, step).is_valid()
    }

    pub fn validate_current(&self) -> Result<ValidationResult, IntakeError> {
        let step = self.active_step()?;
        Ok(validate_step(&self.draft, step))
    }

    /// Fields of the active step, in render order
    pub fn visible_fields(&self) -> Vec<Field> {
        self.current_step()
            .map(|step| visibility::visible_fields(&self.draft, step))
            .unwrap_or_default()
    }

    pub fn is_field_enabled(&self, field: Field) -> bool {
        self.current_step() == Some(field.step())
            && visibility::is_field_enabled(&self.draft, field, &self.limits)
    }

    /// Progress bar, or `None` once closed
    pub fn progress(&self) -> Option<Vec<StepProgress>> {
        self.current_step().map(progress)
    }

    /// Goes back one step, or leaves the wizard from the first step
    #[instrument(skip(self), fields(session_id = %self.session.session_id))]
    pub async fn back(&mut self) -> Result<Transition, IntakeError> {
        let step = self.active_step()?;
        match step.previous() {
            Some(previous) => {
                self.state = WizardState::Active(previous);
                Ok(Transition::MovedTo(previous))
            }
            None => {
                info!("Intake wizard cancelled");
                self.state = WizardState::Exited;
                self.navigation.exit(ExitReason::Cancelled).await;
                Ok(Transition::Exited)
            }
        }
    }

    /// Advances when the active step is complete; submits from the last step.
    ///
    /// A failed submission keeps the wizard on the last step with the draft
    /// intact so the claimant can retry.
    #[instrument(skip(self), fields(session_id = %self.session.session_id))]
    pub async fn next(&mut self) -> Result<Transition, IntakeError> {
        let step = self.active_step()?;
        validate_step(&self.draft, step).into_result()?;

        if let Some(next) = step.next() {
            self.state = WizardState::Active(next);
            return Ok(Transition::MovedTo(next));
        }

        let payload = IntakeSubmission::from_draft(&self.draft)?;
        let metadata = OperationMetadata::with_correlation_id(self.session.session_id.to_string())
            .with_context("documents", payload.document_count().to_string());

        let receipt = self
            .submission
            .submit(payload, Some(metadata))
            .await
            .inspect_err(|e| warn!(error = %e, retryable = e.is_transient(), "Intake submission failed"))?;

        info!(request_number = %receipt.request_number, "Intake request submitted");
        self.navigation
            .exit(ExitReason::Submitted {
                request_id: receipt.request_id,
            })
            .await;
        self.state = WizardState::Submitted(receipt.clone());
        Ok(Transition::Submitted(receipt))
    }

    fn active_step(&self) -> Result<WizardStep, IntakeError> {
        self.current_step().ok_or(IntakeError::WizardClosed)
    }
}

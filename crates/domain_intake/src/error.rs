//! Intake domain errors
//!
//! Everything here is recoverable: an incomplete step or a rejected file
//! leaves the draft exactly as it was.

use thiserror::Error;

use core_kernel::{MoneyError, PortError};

use crate::field::Field;
use crate::step::WizardStep;

/// Errors raised while staging policy documents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    /// The file is larger than the per-document limit
    #[error("File is {size} bytes; documents must be at most {limit} bytes")]
    SizeExceeded { size: u64, limit: u64 },

    /// The staging list is already full
    #[error("At most {limit} policy documents can be attached")]
    CountExceeded { limit: usize },

    /// Only images and PDFs are accepted
    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),

    /// Replace targeted a slot that does not exist
    #[error("No staged document at position {0}")]
    NotFound(usize),
}

/// Errors that can occur while driving the intake wizard
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The active step still has required fields left empty
    #[error("Step {step} is incomplete: missing {}", missing_labels(.missing))]
    StepIncomplete { step: WizardStep, missing: Vec<Field> },

    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    /// The claimed amount could not be read as won
    #[error("Invalid claimed amount: {0}")]
    Amount(#[from] MoneyError),

    /// A received payload does not match what the wizard would have produced
    #[error("Inconsistent submission: {0}")]
    Inconsistent(String),

    /// The wizard already exited or submitted
    #[error("Wizard is closed")]
    WizardClosed,

    /// Entry requires a signed-in session
    #[error("No active session; sign in before filing a request")]
    NotAuthenticated,

    /// The submission collaborator rejected or failed the request
    #[error("Submission failed: {0}")]
    Submission(#[from] PortError),
}

impl IntakeError {
    /// Creates an Inconsistent error
    pub fn inconsistent(message: impl Into<String>) -> Self {
        IntakeError::Inconsistent(message.into())
    }

    /// Returns the missing fields when this is a step validation failure
    pub fn missing_fields(&self) -> &[Field] {
        match self {
            IntakeError::StepIncomplete { missing, .. } => missing,
            _ => &[],
        }
    }
}

fn missing_labels(missing: &[Field]) -> String {
    missing
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

//! Intake Domain
//!
//! This crate implements the adjusting request wizard: a claimant describes
//! the incident, the insurance involved, and how to reach them, across three
//! steps that each validate before the next opens.
//!
//! # Wizard Flow
//!
//! ```text
//! 사고 (incident) -> 보험사 (insurance) -> 상황 (contact) -> Submitted
//! ```
//!
//! The draft is an immutable value. Every edit is a [`DraftAction`] run
//! through [`reduce`], which owns the cascade rules (category change clears
//! tags, "unknown" flags clear what they replace). Which fields a category
//! shows and requires is data in [`CATEGORY_RULES`].

pub mod action;
pub mod attachment;
pub mod catalog;
pub mod draft;
pub mod error;
pub mod field;
pub mod input;
pub mod limits;
pub mod ports;
pub mod step;
pub mod submission;
pub mod validation;
pub mod visibility;
pub mod wizard;

pub use action::{reduce, DraftAction};
pub use attachment::{AttachmentStaging, PolicyDocument};
pub use catalog::{Category, CategoryRule, ClaimStatus, InsurerCategory, PersonRole, CATEGORY_RULES};
pub use draft::{ContactSection, Draft, IncidentSection, InsuranceSection, PolicyRecord};
pub use error::{AttachmentError, IntakeError};
pub use field::Field;
pub use limits::IntakeLimits;
pub use ports::{ExitReason, NavigationPort, NavigationTarget, Session, SessionPort, SubmissionPort};
pub use step::{StepProgress, StepStatus, WizardStep};
pub use submission::{IntakeSubmission, SubmissionReceipt};
pub use validation::{is_step_valid, is_submittable, validate_step, ValidationResult};
pub use wizard::{IntakeWizard, Transition, WizardState};

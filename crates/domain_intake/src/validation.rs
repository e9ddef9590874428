//! Step validators
//!
//! # Rules
//!
//! ## 사고 (incident)
//! - A category is chosen and at least one treatment tag is selected
//! - Every field the category's rule row lists is filled in
//!
//! ## 보험사 (insurance)
//! - An insurer category is chosen and at least one insurer selected
//! - Either an amount is entered or "금액 모름" is ticked
//! - For categories requiring policy verification: "증권 내용 모름" is
//!   ticked, or a document is attached, or both insurer and number are given
//!
//! ## 상황 (contact)
//! - Name, contact, and message are filled in
//!
//! Validators only read the draft. The amount is ignored entirely while
//! "금액 모름" is ticked, whatever value it holds.

use serde::Serialize;

use crate::draft::Draft;
use crate::error::IntakeError;
use crate::field::Field;
use crate::step::WizardStep;

/// Outcome of validating one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub step: WizardStep,
    /// Required fields still empty, in render order
    pub missing: Vec<Field>,
}

impl ValidationResult {
    pub fn ok(step: WizardStep) -> Self {
        Self {
            step,
            missing: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn add_missing(&mut self, field: Field) {
        if !self.missing.contains(&field) {
            self.missing.push(field);
        }
    }

    /// Converts a failed result into `IntakeError::StepIncomplete`
    pub fn into_result(self) -> Result<(), IntakeError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(IntakeError::StepIncomplete {
                step: self.step,
                missing: self.missing,
            })
        }
    }
}

/// Validates a single step and lists what is missing
pub fn validate_step(draft: &Draft, step: WizardStep) -> ValidationResult {
    let mut result = ValidationResult::ok(step);
    match step {
        WizardStep::Incident => validate_incident(draft, &mut result),
        WizardStep::Insurance => validate_insurance(draft, &mut result),
        WizardStep::Contact => validate_contact(draft, &mut result),
    }
    result
}

/// Boolean form of [`validate_step`], used to enable the next button
pub fn is_step_valid(draft: &Draft, step: WizardStep) -> bool {
    validate_step(draft, step).is_valid()
}

/// Validates every step in order
pub fn validate_all(draft: &Draft) -> Vec<ValidationResult> {
    WizardStep::ALL
        .into_iter()
        .map(|step| validate_step(draft, step))
        .collect()
}

pub fn is_submittable(draft: &Draft) -> bool {
    WizardStep::ALL.into_iter().all(|step| is_step_valid(draft, step))
}

fn validate_incident(draft: &Draft, result: &mut ValidationResult) {
    let Some(category) = draft.incident().category() else {
        result.add_missing(Field::Category);
        return;
    };

    if !draft.is_present(Field::TreatmentTags) {
        result.add_missing(Field::TreatmentTags);
    }
    for field in category.rule().required {
        if !draft.is_present(*field) {
            result.add_missing(*field);
        }
    }
}

fn validate_insurance(draft: &Draft, result: &mut ValidationResult) {
    if !draft.is_present(Field::InsurerCategory) {
        result.add_missing(Field::InsurerCategory);
    }
    if !draft.is_present(Field::Insurers) {
        result.add_missing(Field::Insurers);
    }
    if !draft.is_present(Field::AmountUnknown) && !draft.is_present(Field::Amount) {
        result.add_missing(Field::Amount);
    }

    if draft.requires_policy() {
        let policy = draft.insurance().policy();
        if !policy.is_unknown() && !policy.is_verified() {
            // Either a document or the insurer/number pair satisfies this.
            result.add_missing(Field::PolicyDocuments);
            for field in [Field::PolicyInsurer, Field::PolicyNumber] {
                if !draft.is_present(field) {
                    result.add_missing(field);
                }
            }
        }
    }
}

fn validate_contact(draft: &Draft, result: &mut ValidationResult) {
    for field in [Field::Name, Field::Contact, Field::Message] {
        if !draft.is_present(field) {
            result.add_missing(field);
        }
    }
}

//! Conditional visibility
//!
//! What each step renders depends on earlier answers. These functions derive
//! it from the draft; nothing here is stored.

use crate::catalog::{Category, ClaimStatus, InsurerCategory, PersonRole, POLICY_INSURERS};
use crate::draft::Draft;
use crate::field::Field;
use crate::limits::IntakeLimits;
use crate::step::WizardStep;

/// Fields rendered on `step`, in render order
pub fn visible_fields(draft: &Draft, step: WizardStep) -> Vec<Field> {
    match step {
        WizardStep::Incident => {
            let mut fields = vec![Field::Category];
            if let Some(category) = draft.incident().category() {
                fields.push(Field::TreatmentTags);
                fields.extend_from_slice(category.rule().required);
            }
            fields
        }
        WizardStep::Insurance => {
            let mut fields = vec![Field::InsurerCategory];
            if draft.insurance().insurer_category().is_some() {
                fields.push(Field::Insurers);
            }
            fields.extend([Field::Amount, Field::AmountUnknown]);
            if draft.requires_policy() {
                fields.extend([
                    Field::PolicyInsurer,
                    Field::PolicyNumber,
                    Field::PolicyDocuments,
                    Field::PolicyUnknown,
                ]);
            }
            fields
        }
        WizardStep::Contact => vec![Field::Name, Field::Contact, Field::Message, Field::AvailableTime],
    }
}

pub fn is_visible(draft: &Draft, field: Field) -> bool {
    visible_fields(draft, field.step()).contains(&field)
}

/// Whether a visible field accepts input.
///
/// The amount box is disabled while "금액 모름" is ticked and the policy
/// inputs while "증권 내용 모름" is ticked. The upload control additionally
/// disappears once the staging list is full.
pub fn is_field_enabled(draft: &Draft, field: Field, limits: &IntakeLimits) -> bool {
    if !is_visible(draft, field) {
        return false;
    }
    let insurance = draft.insurance();
    match field {
        Field::Amount => !insurance.is_amount_unknown(),
        Field::PolicyInsurer | Field::PolicyNumber => !insurance.policy().is_unknown(),
        Field::PolicyDocuments => can_attach_document(draft, limits),
        _ => true,
    }
}

/// Whether the upload control is offered
pub fn can_attach_document(draft: &Draft, limits: &IntakeLimits) -> bool {
    let policy = draft.insurance().policy();
    draft.requires_policy() && !policy.is_unknown() && policy.documents().has_room(limits)
}

/// Options offered by a choice field given the current draft.
///
/// Free-text fields and flags have no options and return an empty list.
pub fn options_for(draft: &Draft, field: Field) -> Vec<&'static str> {
    match field {
        Field::Category => Category::ALL.iter().map(|c| c.label()).collect(),
        Field::TreatmentTags => draft
            .incident()
            .category()
            .map(|c| c.treatment_tags().to_vec())
            .unwrap_or_default(),
        Field::ClaimStatus => ClaimStatus::ALL.iter().map(|s| s.label()).collect(),
        Field::PersonRole => PersonRole::ALL.iter().map(|r| r.label()).collect(),
        Field::InsurerCategory => InsurerCategory::ALL.iter().map(|c| c.label()).collect(),
        Field::Insurers => draft
            .insurance()
            .insurer_category()
            .map(|c| c.insurers().to_vec())
            .unwrap_or_default(),
        Field::PolicyInsurer => POLICY_INSURERS.to_vec(),
        _ => Vec::new(),
    }
}

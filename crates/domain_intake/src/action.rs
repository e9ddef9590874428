//! Draft reducer
//!
//! Every edit the claimant makes is a [`DraftAction`]. [`reduce`] takes the
//! current draft by reference and returns the next one, applying the cascade
//! rules in one place:
//!
//! - `SetCategory` empties the treatment tags
//! - `SetInsurerCategory` empties the insurer selection
//! - `SetAmountUnknown(true)` empties the amount
//! - `SetPolicyUnknown(true)` empties insurer, number, and documents
//!
//! Edits aimed at a disabled or hidden input (amount while unknown, policy
//! fields while unknown, tags outside the category, insurers outside the
//! catalogue) are dropped and the draft comes back unchanged. Only document
//! staging can fail, and a failure leaves the input draft untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::attachment::PolicyDocument;
use crate::catalog::{Category, ClaimStatus, InsurerCategory, PersonRole, POLICY_INSURERS};
use crate::draft::Draft;
use crate::error::AttachmentError;
use crate::field::Field;
use crate::input::{normalize_amount, normalize_policy_number, truncate_chars};
use crate::limits::IntakeLimits;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DraftAction {
    SetCategory(Category),
    ToggleTreatmentTag(String),
    SetHospitalName(String),
    SetRegion(String),
    SetClaimStatus(ClaimStatus),
    SetPersonRole(PersonRole),
    SetInsurerCategory(InsurerCategory),
    ToggleInsurer(String),
    SetAmount(String),
    SetAmountUnknown(bool),
    SetPolicyInsurer(String),
    SetPolicyNumber(String),
    AttachPolicyDocument(PolicyDocument),
    ReplacePolicyDocument { index: usize, document: PolicyDocument },
    RemovePolicyDocument(usize),
    SetPolicyUnknown(bool),
    SetName(String),
    SetContact(String),
    SetMessage(String),
    SetAvailableTime(String),
}

impl DraftAction {
    /// The field this action edits
    pub fn field(&self) -> Field {
        match self {
            DraftAction::SetCategory(_) => Field::Category,
            DraftAction::ToggleTreatmentTag(_) => Field::TreatmentTags,
            DraftAction::SetHospitalName(_) => Field::HospitalName,
            DraftAction::SetRegion(_) => Field::Region,
            DraftAction::SetClaimStatus(_) => Field::ClaimStatus,
            DraftAction::SetPersonRole(_) => Field::PersonRole,
            DraftAction::SetInsurerCategory(_) => Field::InsurerCategory,
            DraftAction::ToggleInsurer(_) => Field::Insurers,
            DraftAction::SetAmount(_) => Field::Amount,
            DraftAction::SetAmountUnknown(_) => Field::AmountUnknown,
            DraftAction::SetPolicyInsurer(_) => Field::PolicyInsurer,
            DraftAction::SetPolicyNumber(_) => Field::PolicyNumber,
            DraftAction::AttachPolicyDocument(_)
            | DraftAction::ReplacePolicyDocument { .. }
            | DraftAction::RemovePolicyDocument(_) => Field::PolicyDocuments,
            DraftAction::SetPolicyUnknown(_) => Field::PolicyUnknown,
            DraftAction::SetName(_) => Field::Name,
            DraftAction::SetContact(_) => Field::Contact,
            DraftAction::SetMessage(_) => Field::Message,
            DraftAction::SetAvailableTime(_) => Field::AvailableTime,
        }
    }
}

/// Applies one action to a draft and returns the resulting draft
pub fn reduce(draft: &Draft, action: DraftAction, limits: &IntakeLimits) -> Result<Draft, AttachmentError> {
    let mut next = draft.clone();
    let field = action.field();

    match action {
        DraftAction::SetCategory(category) => {
            next.incident.category = Some(category);
            next.incident.treatment_tags.clear();
        }
        DraftAction::ToggleTreatmentTag(tag) => {
            let Some(category) = next.incident.category else {
                return Ok(ignored(draft, field, "no category selected"));
            };
            if !category.allows_tag(&tag) {
                return Ok(ignored(draft, field, "tag not offered for category"));
            }
            toggle(&mut next.incident.treatment_tags, tag);
        }
        DraftAction::SetHospitalName(value) => next.incident.hospital_name = value,
        DraftAction::SetRegion(value) => next.incident.region = value,
        DraftAction::SetClaimStatus(status) => next.incident.claim_status = Some(status),
        DraftAction::SetPersonRole(role) => next.incident.person_role = Some(role),

        DraftAction::SetInsurerCategory(category) => {
            next.insurance.insurer_category = Some(category);
            next.insurance.insurers.clear();
        }
        DraftAction::ToggleInsurer(insurer) => {
            let offered = next
                .insurance
                .insurer_category
                .is_some_and(|category| category.offers(&insurer));
            if !offered {
                return Ok(ignored(draft, field, "insurer not in catalogue"));
            }
            toggle(&mut next.insurance.insurers, insurer);
        }
        DraftAction::SetAmount(value) => {
            if next.insurance.amount_unknown {
                return Ok(ignored(draft, field, "amount marked unknown"));
            }
            next.insurance.amount = normalize_amount(&value);
        }
        DraftAction::SetAmountUnknown(unknown) => {
            next.insurance.amount_unknown = unknown;
            if unknown {
                next.insurance.amount.clear();
            }
        }

        DraftAction::SetPolicyInsurer(insurer) => {
            if next.insurance.policy.unknown {
                return Ok(ignored(draft, field, "policy marked unknown"));
            }
            if !insurer.is_empty() && !POLICY_INSURERS.contains(&insurer.as_str()) {
                return Ok(ignored(draft, field, "insurer not in catalogue"));
            }
            next.insurance.policy.insurer = insurer;
        }
        DraftAction::SetPolicyNumber(value) => {
            if next.insurance.policy.unknown {
                return Ok(ignored(draft, field, "policy marked unknown"));
            }
            next.insurance.policy.policy_number = normalize_policy_number(&value);
        }
        DraftAction::AttachPolicyDocument(document) => {
            if next.insurance.policy.unknown {
                return Ok(ignored(draft, field, "policy marked unknown"));
            }
            next.insurance
                .policy
                .documents
                .add(document, limits)
                .inspect_err(|e| warn!(error = %e, "Policy document rejected"))?;
        }
        DraftAction::ReplacePolicyDocument { index, document } => {
            if next.insurance.policy.unknown {
                return Ok(ignored(draft, field, "policy marked unknown"));
            }
            next.insurance
                .policy
                .documents
                .replace(index, document, limits)
                .inspect_err(|e| warn!(error = %e, index, "Policy document replacement rejected"))?;
        }
        DraftAction::RemovePolicyDocument(index) => {
            if next.insurance.policy.documents.remove(index).is_none() {
                return Ok(ignored(draft, field, "no document at index"));
            }
        }
        DraftAction::SetPolicyUnknown(unknown) => {
            next.insurance.policy.unknown = unknown;
            if unknown {
                next.insurance.policy.clear();
            }
        }

        DraftAction::SetName(value) => next.contact.name = value,
        DraftAction::SetContact(value) => next.contact.contact = value,
        DraftAction::SetMessage(value) => {
            next.contact.message = truncate_chars(&value, limits.message_max_chars);
        }
        DraftAction::SetAvailableTime(value) => next.contact.available_time = value,
    }

    debug!(field = ?field, "Draft updated");
    Ok(next)
}

impl Draft {
    /// Consumes the draft and returns the reduced one
    pub fn apply(self, action: DraftAction, limits: &IntakeLimits) -> Result<Draft, AttachmentError> {
        reduce(&self, action, limits)
    }
}

fn ignored(draft: &Draft, field: Field, reason: &'static str) -> Draft {
    debug!(field = ?field, reason, "Draft action ignored");
    draft.clone()
}

fn toggle(selection: &mut Vec<String>, value: String) {
    if let Some(position) = selection.iter().position(|v| *v == value) {
        selection.remove(position);
    } else {
        selection.push(value);
    }
}

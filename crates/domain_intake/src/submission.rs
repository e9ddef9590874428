//! Submission payload and receipt
//!
//! The wizard hands its draft to the submission collaborator as one flat
//! record. A receiver that cannot trust the sender (the HTTP service) calls
//! [`IntakeSubmission::verify`], which rebuilds the draft through the same
//! reducer and validators the wizard uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{IntakeRequestId, Money};

use crate::action::{reduce, DraftAction};
use crate::attachment::PolicyDocument;
use crate::catalog::{Category, ClaimStatus, InsurerCategory, PersonRole};
use crate::draft::Draft;
use crate::error::IntakeError;
use crate::limits::IntakeLimits;
use crate::validation::validate_all;

/// The flattened request sent on the last step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeSubmission {
    pub category: Option<Category>,
    pub treatment_types: Vec<String>,
    pub hospital_name: String,
    pub claim_status: Option<ClaimStatus>,
    pub person_role: Option<PersonRole>,
    pub region: String,

    /// `None` when the amount is unknown
    pub insurance_amount: Option<Money>,
    pub insurance_amount_unknown: bool,
    pub insurer_category: Option<InsurerCategory>,
    pub insurers: Vec<String>,

    pub policy_insurer: String,
    pub policy_number: String,
    pub policy_documents: Vec<PolicyDocument>,
    pub policy_unknown: bool,

    pub name: String,
    pub contact: String,
    pub consultation_content: String,
    pub available_time: String,
}

impl IntakeSubmission {
    /// Flattens a draft into the payload.
    ///
    /// Fails only when the amount does not fit a decimal.
    pub fn from_draft(draft: &Draft) -> Result<Self, IntakeError> {
        let incident = draft.incident();
        let insurance = draft.insurance();
        let policy = insurance.policy();
        let contact = draft.contact();

        let insurance_amount = if insurance.is_amount_unknown() || insurance.amount().is_empty() {
            None
        } else {
            Some(Money::parse_krw(insurance.amount())?)
        };

        Ok(Self {
            category: incident.category(),
            treatment_types: incident.treatment_tags().to_vec(),
            hospital_name: incident.hospital_name().to_string(),
            claim_status: incident.claim_status(),
            person_role: incident.person_role(),
            region: incident.region().to_string(),
            insurance_amount,
            insurance_amount_unknown: insurance.is_amount_unknown(),
            insurer_category: insurance.insurer_category(),
            insurers: insurance.insurers().to_vec(),
            policy_insurer: policy.insurer().to_string(),
            policy_number: policy.policy_number().to_string(),
            policy_documents: policy.documents().documents().to_vec(),
            policy_unknown: policy.is_unknown(),
            name: contact.name().to_string(),
            contact: contact.contact().to_string(),
            consultation_content: contact.message().to_string(),
            available_time: contact.available_time().to_string(),
        })
    }

    /// The actions that rebuild this payload's draft from empty.
    ///
    /// Flags come after the values they guard so a payload carrying both
    /// ends up cleared and no longer matches itself.
    pub fn to_actions(&self) -> Vec<DraftAction> {
        let mut actions = Vec::new();

        if let Some(category) = self.category {
            actions.push(DraftAction::SetCategory(category));
        }
        actions.extend(self.treatment_types.iter().cloned().map(DraftAction::ToggleTreatmentTag));
        actions.push(DraftAction::SetHospitalName(self.hospital_name.clone()));
        actions.push(DraftAction::SetRegion(self.region.clone()));
        if let Some(status) = self.claim_status {
            actions.push(DraftAction::SetClaimStatus(status));
        }
        if let Some(role) = self.person_role {
            actions.push(DraftAction::SetPersonRole(role));
        }

        if let Some(category) = self.insurer_category {
            actions.push(DraftAction::SetInsurerCategory(category));
        }
        actions.extend(self.insurers.iter().cloned().map(DraftAction::ToggleInsurer));
        if let Some(amount) = &self.insurance_amount {
            actions.push(DraftAction::SetAmount(amount.amount().to_string()));
        }
        actions.push(DraftAction::SetAmountUnknown(self.insurance_amount_unknown));

        actions.push(DraftAction::SetPolicyInsurer(self.policy_insurer.clone()));
        actions.push(DraftAction::SetPolicyNumber(self.policy_number.clone()));
        actions.extend(self.policy_documents.iter().cloned().map(DraftAction::AttachPolicyDocument));
        actions.push(DraftAction::SetPolicyUnknown(self.policy_unknown));

        actions.push(DraftAction::SetName(self.name.clone()));
        actions.push(DraftAction::SetContact(self.contact.clone()));
        actions.push(DraftAction::SetMessage(self.consultation_content.clone()));
        actions.push(DraftAction::SetAvailableTime(self.available_time.clone()));
        actions
    }

    /// Rebuilds the draft and checks it the way the wizard would.
    ///
    /// Rejects payloads the wizard could not have produced (both a flag and
    /// the value it clears, tags from another category, unnormalised input)
    /// with `Inconsistent`, then runs every step validator.
    pub fn verify(&self, limits: &IntakeLimits) -> Result<Draft, IntakeError> {
        let draft = self
            .to_actions()
            .into_iter()
            .try_fold(Draft::new(), |draft, action| reduce(&draft, action, limits))?;

        let rebuilt = Self::from_draft(&draft)?;
        if rebuilt != *self {
            debug!(?rebuilt, "Submission does not survive replay");
            return Err(IntakeError::inconsistent(
                "payload contains values the intake form would have cleared or rejected",
            ));
        }

        for result in validate_all(&draft) {
            result.into_result()?;
        }
        Ok(draft)
    }

    pub fn document_count(&self) -> usize {
        self.policy_documents.len()
    }
}

/// Acknowledgement returned by the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub request_id: IntakeRequestId,
    /// Short number quoted to the claimant, e.g. `REQ-0192F3A1`
    pub request_number: String,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn issue(request_id: IntakeRequestId) -> Self {
        Self {
            request_id,
            request_number: request_id.short(),
            received_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttachmentError;
    use rust_decimal_macros::dec;

    fn complete_draft() -> Draft {
        let limits = IntakeLimits::default();
        [
            DraftAction::SetCategory(Category::TrafficAccident),
            DraftAction::ToggleTreatmentTag("교통사고".into()),
            DraftAction::SetHospitalName("서울병원".into()),
            DraftAction::SetInsurerCategory(InsurerCategory::NonLife),
            DraftAction::ToggleInsurer("DB손해보험".into()),
            DraftAction::SetAmount("2,000,000".into()),
            DraftAction::AttachPolicyDocument(PolicyDocument::new("policy.pdf", "application/pdf", 4096)),
            DraftAction::SetName("김철수".into()),
            DraftAction::SetContact("010-0000-0000".into()),
            DraftAction::SetMessage("치료비 청구가 거절되었습니다.".into()),
        ]
        .into_iter()
        .try_fold(Draft::new(), |draft, action| draft.apply(action, &limits))
        .unwrap()
    }

    #[test]
    fn test_from_draft_flattens_sections() {
        let submission = IntakeSubmission::from_draft(&complete_draft()).unwrap();
        assert_eq!(submission.category, Some(Category::TrafficAccident));
        assert_eq!(submission.insurance_amount, Some(Money::krw(dec!(2000000))));
        assert_eq!(submission.document_count(), 1);
        assert_eq!(submission.consultation_content, "치료비 청구가 거절되었습니다.");
    }

    #[test]
    fn test_verify_rebuilds_identical_draft() {
        let draft = complete_draft();
        let submission = IntakeSubmission::from_draft(&draft).unwrap();
        assert_eq!(submission.verify(&IntakeLimits::default()).unwrap(), draft);
    }

    #[test]
    fn test_verify_rejects_amount_with_unknown_flag() {
        let mut submission = IntakeSubmission::from_draft(&complete_draft()).unwrap();
        submission.insurance_amount_unknown = true;
        assert!(matches!(
            submission.verify(&IntakeLimits::default()),
            Err(IntakeError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_verify_rejects_foreign_tag() {
        let mut submission = IntakeSubmission::from_draft(&complete_draft()).unwrap();
        submission.treatment_types.push("백내장".into());
        assert!(matches!(
            submission.verify(&IntakeLimits::default()),
            Err(IntakeError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_verify_reports_incomplete_step() {
        let mut submission = IntakeSubmission::from_draft(&complete_draft()).unwrap();
        submission.name = String::new();
        let err = submission.verify(&IntakeLimits::default()).unwrap_err();
        assert_eq!(err.missing_fields(), &[crate::field::Field::Name]);
    }

    #[test]
    fn test_verify_applies_document_limits() {
        let mut submission = IntakeSubmission::from_draft(&complete_draft()).unwrap();
        submission.policy_documents = (0..4)
            .map(|i| PolicyDocument::new(format!("{i}.jpg"), "image/jpeg", 10))
            .collect();
        assert!(matches!(
            submission.verify(&IntakeLimits::default()),
            Err(IntakeError::Attachment(AttachmentError::CountExceeded { limit: 3 }))
        ));
    }

    #[test]
    fn test_receipt_number_is_short_id() {
        let id = IntakeRequestId::new();
        let receipt = SubmissionReceipt::issue(id);
        assert_eq!(receipt.request_number, id.short());
        assert!(receipt.request_number.starts_with("REQ-"));
    }
}

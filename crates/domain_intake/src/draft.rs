//! The intake draft
//!
//! A `Draft` is the request being filled in, split into the three sections
//! the wizard walks through. Fields are read through accessors and changed
//! only by [`crate::action::reduce`], which enforces the cascade rules:
//!
//! - tags always belong to the selected category
//! - the amount and the "amount unknown" flag are never both set
//! - the policy sub-record and the "policy unknown" flag are never both set
//! - selected insurers always belong to the selected insurer category

use serde::{Deserialize, Serialize};

use crate::attachment::AttachmentStaging;
use crate::catalog::{Category, ClaimStatus, InsurerCategory, PersonRole};
use crate::field::Field;
use crate::input::is_filled;

/// 사고 - the incident section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentSection {
    pub(crate) category: Option<Category>,
    pub(crate) treatment_tags: Vec<String>,
    pub(crate) hospital_name: String,
    pub(crate) region: String,
    pub(crate) claim_status: Option<ClaimStatus>,
    pub(crate) person_role: Option<PersonRole>,
}

impl IncidentSection {
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn treatment_tags(&self) -> &[String] {
        &self.treatment_tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.treatment_tags.iter().any(|t| t == tag)
    }

    pub fn hospital_name(&self) -> &str {
        &self.hospital_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn claim_status(&self) -> Option<ClaimStatus> {
        self.claim_status
    }

    pub fn person_role(&self) -> Option<PersonRole> {
        self.person_role
    }
}

/// Insurance policy details, asked for when the category needs verification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub(crate) insurer: String,
    pub(crate) policy_number: String,
    pub(crate) documents: AttachmentStaging,
    pub(crate) unknown: bool,
}

impl PolicyRecord {
    pub fn insurer(&self) -> &str {
        &self.insurer
    }

    pub fn policy_number(&self) -> &str {
        &self.policy_number
    }

    pub fn documents(&self) -> &AttachmentStaging {
        &self.documents
    }

    /// "증권 내용 모름": the adjuster will ask for the policy later
    pub fn is_unknown(&self) -> bool {
        self.unknown
    }

    /// Verified means at least one document, or both insurer and number
    pub fn is_verified(&self) -> bool {
        !self.documents.is_empty() || (is_filled(&self.insurer) && is_filled(&self.policy_number))
    }

    pub(crate) fn clear(&mut self) {
        self.insurer.clear();
        self.policy_number.clear();
        self.documents.clear();
    }
}

/// 보험사 - the insurance section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceSection {
    pub(crate) insurer_category: Option<InsurerCategory>,
    pub(crate) insurers: Vec<String>,
    pub(crate) amount: String,
    pub(crate) amount_unknown: bool,
    pub(crate) policy: PolicyRecord,
}

impl InsuranceSection {
    pub fn insurer_category(&self) -> Option<InsurerCategory> {
        self.insurer_category
    }

    pub fn insurers(&self) -> &[String] {
        &self.insurers
    }

    /// Claimed amount in won, digits only; empty when not entered
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn is_amount_unknown(&self) -> bool {
        self.amount_unknown
    }

    pub fn policy(&self) -> &PolicyRecord {
        &self.policy
    }
}

/// 상황 - the contact section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
    pub(crate) name: String,
    pub(crate) contact: String,
    pub(crate) message: String,
    pub(crate) available_time: String,
}

impl ContactSection {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message length for the `n/500자` counter
    pub fn message_chars(&self) -> usize {
        self.message.chars().count()
    }

    pub fn available_time(&self) -> &str {
        &self.available_time
    }
}

/// The in-progress request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub(crate) incident: IncidentSection,
    pub(crate) insurance: InsuranceSection,
    pub(crate) contact: ContactSection,
}

impl Draft {
    /// An empty draft, as created when the wizard mounts
    pub fn new() -> Self {
        Self::default()
    }

    pub fn incident(&self) -> &IncidentSection {
        &self.incident
    }

    pub fn insurance(&self) -> &InsuranceSection {
        &self.insurance
    }

    pub fn contact(&self) -> &ContactSection {
        &self.contact
    }

    /// Whether the selected category asks for the policy sub-record
    pub fn requires_policy(&self) -> bool {
        self.incident.category.is_some_and(Category::requires_policy)
    }

    /// Whether a single field holds a value.
    ///
    /// Flags count as present when set; text counts as present when it has
    /// non-whitespace content.
    pub fn is_present(&self, field: Field) -> bool {
        let incident = &self.incident;
        let insurance = &self.insurance;
        let policy = &insurance.policy;
        let contact = &self.contact;

        match field {
            Field::Category => incident.category.is_some(),
            Field::TreatmentTags => !incident.treatment_tags.is_empty(),
            Field::HospitalName => is_filled(&incident.hospital_name),
            Field::Region => is_filled(&incident.region),
            Field::ClaimStatus => incident.claim_status.is_some(),
            Field::PersonRole => incident.person_role.is_some(),
            Field::Amount => is_filled(&insurance.amount),
            Field::AmountUnknown => insurance.amount_unknown,
            Field::InsurerCategory => insurance.insurer_category.is_some(),
            Field::Insurers => !insurance.insurers.is_empty(),
            Field::PolicyInsurer => is_filled(&policy.insurer),
            Field::PolicyNumber => is_filled(&policy.policy_number),
            Field::PolicyDocuments => !policy.documents.is_empty(),
            Field::PolicyUnknown => policy.unknown,
            Field::Name => is_filled(&contact.name),
            Field::Contact => is_filled(&contact.contact),
            Field::Message => is_filled(&contact.message),
            Field::AvailableTime => is_filled(&contact.available_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = Draft::new();
        assert!(draft.incident().category().is_none());
        assert!(draft.insurance().policy().documents().is_empty());
        assert!(!draft.requires_policy());
        assert!(!draft.is_present(Field::Name));
    }

    #[test]
    fn test_whitespace_is_not_present() {
        let mut draft = Draft::new();
        draft.contact.name = "   ".to_string();
        assert!(!draft.is_present(Field::Name));
        draft.contact.name = "홍길동".to_string();
        assert!(draft.is_present(Field::Name));
    }

    #[test]
    fn test_policy_verified_by_insurer_and_number() {
        let mut policy = PolicyRecord::default();
        policy.insurer = "삼성화재".to_string();
        assert!(!policy.is_verified());
        policy.policy_number = "123-456-789".to_string();
        assert!(policy.is_verified());
    }
}

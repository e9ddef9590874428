//! Test Data Builders
//!
//! Drafts can only be changed through the reducer, so the builder records
//! actions and folds them over an empty draft. Tests name only the edits
//! they care about.

use domain_intake::{
    reduce, Category, ClaimStatus, Draft, DraftAction, IntakeLimits, IntakeSubmission,
    InsurerCategory, PersonRole, PolicyDocument,
};

use crate::fixtures::DraftFixtures;

/// Builder for intake drafts
#[derive(Debug, Clone, Default)]
pub struct DraftBuilder {
    actions: Vec<DraftAction>,
    limits: IntakeLimits,
}

impl DraftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a draft with every step complete
    pub fn complete(category: Category) -> Self {
        Self::new().actions(DraftFixtures::complete_actions(category))
    }

    pub fn with_limits(mut self, limits: IntakeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn action(mut self, action: DraftAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn actions(mut self, actions: impl IntoIterator<Item = DraftAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn category(self, category: Category) -> Self {
        self.action(DraftAction::SetCategory(category))
    }

    pub fn tag(self, tag: &str) -> Self {
        self.action(DraftAction::ToggleTreatmentTag(tag.to_string()))
    }

    pub fn hospital(self, name: &str) -> Self {
        self.action(DraftAction::SetHospitalName(name.to_string()))
    }

    pub fn region(self, region: &str) -> Self {
        self.action(DraftAction::SetRegion(region.to_string()))
    }

    pub fn claim_status(self, status: ClaimStatus) -> Self {
        self.action(DraftAction::SetClaimStatus(status))
    }

    pub fn person_role(self, role: PersonRole) -> Self {
        self.action(DraftAction::SetPersonRole(role))
    }

    pub fn insurer_category(self, category: InsurerCategory) -> Self {
        self.action(DraftAction::SetInsurerCategory(category))
    }

    pub fn insurer(self, insurer: &str) -> Self {
        self.action(DraftAction::ToggleInsurer(insurer.to_string()))
    }

    pub fn amount(self, amount: &str) -> Self {
        self.action(DraftAction::SetAmount(amount.to_string()))
    }

    pub fn amount_unknown(self, unknown: bool) -> Self {
        self.action(DraftAction::SetAmountUnknown(unknown))
    }

    pub fn policy_insurer(self, insurer: &str) -> Self {
        self.action(DraftAction::SetPolicyInsurer(insurer.to_string()))
    }

    pub fn policy_number(self, number: &str) -> Self {
        self.action(DraftAction::SetPolicyNumber(number.to_string()))
    }

    pub fn document(self, document: PolicyDocument) -> Self {
        self.action(DraftAction::AttachPolicyDocument(document))
    }

    pub fn policy_unknown(self, unknown: bool) -> Self {
        self.action(DraftAction::SetPolicyUnknown(unknown))
    }

    pub fn name(self, name: &str) -> Self {
        self.action(DraftAction::SetName(name.to_string()))
    }

    pub fn contact(self, contact: &str) -> Self {
        self.action(DraftAction::SetContact(contact.to_string()))
    }

    pub fn message(self, message: &str) -> Self {
        self.action(DraftAction::SetMessage(message.to_string()))
    }

    /// Applies the recorded actions.
    ///
    /// # Panics
    ///
    /// Panics when an action is rejected; use [`Self::try_build`] to test
    /// rejections.
    pub fn build(self) -> Draft {
        self.try_build().expect("draft builder action was rejected")
    }

    pub fn try_build(self) -> Result<Draft, domain_intake::AttachmentError> {
        let limits = self.limits;
        self.actions
            .into_iter()
            .try_fold(Draft::new(), |draft, action| reduce(&draft, action, &limits))
    }

    /// Builds the draft and flattens it into a submission payload
    pub fn submission(self) -> IntakeSubmission {
        IntakeSubmission::from_draft(&self.build()).expect("amount fits a decimal")
    }
}

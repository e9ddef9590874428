//! Form fields
//!
//! Every input on the three steps has a `Field` tag. Validators report
//! missing fields with these tags and the visibility rules return them in
//! render order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::step::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    // Incident
    Category,
    TreatmentTags,
    HospitalName,
    Region,
    ClaimStatus,
    PersonRole,
    // Insurance
    Amount,
    AmountUnknown,
    InsurerCategory,
    Insurers,
    PolicyInsurer,
    PolicyNumber,
    PolicyDocuments,
    PolicyUnknown,
    // Contact
    Name,
    Contact,
    Message,
    AvailableTime,
}

impl Field {
    /// The step this field is rendered on
    pub fn step(self) -> WizardStep {
        use Field::*;
        match self {
            Category | TreatmentTags | HospitalName | Region | ClaimStatus | PersonRole => {
                WizardStep::Incident
            }
            Amount | AmountUnknown | InsurerCategory | Insurers | PolicyInsurer | PolicyNumber
            | PolicyDocuments | PolicyUnknown => WizardStep::Insurance,
            Name | Contact | Message | AvailableTime => WizardStep::Contact,
        }
    }

    /// Stable key, matching the serialized name
    pub fn key(self) -> &'static str {
        match self {
            Field::Category => "category",
            Field::TreatmentTags => "treatment_tags",
            Field::HospitalName => "hospital_name",
            Field::Region => "region",
            Field::ClaimStatus => "claim_status",
            Field::PersonRole => "person_role",
            Field::Amount => "amount",
            Field::AmountUnknown => "amount_unknown",
            Field::InsurerCategory => "insurer_category",
            Field::Insurers => "insurers",
            Field::PolicyInsurer => "policy_insurer",
            Field::PolicyNumber => "policy_number",
            Field::PolicyDocuments => "policy_documents",
            Field::PolicyUnknown => "policy_unknown",
            Field::Name => "name",
            Field::Contact => "contact",
            Field::Message => "message",
            Field::AvailableTime => "available_time",
        }
    }

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            Field::Category => "보험상품 유형",
            Field::TreatmentTags => "치료 구분",
            Field::HospitalName => "병원 명",
            Field::Region => "지역 명",
            Field::ClaimStatus => "청구 상황",
            Field::PersonRole => "본인 구분",
            Field::Amount => "보험 금액",
            Field::AmountUnknown => "금액 모름",
            Field::InsurerCategory => "보험 종류",
            Field::Insurers => "보험사 선택",
            Field::PolicyInsurer => "보험사",
            Field::PolicyNumber => "증권번호",
            Field::PolicyDocuments => "보험증권 사진/사본",
            Field::PolicyUnknown => "증권 내용 모름",
            Field::Name => "이름",
            Field::Contact => "연락처",
            Field::Message => "상담 내용",
            Field::AvailableTime => "연락 가능 시간대",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Property-Based Test Generators
//!
//! Proptest strategies for intake actions. Values are deliberately drawn
//! from a wider pool than any one category or insurer catalogue offers, so
//! random sequences exercise the reducer's ignore paths as well as its
//! cascades.

use proptest::prelude::*;

use domain_intake::catalog::{LIFE_INSURERS, NON_LIFE_INSURERS, POLICY_INSURERS};
use domain_intake::limits::MAX_DOCUMENT_BYTES;
use domain_intake::{
    Category, ClaimStatus, DraftAction, InsurerCategory, PersonRole, PolicyDocument, CATEGORY_RULES,
};

pub fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop::sample::select(ClaimStatus::ALL.to_vec())
}

pub fn person_role_strategy() -> impl Strategy<Value = PersonRole> {
    prop::sample::select(PersonRole::ALL.to_vec())
}

pub fn insurer_category_strategy() -> impl Strategy<Value = InsurerCategory> {
    prop::sample::select(InsurerCategory::ALL.to_vec())
}

/// Any tag of any category, plus one no category offers
pub fn any_tag_strategy() -> impl Strategy<Value = String> {
    let mut tags: Vec<String> = CATEGORY_RULES
        .iter()
        .flat_map(|rule| rule.treatment_tags.iter().map(|t| t.to_string()))
        .collect();
    tags.push("없는 항목".to_string());
    prop::sample::select(tags)
}

/// Any insurer from either catalogue, plus an unknown one
pub fn any_insurer_strategy() -> impl Strategy<Value = String> {
    let mut insurers: Vec<String> = NON_LIFE_INSURERS
        .iter()
        .chain(LIFE_INSURERS)
        .map(|i| i.to_string())
        .collect();
    insurers.push("없는보험".to_string());
    prop::sample::select(insurers)
}

pub fn policy_insurer_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(POLICY_INSURERS.to_vec()).prop_map(String::from),
        Just(String::new()),
        Just("없는보험".to_string()),
    ]
}

/// Short free text, sometimes blank
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[가-힣a-z0-9 ]{1,20}",
    ]
}

/// Documents around the size limit, of accepted and rejected types
pub fn document_strategy() -> impl Strategy<Value = PolicyDocument> {
    let size = prop_oneof![
        1u64..MAX_DOCUMENT_BYTES,
        Just(MAX_DOCUMENT_BYTES),
        Just(MAX_DOCUMENT_BYTES + 1),
    ];
    let content_type = prop::sample::select(vec!["image/jpeg", "image/png", "application/pdf", "text/plain"]);
    (size, content_type).prop_map(|(size, content_type)| PolicyDocument::new("doc", content_type, size))
}

/// Any single draft edit
pub fn draft_action_strategy() -> impl Strategy<Value = DraftAction> {
    prop_oneof![
        category_strategy().prop_map(DraftAction::SetCategory),
        any_tag_strategy().prop_map(DraftAction::ToggleTreatmentTag),
        text_strategy().prop_map(DraftAction::SetHospitalName),
        text_strategy().prop_map(DraftAction::SetRegion),
        claim_status_strategy().prop_map(DraftAction::SetClaimStatus),
        person_role_strategy().prop_map(DraftAction::SetPersonRole),
        insurer_category_strategy().prop_map(DraftAction::SetInsurerCategory),
        any_insurer_strategy().prop_map(DraftAction::ToggleInsurer),
        "[0-9,]{0,40}".prop_map(DraftAction::SetAmount),
        any::<bool>().prop_map(DraftAction::SetAmountUnknown),
        policy_insurer_strategy().prop_map(DraftAction::SetPolicyInsurer),
        "[0-9-]{0,14}".prop_map(DraftAction::SetPolicyNumber),
        document_strategy().prop_map(DraftAction::AttachPolicyDocument),
        (0usize..4, document_strategy())
            .prop_map(|(index, document)| DraftAction::ReplacePolicyDocument { index, document }),
        (0usize..4).prop_map(DraftAction::RemovePolicyDocument),
        any::<bool>().prop_map(DraftAction::SetPolicyUnknown),
        text_strategy().prop_map(DraftAction::SetName),
        text_strategy().prop_map(DraftAction::SetContact),
        ".{0,600}".prop_map(DraftAction::SetMessage),
        text_strategy().prop_map(DraftAction::SetAvailableTime),
    ]
}

pub fn action_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<DraftAction>> {
    prop::collection::vec(draft_action_strategy(), 0..max_len)
}

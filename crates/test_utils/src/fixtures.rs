//! Pre-built Test Fixtures
//!
//! Provides ready-to-use intake data: action scripts that complete each
//! wizard step for any category, staged documents at and around the limits,
//! and contact details.

use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_intake::{
    Category, ClaimStatus, DraftAction, Field, InsurerCategory, PersonRole, PolicyDocument,
};
use domain_intake::limits::MAX_DOCUMENT_BYTES;

/// Fixture for won amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical indemnity claim
    pub fn krw_3m() -> Money {
        Money::krw(dec!(3000000))
    }
}

/// Fixture for staged policy documents
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// A phone photo of the policy front page
    pub fn photo(name: &str) -> PolicyDocument {
        PolicyDocument::new(name, "image/jpeg", 850 * 1024)
    }

    pub fn scan() -> PolicyDocument {
        PolicyDocument::new("policy.pdf", "application/pdf", 2 * 1024 * 1024)
    }

    /// Exactly at the size limit (accepted)
    pub fn at_limit() -> PolicyDocument {
        PolicyDocument::new("exact.pdf", "application/pdf", MAX_DOCUMENT_BYTES)
    }

    /// One byte over the size limit (rejected)
    pub fn oversized() -> PolicyDocument {
        PolicyDocument::new("huge.jpg", "image/jpeg", MAX_DOCUMENT_BYTES + 1)
    }

    pub fn unsupported() -> PolicyDocument {
        PolicyDocument::new("notes.hwp", "application/x-hwp", 1024)
    }
}

/// Fixture for claimant contact details
pub struct ContactFixtures;

impl ContactFixtures {
    pub fn name() -> String {
        Name().fake()
    }

    /// A mobile number in the 010-XXXX-XXXX form
    pub fn phone() -> String {
        let middle: u32 = (0..10_000).fake();
        let last: u32 = (0..10_000).fake();
        format!("010-{middle:04}-{last:04}")
    }

    pub fn message() -> &'static str {
        "실손보험 청구 후 백내장 수술비 지급이 거절되었습니다. 상담 부탁드립니다."
    }
}

/// Action scripts that complete wizard steps
pub struct DraftFixtures;

impl DraftFixtures {
    /// Completes the incident step for `category`, filling exactly the
    /// fields its rule row requires
    pub fn incident_actions(category: Category) -> Vec<DraftAction> {
        let mut actions = vec![
            DraftAction::SetCategory(category),
            DraftAction::ToggleTreatmentTag(category.treatment_tags()[0].to_string()),
        ];
        for field in category.rule().required {
            actions.push(match field {
                Field::HospitalName => DraftAction::SetHospitalName("서울대학교병원".to_string()),
                Field::Region => DraftAction::SetRegion("서울 마포구".to_string()),
                Field::ClaimStatus => DraftAction::SetClaimStatus(ClaimStatus::NotYetClaimed),
                Field::PersonRole => DraftAction::SetPersonRole(PersonRole::Victim),
                other => panic!("no fixture value for {other:?}"),
            });
        }
        actions
    }

    /// Completes the insurance step; policy details are given by number
    /// when the category asks for them
    pub fn insurance_actions(category: Category) -> Vec<DraftAction> {
        let mut actions = vec![
            DraftAction::SetInsurerCategory(InsurerCategory::NonLife),
            DraftAction::ToggleInsurer("현대해상".to_string()),
            DraftAction::SetAmount("3,000,000".to_string()),
        ];
        if category.requires_policy() {
            actions.push(DraftAction::SetPolicyInsurer("현대해상".to_string()));
            actions.push(DraftAction::SetPolicyNumber("123456789".to_string()));
        }
        actions
    }

    pub fn contact_actions() -> Vec<DraftAction> {
        vec![
            DraftAction::SetName("홍길동".to_string()),
            DraftAction::SetContact("010-1234-5678".to_string()),
            DraftAction::SetMessage(ContactFixtures::message().to_string()),
            DraftAction::SetAvailableTime("평일 오후".to_string()),
        ]
    }

    /// Every step complete for `category`
    pub fn complete_actions(category: Category) -> Vec<DraftAction> {
        let mut actions = Self::incident_actions(category);
        actions.extend(Self::insurance_actions(category));
        actions.extend(Self::contact_actions());
        actions
    }
}

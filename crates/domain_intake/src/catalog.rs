//! Category configuration and option catalogues
//!
//! The per-category behaviour of the incident step lives in one table,
//! [`CATEGORY_RULES`]. Each row names the treatment tags a claimant may pick,
//! the fields the category shows (and therefore requires), and whether the
//! insurance step asks for policy verification. Adding a category is a new
//! enum variant plus a new row; no validator or visibility code changes.
//!
//! | category | tags | shown & required | policy |
//! |---|---|---|---|
//! | 실손 | 9 medical tags | hospital, claim status | yes |
//! | 배상책임/재물 | 4 liability tags | person role, region | no |
//! | 교통사고 | 교통사고 | hospital | yes |
//! | 후유장해 | 2 disability tags | hospital | no |
//! | 진단/수술비/기타 | 5 diagnosis tags | hospital, claim status | no |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::field::Field;

/// Insurance product category (보험상품 유형)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "실손")]
    IndemnityMedical,
    #[serde(rename = "배상책임/재물")]
    LiabilityProperty,
    #[serde(rename = "교통사고")]
    TrafficAccident,
    #[serde(rename = "후유장해")]
    PermanentDisability,
    #[serde(rename = "진단/수술비/기타")]
    DiagnosisSurgery,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::IndemnityMedical,
        Category::LiabilityProperty,
        Category::TrafficAccident,
        Category::PermanentDisability,
        Category::DiagnosisSurgery,
    ];

    /// Looks up this category's row in the rule table
    pub fn rule(self) -> &'static CategoryRule {
        let row = match self {
            Category::IndemnityMedical => 0,
            Category::LiabilityProperty => 1,
            Category::TrafficAccident => 2,
            Category::PermanentDisability => 3,
            Category::DiagnosisSurgery => 4,
        };
        &CATEGORY_RULES[row]
    }

    pub fn label(self) -> &'static str {
        self.rule().label
    }

    pub fn treatment_tags(self) -> &'static [&'static str] {
        self.rule().treatment_tags
    }

    pub fn allows_tag(self, tag: &str) -> bool {
        self.treatment_tags().contains(&tag)
    }

    pub fn requires_policy(self) -> bool {
        self.rule().requires_policy
    }

    /// Finds a category by its form label
    pub fn from_label(label: &str) -> Option<Self> {
        CATEGORY_RULES
            .iter()
            .find(|rule| rule.label == label)
            .map(|rule| rule.category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the category table
#[derive(Debug)]
pub struct CategoryRule {
    pub category: Category,
    pub label: &'static str,
    /// Allowed treatment tags, in display order
    pub treatment_tags: &'static [&'static str],
    /// Incident fields shown for this category beyond category and tags.
    /// Every shown field is required.
    pub required: &'static [Field],
    /// Whether the insurance step asks for the policy sub-record
    pub requires_policy: bool,
}

// The table must list every `Category` variant; `Category::rule` relies on it.
pub static CATEGORY_RULES: [CategoryRule; 5] = [
    CategoryRule {
        category: Category::IndemnityMedical,
        label: "실손",
        treatment_tags: &[
            "백내장",
            "신경성형술",
            "도수/체외충격파",
            "남성질환",
            "여성질환",
            "어린이",
            "무릎치료",
            "고지의무",
            "기타",
        ],
        required: &[Field::HospitalName, Field::ClaimStatus],
        requires_policy: true,
    },
    CategoryRule {
        category: Category::LiabilityProperty,
        label: "배상책임/재물",
        treatment_tags: &["대인배상", "대물배상", "누수", "화재/기타"],
        required: &[Field::PersonRole, Field::Region],
        requires_policy: false,
    },
    CategoryRule {
        category: Category::TrafficAccident,
        label: "교통사고",
        treatment_tags: &["교통사고"],
        required: &[Field::HospitalName],
        requires_policy: true,
    },
    CategoryRule {
        category: Category::PermanentDisability,
        label: "후유장해",
        treatment_tags: &["질병후유장해", "상해후유장해"],
        required: &[Field::HospitalName],
        requires_policy: false,
    },
    CategoryRule {
        category: Category::DiagnosisSurgery,
        label: "진단/수술비/기타",
        treatment_tags: &["암진단", "사망진단", "뇌혈관 진단", "심장질환", "수술비/기타"],
        required: &[Field::HospitalName, Field::ClaimStatus],
        requires_policy: false,
    },
];

/// Where the claim currently stands (청구 상황)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    #[serde(rename = "보험금 청구 전")]
    NotYetClaimed,
    #[serde(rename = "보험금 접수")]
    ClaimFiled,
    #[serde(rename = "현장조사 안내")]
    FieldInvestigation,
    #[serde(rename = "심사 중")]
    UnderReview,
    #[serde(rename = "보험금 거절")]
    Denied,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 5] = [
        ClaimStatus::NotYetClaimed,
        ClaimStatus::ClaimFiled,
        ClaimStatus::FieldInvestigation,
        ClaimStatus::UnderReview,
        ClaimStatus::Denied,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClaimStatus::NotYetClaimed => "보험금 청구 전",
            ClaimStatus::ClaimFiled => "보험금 접수",
            ClaimStatus::FieldInvestigation => "현장조사 안내",
            ClaimStatus::UnderReview => "심사 중",
            ClaimStatus::Denied => "보험금 거절",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Who is filing relative to the incident (본인 구분)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonRole {
    #[serde(rename = "피해자")]
    Victim,
    #[serde(rename = "피보험자(보험 가입자)")]
    Insured,
}

impl PersonRole {
    pub const ALL: [PersonRole; 2] = [PersonRole::Victim, PersonRole::Insured];

    pub fn label(self) -> &'static str {
        match self {
            PersonRole::Victim => "피해자",
            PersonRole::Insured => "피보험자(보험 가입자)",
        }
    }
}

/// Insurer category (보험 종류)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsurerCategory {
    #[serde(rename = "손해보험")]
    NonLife,
    #[serde(rename = "생명보험")]
    Life,
}

impl InsurerCategory {
    pub const ALL: [InsurerCategory; 2] = [InsurerCategory::NonLife, InsurerCategory::Life];

    pub fn label(self) -> &'static str {
        match self {
            InsurerCategory::NonLife => "손해보험",
            InsurerCategory::Life => "생명보험",
        }
    }

    /// Insurers offered once this category is chosen
    pub fn insurers(self) -> &'static [&'static str] {
        match self {
            InsurerCategory::NonLife => NON_LIFE_INSURERS,
            InsurerCategory::Life => LIFE_INSURERS,
        }
    }

    pub fn offers(self, insurer: &str) -> bool {
        self.insurers().contains(&insurer)
    }
}

pub static NON_LIFE_INSURERS: &[&str] = &[
    "현대해상",
    "흥국화재",
    "삼성화재",
    "DB손해보험",
    "롯데손해보험",
    "메리츠화재",
    "KB손해보험",
    "한화손해보험",
    "기타",
];

pub static LIFE_INSURERS: &[&str] = &[
    "교보생명",
    "한화생명",
    "삼성생명",
    "NH농협생명",
    "흥국생명",
    "ABL생명",
    "기타",
];

/// Insurers selectable on the policy sub-record, regardless of category
pub static POLICY_INSURERS: &[&str] = &[
    "현대해상",
    "흥국화재",
    "삼성화재",
    "DB손해보험",
    "롯데손해보험",
    "메리츠화재",
    "KB손해보험",
    "한화손해보험",
    "교보생명",
    "한화생명",
    "삼성생명",
    "NH농협생명",
    "흥국생명",
    "ABL생명",
    "기타",
];

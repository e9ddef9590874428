//! Custom Test Assertions
//!
//! Provides assertion helpers for intake drafts that name the broken rule
//! instead of dumping two structs.

use domain_intake::catalog::POLICY_INSURERS;
use domain_intake::limits::MAX_AMOUNT_DIGITS;
use domain_intake::{Draft, Field, IntakeError, IntakeLimits, ValidationResult};

/// Asserts every structural rule a reduced draft must satisfy
///
/// # Panics
///
/// Panics with the first rule the draft breaks
pub fn assert_draft_invariants(draft: &Draft, limits: &IntakeLimits) {
    let incident = draft.incident();
    match incident.category() {
        Some(category) => {
            for tag in incident.treatment_tags() {
                assert!(
                    category.allows_tag(tag),
                    "Tag {tag:?} is not offered for category {category}"
                );
            }
        }
        None => assert!(
            incident.treatment_tags().is_empty(),
            "Tags selected without a category: {:?}",
            incident.treatment_tags()
        ),
    }

    let insurance = draft.insurance();
    assert!(
        !(insurance.is_amount_unknown() && !insurance.amount().is_empty()),
        "Amount {:?} is set while marked unknown",
        insurance.amount()
    );
    assert!(
        insurance.amount().chars().all(|c| c.is_ascii_digit()),
        "Amount {:?} is not digits only",
        insurance.amount()
    );
    assert!(
        insurance.amount().len() <= MAX_AMOUNT_DIGITS,
        "Amount {:?} has more than {MAX_AMOUNT_DIGITS} digits",
        insurance.amount()
    );
    match insurance.insurer_category() {
        Some(category) => {
            for insurer in insurance.insurers() {
                assert!(category.offers(insurer), "Insurer {insurer:?} not offered by {category:?}");
            }
        }
        None => assert!(insurance.insurers().is_empty(), "Insurers selected without a category"),
    }

    let policy = insurance.policy();
    if policy.is_unknown() {
        assert!(
            policy.insurer().is_empty() && policy.policy_number().is_empty() && policy.documents().is_empty(),
            "Policy details kept while marked unknown: {policy:?}"
        );
    }
    assert!(
        policy.insurer().is_empty() || POLICY_INSURERS.contains(&policy.insurer()),
        "Policy insurer {:?} is not in the catalogue",
        policy.insurer()
    );
    assert!(
        policy.documents().len() <= limits.max_policy_documents,
        "{} documents staged, limit is {}",
        policy.documents().len(),
        limits.max_policy_documents
    );
    for document in policy.documents().iter() {
        assert!(
            document.size_bytes <= limits.max_document_bytes,
            "Document {} exceeds size limit",
            document.file_name
        );
    }

    assert!(
        draft.contact().message_chars() <= limits.message_max_chars,
        "Message is {} chars, limit is {}",
        draft.contact().message_chars(),
        limits.message_max_chars
    );
}

/// Asserts a validation result lists exactly these missing fields
pub fn assert_missing(result: &ValidationResult, expected: &[Field]) {
    assert_eq!(
        result.missing, expected,
        "Unexpected missing fields on step {}",
        result.step
    );
}

/// Asserts an error is a step failure naming `field`
pub fn assert_step_incomplete(error: &IntakeError, field: Field) {
    assert!(
        matches!(error, IntakeError::StepIncomplete { .. }),
        "Expected StepIncomplete, got {error:?}"
    );
    assert!(
        error.missing_fields().contains(&field),
        "Expected {field:?} among missing fields {:?}",
        error.missing_fields()
    );
}

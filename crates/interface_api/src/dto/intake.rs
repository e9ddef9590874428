//! Intake request DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::Money;
use domain_intake::{
    Category, ClaimStatus, InsurerCategory, IntakeLimits, IntakeSubmission, PersonRole,
    PolicyDocument, SubmissionReceipt,
};

use crate::error::ApiError;
use crate::registry::IntakeRecord;

/// A policy document as described by the client; the file itself is not sent
#[derive(Debug, Deserialize, Validate)]
pub struct PolicyDocumentRequest {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    #[validate(length(min = 1, max = 100))]
    pub content_type: String,
    pub size_bytes: u64,
}

/// Body of `POST /api/v1/intake-requests`.
///
/// Only shape is checked here. Step rules, cascades, and document limits
/// are applied afterwards by re-running the intake validators.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIntakeRequest {
    pub category: Option<Category>,
    #[serde(default)]
    #[validate(length(max = 10))]
    pub treatment_types: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub hospital_name: String,
    pub claim_status: Option<ClaimStatus>,
    pub person_role: Option<PersonRole>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub region: String,

    /// Won, digits with optional separators, e.g. `"1,500,000"`
    pub insurance_amount: Option<String>,
    #[serde(default)]
    pub insurance_amount_unknown: bool,
    pub insurer_category: Option<InsurerCategory>,
    #[serde(default)]
    #[validate(length(max = 10))]
    pub insurers: Vec<String>,

    #[serde(default)]
    pub policy_insurer: String,
    #[serde(default)]
    #[validate(length(max = 30))]
    pub policy_number: String,
    #[serde(default)]
    #[validate(nested)]
    pub policy_documents: Vec<PolicyDocumentRequest>,
    #[serde(default)]
    pub policy_unknown: bool,

    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 30))]
    pub contact: String,
    /// Upper bound comes from the configured intake limits
    #[validate(length(min = 1))]
    pub consultation_content: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub available_time: String,
}

impl CreateIntakeRequest {
    /// Checks the bounds that depend on deployment configuration
    pub fn check_limits(&self, limits: &IntakeLimits) -> Result<(), ApiError> {
        let chars = self.consultation_content.chars().count();
        if chars > limits.message_max_chars {
            return Err(ApiError::validation(
                format!(
                    "consultation_content has {chars} characters; at most {} allowed",
                    limits.message_max_chars
                ),
                vec!["consultation_content".to_string()],
            ));
        }
        Ok(())
    }

    /// Converts into the domain payload, staging each described document
    pub fn into_submission(self) -> Result<IntakeSubmission, ApiError> {
        let insurance_amount = self
            .insurance_amount
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| Money::parse_krw(&raw))
            .transpose()?;

        Ok(IntakeSubmission {
            category: self.category,
            treatment_types: self.treatment_types,
            hospital_name: self.hospital_name,
            claim_status: self.claim_status,
            person_role: self.person_role,
            region: self.region,
            insurance_amount,
            insurance_amount_unknown: self.insurance_amount_unknown,
            insurer_category: self.insurer_category,
            insurers: self.insurers,
            policy_insurer: self.policy_insurer,
            policy_number: self.policy_number,
            policy_documents: self
                .policy_documents
                .into_iter()
                .map(|d| PolicyDocument::new(d.file_name, d.content_type, d.size_bytes))
                .collect(),
            policy_unknown: self.policy_unknown,
            name: self.name,
            contact: self.contact,
            consultation_content: self.consultation_content,
            available_time: self.available_time,
        })
    }
}

/// Returned on acceptance
#[derive(Debug, Serialize, Deserialize)]
pub struct IntakeReceiptResponse {
    pub id: Uuid,
    pub request_number: String,
    pub received_at: DateTime<Utc>,
}

impl From<&SubmissionReceipt> for IntakeReceiptResponse {
    fn from(receipt: &SubmissionReceipt) -> Self {
        Self {
            id: *receipt.request_id.as_uuid(),
            request_number: receipt.request_number.clone(),
            received_at: receipt.received_at,
        }
    }
}

/// One row of the request list
#[derive(Debug, Serialize, Deserialize)]
pub struct IntakeSummaryResponse {
    pub id: Uuid,
    pub request_number: String,
    pub category: Option<Category>,
    pub insurers: Vec<String>,
    pub document_count: usize,
    pub received_at: DateTime<Utc>,
}

impl From<&IntakeRecord> for IntakeSummaryResponse {
    fn from(record: &IntakeRecord) -> Self {
        Self {
            id: *record.receipt.request_id.as_uuid(),
            request_number: record.receipt.request_number.clone(),
            category: record.submission.category,
            insurers: record.submission.insurers.clone(),
            document_count: record.submission.document_count(),
            received_at: record.receipt.received_at,
        }
    }
}

/// A stored request in full
#[derive(Debug, Serialize, Deserialize)]
pub struct IntakeDetailResponse {
    pub id: Uuid,
    pub request_number: String,
    pub received_at: DateTime<Utc>,
    pub submitted_by: Option<String>,
    pub request: IntakeSubmission,
}

impl From<IntakeRecord> for IntakeDetailResponse {
    fn from(record: IntakeRecord) -> Self {
        Self {
            id: *record.receipt.request_id.as_uuid(),
            request_number: record.receipt.request_number,
            received_at: record.receipt.received_at,
            submitted_by: record.submitted_by,
            request: record.submission,
        }
    }
}

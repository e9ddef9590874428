//! In-memory store of accepted intake requests
//!
//! The service keeps accepted requests for the lifetime of the process; it is
//! the [`SubmissionPort`] adapter the HTTP handlers submit through.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, IntakeRequestId, OperationMetadata, PortError,
};
use domain_intake::{IntakeSubmission, SubmissionPort, SubmissionReceipt};

/// An accepted request
#[derive(Debug, Clone)]
pub struct IntakeRecord {
    pub receipt: SubmissionReceipt,
    pub submission: IntakeSubmission,
    /// JWT subject of the claimant who filed it
    pub submitted_by: Option<String>,
}

#[derive(Debug, Default)]
pub struct IntakeRegistry {
    records: RwLock<HashMap<IntakeRequestId, IntakeRecord>>,
}

impl IntakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: IntakeRequestId) -> Result<IntakeRecord, PortError> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("IntakeRequest", id))
    }

    /// Requests filed by `subject`, or all requests when `None`; newest first
    pub async fn list(&self, subject: Option<&str>) -> Vec<IntakeRecord> {
        let records = self.records.read().await;
        let mut matching: Vec<_> = records
            .values()
            .filter(|r| subject.is_none() || r.submitted_by.as_deref() == subject)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.receipt.received_at.cmp(&a.receipt.received_at));
        matching
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl DomainPort for IntakeRegistry {}

#[async_trait]
impl HealthCheckable for IntakeRegistry {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            message: Some(format!("{} requests held", self.len().await)),
            ..HealthCheckResult::healthy("intake-registry")
        }
    }
}

#[async_trait]
impl SubmissionPort for IntakeRegistry {
    async fn submit(
        &self,
        submission: IntakeSubmission,
        metadata: Option<OperationMetadata>,
    ) -> Result<SubmissionReceipt, PortError> {
        let receipt = SubmissionReceipt::issue(IntakeRequestId::new_v7());
        let submitted_by = metadata.and_then(|m| m.initiated_by);

        info!(
            request_number = %receipt.request_number,
            category = ?submission.category,
            documents = submission.document_count(),
            "Intake request accepted"
        );

        self.records.write().await.insert(
            receipt.request_id,
            IntakeRecord {
                receipt: receipt.clone(),
                submission,
                submitted_by,
            },
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_then_get() {
        let registry = IntakeRegistry::new();
        let metadata = OperationMetadata::default().initiated_by("kakao:1");

        let receipt = registry
            .submit(IntakeSubmission::default(), Some(metadata))
            .await
            .unwrap();
        let record = registry.get(receipt.request_id).await.unwrap();

        assert_eq!(record.receipt, receipt);
        assert_eq!(record.submitted_by.as_deref(), Some("kakao:1"));
    }

    #[tokio::test]
    async fn test_list_filters_by_subject() {
        let registry = IntakeRegistry::new();
        for subject in ["a", "b", "a"] {
            let metadata = OperationMetadata::default().initiated_by(subject);
            registry.submit(IntakeSubmission::default(), Some(metadata)).await.unwrap();
        }

        assert_eq!(registry.list(Some("a")).await.len(), 2);
        assert_eq!(registry.list(None).await.len(), 3);
        assert!(registry.get(IntakeRequestId::new()).await.unwrap_err().is_not_found());
    }
}

//! Policy document staging
//!
//! Photos or scans of the insurance policy are held here until the request
//! is submitted. Nothing is uploaded: the staging list only carries file
//! metadata and is handed to the submission collaborator as part of the
//! payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::AttachmentId;

use crate::error::AttachmentError;
use crate::limits::IntakeLimits;

/// A file picked by the claimant (camera capture or gallery)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    pub id: AttachmentId,
    pub file_name: String,
    /// MIME type reported by the picker
    pub content_type: String,
    pub size_bytes: u64,
    pub staged_at: DateTime<Utc>,
}

impl PolicyDocument {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: AttachmentId::new_v7(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
            staged_at: Utc::now(),
        }
    }

    /// Images get a thumbnail, everything else a file icon
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type == "application/pdf"
    }

    /// Size as shown under the thumbnail, e.g. `512.0 KB`
    pub fn display_size(&self) -> String {
        format!("{:.1} KB", self.size_bytes as f64 / 1024.0)
    }

    fn check(&self, limits: &IntakeLimits) -> Result<(), AttachmentError> {
        if !self.is_image() && !self.is_pdf() {
            return Err(AttachmentError::UnsupportedType(self.content_type.clone()));
        }
        if self.size_bytes > limits.max_document_bytes {
            return Err(AttachmentError::SizeExceeded {
                size: self.size_bytes,
                limit: limits.max_document_bytes,
            });
        }
        Ok(())
    }
}

/// Ordered, bounded list of staged policy documents.
///
/// Every operation either succeeds or leaves the list untouched, so the count
/// never leaves `0..=limits.max_policy_documents`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentStaging {
    documents: Vec<PolicyDocument>,
}

impl AttachmentStaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a document after the size, type, and count checks
    pub fn add(&mut self, document: PolicyDocument, limits: &IntakeLimits) -> Result<(), AttachmentError> {
        document.check(limits)?;
        if self.documents.len() >= limits.max_policy_documents {
            return Err(AttachmentError::CountExceeded {
                limit: limits.max_policy_documents,
            });
        }
        self.documents.push(document);
        Ok(())
    }

    /// Swaps the document at `index`, keeping its position
    pub fn replace(
        &mut self,
        index: usize,
        document: PolicyDocument,
        limits: &IntakeLimits,
    ) -> Result<PolicyDocument, AttachmentError> {
        if index >= self.documents.len() {
            return Err(AttachmentError::NotFound(index));
        }
        document.check(limits)?;
        Ok(std::mem::replace(&mut self.documents[index], document))
    }

    /// Removes the document at `index`; out-of-range is a no-op
    pub fn remove(&mut self, index: usize) -> Option<PolicyDocument> {
        if index < self.documents.len() {
            Some(self.documents.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.documents.clear();
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Whether the upload control should still be offered
    pub fn has_room(&self, limits: &IntakeLimits) -> bool {
        self.documents.len() < limits.max_policy_documents
    }

    pub fn documents(&self) -> &[PolicyDocument] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolicyDocument> {
        self.documents.iter()
    }
}

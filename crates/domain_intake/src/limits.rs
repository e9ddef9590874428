//! Intake limits

use serde::{Deserialize, Serialize};

/// Maximum number of policy documents per request
pub const MAX_POLICY_DOCUMENTS: usize = 3;

/// Maximum size of a single policy document (10 MiB)
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Maximum number of digits in the claimed amount; 15 digits of won always
/// fit the decimal the amount is submitted as
pub const MAX_AMOUNT_DIGITS: usize = 15;

/// Maximum length of the consultation message, in characters
pub const MESSAGE_MAX_CHARS: usize = 500;

/// Bounds applied at entry time by the draft reducer.
///
/// Defaults match the product; deployments may override them through the
/// `API_INTAKE__*` environment variables read by the HTTP service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeLimits {
    pub max_policy_documents: usize,
    pub max_document_bytes: u64,
    pub message_max_chars: usize,
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            max_policy_documents: MAX_POLICY_DOCUMENTS,
            max_document_bytes: MAX_DOCUMENT_BYTES,
            message_max_chars: MESSAGE_MAX_CHARS,
        }
    }
}

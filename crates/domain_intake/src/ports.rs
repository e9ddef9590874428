//! Collaborator ports for the intake wizard
//!
//! The wizard owns its draft and nothing else. Where the request goes, what
//! screen comes next, and who is signed in are answered by adapters behind
//! these traits:
//!
//! - [`SubmissionPort`] accepts the final payload and issues a receipt
//! - [`NavigationPort`] leaves the wizard or sends the claimant elsewhere
//! - [`SessionPort`] reports the signed-in session, read-only
//!
//! In-memory adapters for tests and demos live in [`mock`] behind the
//! `mock` feature.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use core_kernel::{DomainPort, HealthCheckable, IntakeRequestId, OperationMetadata, PortError, SessionId};

use crate::submission::{IntakeSubmission, SubmissionReceipt};

/// Receives completed intake requests
#[async_trait]
pub trait SubmissionPort: DomainPort + HealthCheckable {
    /// Accepts a request and returns its receipt.
    ///
    /// # Errors
    ///
    /// Returns `PortError::Validation` when the receiver rejects the payload
    /// and a transient error when it cannot be reached.
    async fn submit(
        &self,
        submission: IntakeSubmission,
        metadata: Option<OperationMetadata>,
    ) -> Result<SubmissionReceipt, PortError>;
}

/// Why the wizard is being left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ExitReason {
    /// Back pressed on the first step
    Cancelled,
    /// The request was accepted; the host shows the request list
    Submitted { request_id: IntakeRequestId },
}

/// Screens outside the wizard the claimant can be sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    Login,
}

/// The host shell that owns routing
#[async_trait]
pub trait NavigationPort: DomainPort {
    async fn exit(&self, reason: ExitReason);

    async fn redirect(&self, target: NavigationTarget);
}

/// A signed-in claimant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: SessionId,
    pub token: String,
}

/// Read-only view of the authentication state
#[async_trait]
pub trait SessionPort: DomainPort {
    async fn current_session(&self) -> Option<Session>;
}

/// Mock adapters for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// Key the session store keeps the bearer token under
    pub const AUTH_TOKEN_KEY: &str = "auth_token";

    /// Records every accepted submission; can be switched to fail
    #[derive(Debug, Default)]
    pub struct MockSubmissionPort {
        received: Arc<RwLock<Vec<IntakeSubmission>>>,
        failing: Arc<RwLock<bool>>,
    }

    impl MockSubmissionPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes subsequent submissions fail with `ServiceUnavailable`
        pub async fn set_failing(&self, failing: bool) {
            *self.failing.write().await = failing;
        }

        pub async fn received(&self) -> Vec<IntakeSubmission> {
            self.received.read().await.clone()
        }
    }

    impl DomainPort for MockSubmissionPort {}

    #[async_trait]
    impl HealthCheckable for MockSubmissionPort {
        async fn health_check(&self) -> HealthCheckResult {
            let status = if *self.failing.read().await {
                AdapterHealth::Unhealthy
            } else {
                AdapterHealth::Healthy
            };
            HealthCheckResult {
                status,
                ..HealthCheckResult::healthy("mock-submission-port")
            }
        }
    }

    #[async_trait]
    impl SubmissionPort for MockSubmissionPort {
        async fn submit(
            &self,
            submission: IntakeSubmission,
            _metadata: Option<OperationMetadata>,
        ) -> Result<SubmissionReceipt, PortError> {
            if *self.failing.read().await {
                return Err(PortError::ServiceUnavailable {
                    service: "mock-submission-port".to_string(),
                });
            }
            self.received.write().await.push(submission);
            Ok(SubmissionReceipt::issue(IntakeRequestId::new_v7()))
        }
    }

    /// Something the wizard asked the host to do
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum NavigationEvent {
        Exit(ExitReason),
        Redirect(NavigationTarget),
    }

    /// Navigation host that only remembers what it was told
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        events: Arc<RwLock<Vec<NavigationEvent>>>,
    }

    impl RecordingNavigator {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn events(&self) -> Vec<NavigationEvent> {
            self.events.read().await.clone()
        }

        pub async fn last(&self) -> Option<NavigationEvent> {
            self.events.read().await.last().copied()
        }
    }

    impl DomainPort for RecordingNavigator {}

    #[async_trait]
    impl NavigationPort for RecordingNavigator {
        async fn exit(&self, reason: ExitReason) {
            self.events.write().await.push(NavigationEvent::Exit(reason));
        }

        async fn redirect(&self, target: NavigationTarget) {
            self.events.write().await.push(NavigationEvent::Redirect(target));
        }
    }

    /// Key-value store standing in for the browser's local storage.
    ///
    /// A session exists while a non-empty `auth_token` is stored.
    #[derive(Debug, Default)]
    pub struct KeyValueSessionStore {
        entries: Arc<RwLock<HashMap<String, String>>>,
        session_id: SessionId,
    }

    impl KeyValueSessionStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// A store that already holds a token
        pub fn signed_in(token: impl Into<String>) -> Self {
            let mut entries = HashMap::new();
            entries.insert(AUTH_TOKEN_KEY.to_string(), token.into());
            Self {
                entries: Arc::new(RwLock::new(entries)),
                session_id: SessionId::new(),
            }
        }

        pub async fn set(&self, key: impl Into<String>, value: impl Into<String>) {
            self.entries.write().await.insert(key.into(), value.into());
        }

        pub async fn get(&self, key: &str) -> Option<String> {
            self.entries.read().await.get(key).cloned()
        }

        pub async fn remove(&self, key: &str) -> Option<String> {
            self.entries.write().await.remove(key)
        }
    }

    impl DomainPort for KeyValueSessionStore {}

    #[async_trait]
    impl SessionPort for KeyValueSessionStore {
        async fn current_session(&self) -> Option<Session> {
            let token = self.get(AUTH_TOKEN_KEY).await?;
            if token.trim().is_empty() {
                return None;
            }
            Some(Session {
                session_id: self.session_id,
                token,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;

    #[tokio::test]
    async fn test_mock_submission_records_payload() {
        let port = MockSubmissionPort::new();
        let receipt = port.submit(IntakeSubmission::default(), None).await.unwrap();

        assert!(receipt.request_number.starts_with("REQ-"));
        assert_eq!(port.received().await.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_submission_can_fail() {
        let port = MockSubmissionPort::new();
        port.set_failing(true).await;

        let result = port.submit(IntakeSubmission::default(), None).await;

        assert!(result.is_err());
        assert!(port.received().await.is_empty());
        assert_eq!(port.health_check().await.status, core_kernel::AdapterHealth::Unhealthy);
    }

    #[tokio::test]
    async fn test_session_requires_token() {
        let store = KeyValueSessionStore::new();
        assert!(store.current_session().await.is_none());

        store.set(AUTH_TOKEN_KEY, "  ").await;
        assert!(store.current_session().await.is_none());

        store.set(AUTH_TOKEN_KEY, "jwt-token").await;
        let session = store.current_session().await.unwrap();
        assert_eq!(session.token, "jwt-token");

        store.remove(AUTH_TOKEN_KEY).await;
        assert!(store.current_session().await.is_none());
    }

    #[tokio::test]
    async fn test_navigator_records_in_order() {
        let navigator = RecordingNavigator::new();
        navigator.redirect(NavigationTarget::Login).await;
        navigator.exit(ExitReason::Cancelled).await;

        assert_eq!(
            navigator.events().await,
            vec![
                NavigationEvent::Redirect(NavigationTarget::Login),
                NavigationEvent::Exit(ExitReason::Cancelled),
            ]
        );
    }
}

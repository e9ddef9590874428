//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! intake test suite.
//!
//! # Modules
//!
//! - `fixtures`: Action scripts, documents, and contact data
//! - `builders`: Draft builder that replays actions through the reducer
//! - `assertions`: Draft invariant and validation assertions
//! - `generators`: Property-based action generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;

pub use domain_intake::ports::mock::{
    KeyValueSessionStore, MockSubmissionPort, NavigationEvent, RecordingNavigator, AUTH_TOKEN_KEY,
};

//! Core Kernel - Foundational types shared by the intake service
//!
//! This crate provides the building blocks used by the intake domain and the
//! HTTP layer:
//! - Won-denominated money with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Port (collaborator) error and health types

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{IntakeRequestId, AttachmentId, SessionId};
pub use ports::{
    PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable,
    OperationMetadata,
};

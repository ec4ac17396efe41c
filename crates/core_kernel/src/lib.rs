//! Core Kernel - Foundational types for the health insurance record model
//!
//! This crate provides the building blocks shared by the record model:
//! - Strongly-typed identifiers matching the schema's integer identity columns
//! - Reference number formats (claim numbers)
//! - Common error types

pub mod identifiers;
pub mod reference;
pub mod error;

pub use identifiers::{
    MemberId, PlanId, PolicyId, PolicyMemberId, ProviderId, ClaimId, PaymentId,
};
pub use reference::ClaimNumber;
pub use error::CoreError;

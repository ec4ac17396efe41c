//! Health Insurance Record Model
//!
//! This crate defines the domain entities of the Australian health insurance
//! simulation and their projections into persistence rows:
//!
//! - **Member**: a policyholder or covered person
//! - **CoveragePlan**: a hospital/extras/combined product
//! - **Policy**: a contract between a primary member and a plan
//! - **PolicyMember**: a person covered under a policy
//! - **Provider**: a healthcare provider
//! - **Claim**: a claim for a service, with Medicare/insurer/gap amounts
//! - **PremiumPayment**: a premium payment against a policy
//!
//! Entities are immutable after construction. Each implements [`TableRecord`],
//! whose `to_row` operation is a pure projection into a typed row struct; the
//! row serializes field-for-field to the persistence schema's column names
//! (e.g. `FirstName`, `MedicareNumber`, `LHCLoadingPercentage`).
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_records::{Address, Gender, Member, State, TableRecord};
//!
//! let member = Member::new(
//!     "John",
//!     "Smith",
//!     NaiveDate::from_ymd_opt(1980, 1, 15).unwrap(),
//!     Gender::Male,
//!     Address::new("123 Main St", "Sydney", State::NSW, "2000"),
//! )
//! .with_member_number("MEM001");
//!
//! let row = member.to_row().unwrap();
//! assert_eq!(row.member_number.as_deref(), Some("MEM001"));
//! assert_eq!(row.date_of_birth, NaiveDate::from_ymd_opt(1980, 1, 15).unwrap());
//! ```

pub mod record;
pub mod address;
pub mod member;
pub mod plan;
pub mod policy;
pub mod provider;
pub mod claim;
pub mod payment;
pub mod validation;
pub mod error;

pub use record::TableRecord;
pub use address::Address;
pub use member::{Gender, Member, MemberRow, RebateTier, State};
pub use plan::{
    CoverageDetails, CoveragePlan, CoveragePlanRow, HospitalTier, PlanType, WaitingPeriods,
};
pub use policy::{
    CoverageType, PaymentMethod, Policy, PolicyMember, PolicyMemberRow, PolicyRow,
    PolicyStatus, PremiumFrequency, Relationship,
};
pub use provider::{Provider, ProviderRow, ProviderType};
pub use claim::{Claim, ClaimRow, ClaimStatus, ClaimType};
pub use payment::{PaymentStatus, PremiumPayment, PremiumPaymentRow};
pub use validation::{RecordValidator, ValidationResult};
pub use error::RecordError;

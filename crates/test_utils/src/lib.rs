//! Shared test utilities for the record model test suite
//!
//! Provides deterministic fixtures, data builders, proptest generators, and
//! row-shape assertion helpers used across the workspace's tests.

pub mod fixtures;
pub mod builders;
pub mod generators;
pub mod assertions;
pub mod logging;

pub use fixtures::{
    ClaimFixtures, DateFixtures, MemberFixtures, PaymentFixtures, PlanFixtures,
    PolicyFixtures, ProviderFixtures,
};
pub use builders::{TestClaimBuilder, TestMemberBuilder, TestPaymentBuilder};
pub use assertions::{assert_row_columns, assert_rows_equal};
pub use logging::init_test_logging;

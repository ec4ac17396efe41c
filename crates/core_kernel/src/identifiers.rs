//! Strongly-typed identifiers for domain entities
//!
//! The persistence schema keys every table on an integer identity column.
//! Newtype wrappers around `i64` keep those keys from being mixed up across
//! entities while staying a plain value on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a raw database key
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the underlying database key
            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(MemberId);
define_id!(PlanId);
define_id!(PolicyId);
define_id!(PolicyMemberId);
define_id!(ProviderId);
define_id!(ClaimId);
define_id!(PaymentId);

//! Reference number formats
//!
//! Claims carry a human-readable reference in the form `CL-YYYYMMDD-NNNNN`:
//! the submission date followed by a five-digit sequence. The format is part
//! of the persistence contract, so parsing and display are strict.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

const CLAIM_PREFIX: &str = "CL";
const SEQUENCE_MAX: u32 = 99_999;

/// A claim reference number in the canonical `CL-YYYYMMDD-NNNNN` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimNumber {
    date: NaiveDate,
    sequence: u32,
}

impl ClaimNumber {
    /// Creates a claim number from a date and a sequence in `0..=99999`
    pub fn new(date: NaiveDate, sequence: u32) -> Result<Self, CoreError> {
        if sequence > SEQUENCE_MAX {
            return Err(CoreError::invalid_reference(format!(
                "claim sequence {} exceeds {}",
                sequence, SEQUENCE_MAX
            )));
        }
        Ok(Self { date, sequence })
    }

    /// Returns the date component
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the sequence component
    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for ClaimNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{:05}",
            CLAIM_PREFIX,
            self.date.format("%Y%m%d"),
            self.sequence
        )
    }
}

impl FromStr for ClaimNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let prefix = parts.next().unwrap_or_default();
        let date_part = parts.next().unwrap_or_default();
        let seq_part = parts.next().unwrap_or_default();

        if prefix != CLAIM_PREFIX {
            return Err(CoreError::invalid_reference(format!(
                "claim number {:?} does not start with {}-",
                s, CLAIM_PREFIX
            )));
        }
        if date_part.len() != 8 {
            return Err(CoreError::invalid_reference(format!(
                "claim number {:?} has a malformed date component",
                s
            )));
        }
        let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").map_err(|_| {
            CoreError::invalid_reference(format!(
                "claim number {:?} has an invalid calendar date",
                s
            ))
        })?;
        if seq_part.len() != 5 || !seq_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::invalid_reference(format!(
                "claim number {:?} has a malformed sequence component",
                s
            )));
        }
        let sequence: u32 = seq_part
            .parse()
            .map_err(|_| CoreError::invalid_reference(format!("claim number {:?}", s)))?;

        Self::new(date, sequence)
    }
}

impl TryFrom<String> for ClaimNumber {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClaimNumber> for String {
    fn from(n: ClaimNumber) -> String {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_canonical() {
        let n = ClaimNumber::new(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(), 42).unwrap();
        assert_eq!(n.to_string(), "CL-20240307-00042");
    }

    #[test]
    fn test_parse_roundtrip() {
        let original: ClaimNumber = "CL-20240315-00001".parse().unwrap();
        assert_eq!(original.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(original.sequence(), 1);
        let reparsed: ClaimNumber = original.to_string().parse().unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_rejects_wrong_prefix() {
        assert!("CLM-20240315-00001".parse::<ClaimNumber>().is_err());
        assert!("20240315-00001".parse::<ClaimNumber>().is_err());
    }

    #[test]
    fn test_rejects_invalid_calendar_date() {
        assert!("CL-20241301-00001".parse::<ClaimNumber>().is_err());
        assert!("CL-2024130-00001".parse::<ClaimNumber>().is_err());
    }

    #[test]
    fn test_rejects_malformed_sequence() {
        assert!("CL-20240315-001".parse::<ClaimNumber>().is_err());
        assert!("CL-20240315-0000a".parse::<ClaimNumber>().is_err());
        assert!("CL-20240315-000001".parse::<ClaimNumber>().is_err());
    }

    #[test]
    fn test_sequence_out_of_range() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(ClaimNumber::new(date, 100_000).is_err());
        assert!(ClaimNumber::new(date, 99_999).is_ok());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn claim_number_display_parse_roundtrip(
            days in 0i64..20_000i64,
            sequence in 0u32..=99_999u32
        ) {
            let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
                + chrono::Duration::days(days);
            let number = ClaimNumber::new(date, sequence).unwrap();
            let parsed: ClaimNumber = number.to_string().parse().unwrap();
            prop_assert_eq!(number, parsed);
        }
    }
}

//! Postal address value object
//!
//! Members and providers both carry a street address that the schema stores
//! as flat `AddressLine1`/`AddressLine2`/`City`/`State`/`PostCode`/`Country`
//! columns. The address is held as one value object here and flattened by
//! each entity's row projection.

use serde::{Deserialize, Serialize};

use crate::member::State;

/// A postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: State,
    pub post_code: String,
    pub country: String,
}

impl Address {
    /// Creates a new Australian address
    pub fn new(
        line1: impl Into<String>,
        city: impl Into<String>,
        state: State,
        post_code: impl Into<String>,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: None,
            city: city.into(),
            state,
            post_code: post_code.into(),
            country: "Australia".to_string(),
        }
    }

    /// Sets the second address line
    pub fn with_line2(mut self, line2: impl Into<String>) -> Self {
        self.line2 = Some(line2.into());
        self
    }

    /// Overrides the country (defaults to Australia)
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Formats the address for display
    pub fn format(&self) -> String {
        let mut lines = vec![self.line1.clone()];
        if let Some(l2) = &self.line2 {
            lines.push(l2.clone());
        }
        lines.push(format!("{} {} {}", self.city, self.state, self.post_code));
        lines.push(self.country.clone());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_defaults_to_australia() {
        let address = Address::new("123 Main St", "Sydney", State::NSW, "2000");
        assert_eq!(address.country, "Australia");
        assert!(address.line2.is_none());
    }

    #[test]
    fn test_address_format() {
        let address = Address::new("1 Collins St", "Melbourne", State::VIC, "3000")
            .with_line2("Level 4");
        assert_eq!(
            address.format(),
            "1 Collins St\nLevel 4\nMelbourne VIC 3000\nAustralia"
        );
    }
}

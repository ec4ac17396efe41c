//! Member entity
//!
//! A member is a policyholder or covered person. The field set mirrors the
//! `Members` table: identity and demographic details, contact details, the
//! Medicare number, and the Lifetime Health Cover / rebate attributes used
//! by the billing side of the system.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::address::Address;
use crate::error::RecordError;
use crate::record::TableRecord;

/// Australian states and territories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    NSW,
    VIC,
    QLD,
    WA,
    SA,
    TAS,
    ACT,
    NT,
}

impl State {
    /// Returns the full state or territory name
    pub fn full_name(&self) -> &'static str {
        match self {
            State::NSW => "New South Wales",
            State::VIC => "Victoria",
            State::QLD => "Queensland",
            State::WA => "Western Australia",
            State::SA => "South Australia",
            State::TAS => "Tasmania",
            State::ACT => "Australian Capital Territory",
            State::NT => "Northern Territory",
        }
    }

    /// Returns the abbreviation used by the schema
    pub fn code(&self) -> &'static str {
        match self {
            State::NSW => "NSW",
            State::VIC => "VIC",
            State::QLD => "QLD",
            State::WA => "WA",
            State::SA => "SA",
            State::TAS => "TAS",
            State::ACT => "ACT",
            State::NT => "NT",
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Gender as recorded on the membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Private Health Insurance rebate income tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebateTier {
    /// Below the base income threshold
    Base,
    Tier1,
    Tier2,
    /// Above the top threshold; no rebate applies
    Tier3,
}

impl std::fmt::Display for RebateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RebateTier::Base => "Base",
            RebateTier::Tier1 => "Tier1",
            RebateTier::Tier2 => "Tier2",
            RebateTier::Tier3 => "Tier3",
        };
        write!(f, "{}", s)
    }
}

/// A member (policyholder or covered person)
///
/// Immutable after construction: required fields go through [`Member::new`],
/// optional fields through the `with_*` constructors. The row projection is
/// [`Member::to_row`] via [`TableRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Member {
    /// Membership number, assigned by the loader (e.g. "MEM001")
    pub member_number: Option<String>,
    /// Salutation (Mr, Mrs, Ms, Dr, ...)
    pub title: Option<String>,
    /// Legal first name
    pub first_name: String,
    /// Legal last name / surname
    pub last_name: String,
    /// Date of birth; drives LHC loading and age-based rebates elsewhere
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    #[validate(email)]
    pub email: Option<String>,
    pub mobile_phone: Option<String>,
    pub home_phone: Option<String>,
    /// Residential address
    pub address: Address,
    /// 10-digit Medicare card number
    pub medicare_number: Option<String>,
    /// Lifetime Health Cover loading as a percentage (0 for members who
    /// joined before the base age)
    pub lhc_loading_percentage: Decimal,
    /// PHI rebate income tier
    pub phi_rebate_tier: RebateTier,
    /// Date the member joined the fund
    pub join_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl Member {
    /// Creates a member with the required identity fields
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        gender: Gender,
        address: Address,
    ) -> Self {
        Self {
            member_number: None,
            title: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            gender,
            email: None,
            mobile_phone: None,
            home_phone: None,
            address,
            medicare_number: None,
            lhc_loading_percentage: Decimal::ZERO,
            phi_rebate_tier: RebateTier::Base,
            join_date: None,
            is_active: true,
        }
    }

    /// Sets the membership number
    pub fn with_member_number(mut self, number: impl Into<String>) -> Self {
        self.member_number = Some(number.into());
        self
    }

    /// Sets the salutation
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the mobile phone number
    pub fn with_mobile_phone(mut self, phone: impl Into<String>) -> Self {
        self.mobile_phone = Some(phone.into());
        self
    }

    /// Sets the home phone number
    pub fn with_home_phone(mut self, phone: impl Into<String>) -> Self {
        self.home_phone = Some(phone.into());
        self
    }

    /// Sets the Medicare number
    pub fn with_medicare_number(mut self, number: impl Into<String>) -> Self {
        self.medicare_number = Some(number.into());
        self
    }

    /// Sets the LHC loading percentage
    pub fn with_lhc_loading(mut self, percentage: Decimal) -> Self {
        self.lhc_loading_percentage = percentage;
        self
    }

    /// Sets the PHI rebate tier
    pub fn with_rebate_tier(mut self, tier: RebateTier) -> Self {
        self.phi_rebate_tier = tier;
        self
    }

    /// Sets the join date
    pub fn with_join_date(mut self, date: NaiveDate) -> Self {
        self.join_date = Some(date);
        self
    }

    /// Marks the member inactive
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Returns the full name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the member's age in whole years at the given date
    pub fn age_at(&self, date: NaiveDate) -> u32 {
        let mut age = date.year() - self.date_of_birth.year();
        if date.ordinal() < self.date_of_birth.ordinal() {
            age -= 1;
        }
        age.max(0) as u32
    }
}

/// Row for the `Members` table
///
/// Column names are carried by serde renames; see [`Member::COLUMNS`] for
/// the full ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemberRow {
    pub member_number: Option<String>,
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub email: Option<String>,
    pub mobile_phone: Option<String>,
    pub home_phone: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: State,
    pub post_code: String,
    pub country: String,
    pub medicare_number: Option<String>,
    #[serde(rename = "LHCLoadingPercentage")]
    pub lhc_loading_percentage: Decimal,
    #[serde(rename = "PHIRebateTier")]
    pub phi_rebate_tier: RebateTier,
    pub join_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl TableRecord for Member {
    type Row = MemberRow;

    const TABLE: &'static str = "Members";

    const COLUMNS: &'static [&'static str] = &[
        "MemberNumber",
        "Title",
        "FirstName",
        "LastName",
        "DateOfBirth",
        "Gender",
        "Email",
        "MobilePhone",
        "HomePhone",
        "AddressLine1",
        "AddressLine2",
        "City",
        "State",
        "PostCode",
        "Country",
        "MedicareNumber",
        "LHCLoadingPercentage",
        "PHIRebateTier",
        "JoinDate",
        "IsActive",
    ];

    fn to_row(&self) -> Result<MemberRow, RecordError> {
        Ok(MemberRow {
            member_number: self.member_number.clone(),
            title: self.title.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            email: self.email.clone(),
            mobile_phone: self.mobile_phone.clone(),
            home_phone: self.home_phone.clone(),
            address_line1: self.address.line1.clone(),
            address_line2: self.address.line2.clone(),
            city: self.address.city.clone(),
            state: self.address.state,
            post_code: self.address.post_code.clone(),
            country: self.address.country.clone(),
            medicare_number: self.medicare_number.clone(),
            lhc_loading_percentage: self.lhc_loading_percentage,
            phi_rebate_tier: self.phi_rebate_tier,
            join_date: self.join_date,
            is_active: self.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_member() -> Member {
        Member::new(
            "John",
            "Smith",
            NaiveDate::from_ymd_opt(1980, 1, 15).unwrap(),
            Gender::Male,
            Address::new("123 Main St", "Sydney", State::NSW, "2000"),
        )
        .with_member_number("MEM001")
        .with_title("Mr")
        .with_email("john.smith@example.com")
        .with_mobile_phone("0412345678")
        .with_medicare_number("2951836514")
        .with_join_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
    }

    #[test]
    fn test_member_defaults() {
        let member = Member::new(
            "Jane",
            "Doe",
            NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
            Gender::Female,
            Address::new("5 High St", "Brisbane", State::QLD, "4000"),
        );
        assert_eq!(member.address.country, "Australia");
        assert_eq!(member.lhc_loading_percentage, Decimal::ZERO);
        assert_eq!(member.phi_rebate_tier, RebateTier::Base);
        assert!(member.is_active);
        assert!(member.join_date.is_none());
    }

    #[test]
    fn test_member_row_fields() {
        let row = sample_member().to_row().unwrap();
        assert_eq!(row.member_number.as_deref(), Some("MEM001"));
        assert_eq!(row.first_name, "John");
        assert_eq!(row.last_name, "Smith");
        assert_eq!(row.date_of_birth, NaiveDate::from_ymd_opt(1980, 1, 15).unwrap());
        assert_eq!(row.state, State::NSW);
        assert_eq!(row.post_code, "2000");
        assert_eq!(row.country, "Australia");
        assert!(row.is_active);
    }

    #[test]
    fn test_member_row_serializes_to_schema_columns() {
        let value = serde_json::to_value(sample_member().to_row().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Member::COLUMNS.len());
        for column in Member::COLUMNS {
            assert!(object.contains_key(*column), "missing column {}", column);
        }
        assert_eq!(object["Gender"], serde_json::json!("Male"));
        assert_eq!(object["State"], serde_json::json!("NSW"));
        assert_eq!(object["PHIRebateTier"], serde_json::json!("Base"));
    }

    #[test]
    fn test_to_row_is_idempotent() {
        let member = sample_member();
        assert_eq!(member.to_row().unwrap(), member.to_row().unwrap());
    }

    #[test]
    fn test_age_at() {
        let member = sample_member();
        assert_eq!(member.age_at(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()), 43);
        assert_eq!(member.age_at(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()), 44);
    }

    #[test]
    fn test_lhc_loading_survives_projection() {
        let member = sample_member().with_lhc_loading(dec!(10.0));
        let row = member.to_row().unwrap();
        assert_eq!(row.lhc_loading_percentage, dec!(10.0));
    }

    #[test]
    fn test_email_validation() {
        assert!(sample_member().validate().is_ok());
        let bad = sample_member().with_email("not-an-email");
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_state_codes() {
        assert_eq!(State::NSW.full_name(), "New South Wales");
        assert_eq!(State::NT.to_string(), "NT");
    }
}

//! Healthcare provider entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::address::Address;
use crate::error::RecordError;
use crate::record::TableRecord;

/// Provider categories recognised by the fund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderType {
    Hospital,
    #[serde(rename = "General Practitioner")]
    GeneralPractitioner,
    Specialist,
    Dentist,
    Optometrist,
    Physiotherapist,
    Chiropractor,
    Psychologist,
    Podiatrist,
    Acupuncturist,
    Naturopath,
    #[serde(rename = "Massage Therapist")]
    MassageTherapist,
}

/// A healthcare provider
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Provider {
    /// Provider number as registered with the fund
    pub provider_number: String,
    pub provider_name: String,
    pub provider_type: ProviderType,
    pub address: Address,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    /// Whether the provider participates in the fund's preferred network
    pub is_preferred_provider: bool,
    pub agreement_start_date: Option<NaiveDate>,
    pub agreement_end_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl Provider {
    /// Creates an active provider
    pub fn new(
        provider_number: impl Into<String>,
        provider_name: impl Into<String>,
        provider_type: ProviderType,
        address: Address,
    ) -> Self {
        Self {
            provider_number: provider_number.into(),
            provider_name: provider_name.into(),
            provider_type,
            address,
            phone: None,
            email: None,
            is_preferred_provider: false,
            agreement_start_date: None,
            agreement_end_date: None,
            is_active: true,
        }
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Marks the provider as preferred, with the agreement period
    pub fn preferred(mut self, from: NaiveDate, to: Option<NaiveDate>) -> Self {
        self.is_preferred_provider = true;
        self.agreement_start_date = Some(from);
        self.agreement_end_date = to;
        self
    }

    /// Marks the provider inactive
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Row for the `Providers` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderRow {
    pub provider_number: String,
    pub provider_name: String,
    pub provider_type: ProviderType,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: crate::member::State,
    pub post_code: String,
    pub country: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_preferred_provider: bool,
    pub agreement_start_date: Option<NaiveDate>,
    pub agreement_end_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl TableRecord for Provider {
    type Row = ProviderRow;

    const TABLE: &'static str = "Providers";

    const COLUMNS: &'static [&'static str] = &[
        "ProviderNumber",
        "ProviderName",
        "ProviderType",
        "AddressLine1",
        "AddressLine2",
        "City",
        "State",
        "PostCode",
        "Country",
        "Phone",
        "Email",
        "IsPreferredProvider",
        "AgreementStartDate",
        "AgreementEndDate",
        "IsActive",
    ];

    fn to_row(&self) -> Result<ProviderRow, RecordError> {
        Ok(ProviderRow {
            provider_number: self.provider_number.clone(),
            provider_name: self.provider_name.clone(),
            provider_type: self.provider_type,
            address_line1: self.address.line1.clone(),
            address_line2: self.address.line2.clone(),
            city: self.address.city.clone(),
            state: self.address.state,
            post_code: self.address.post_code.clone(),
            country: self.address.country.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            is_preferred_provider: self.is_preferred_provider,
            agreement_start_date: self.agreement_start_date,
            agreement_end_date: self.agreement_end_date,
            is_active: self.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::State;

    fn royal_melbourne() -> Provider {
        Provider::new(
            "HOSP-0042",
            "Royal Melbourne Hospital",
            ProviderType::Hospital,
            Address::new("300 Grattan St", "Melbourne", State::VIC, "3050"),
        )
        .with_phone("0393427000")
        .preferred(NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(), None)
    }

    #[test]
    fn test_provider_row_fields() {
        let row = royal_melbourne().to_row().unwrap();
        assert_eq!(row.provider_number, "HOSP-0042");
        assert_eq!(row.provider_type, ProviderType::Hospital);
        assert!(row.is_preferred_provider);
        assert!(row.agreement_end_date.is_none());
    }

    #[test]
    fn test_provider_row_serializes_to_schema_columns() {
        let value = serde_json::to_value(royal_melbourne().to_row().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Provider::COLUMNS.len());
        for column in Provider::COLUMNS {
            assert!(object.contains_key(*column), "missing column {}", column);
        }
        assert_eq!(object["ProviderType"], serde_json::json!("Hospital"));
        assert_eq!(object["IsPreferredProvider"], serde_json::json!(true));
    }

    #[test]
    fn test_multi_word_provider_types_serialize_with_spaces() {
        let gp = Provider::new(
            "GP-0007",
            "Collins Street Clinic",
            ProviderType::GeneralPractitioner,
            Address::new("12 Collins St", "Melbourne", State::VIC, "3000"),
        );
        let value = serde_json::to_value(gp.to_row().unwrap()).unwrap();
        assert_eq!(
            value["ProviderType"],
            serde_json::json!("General Practitioner")
        );
    }
}

//! Premium payment entity

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::PolicyId;

use crate::error::RecordError;
use crate::policy::PaymentMethod;
use crate::record::TableRecord;

/// Outcome of a premium collection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Successful,
    Failed,
    Pending,
    Refunded,
}

/// A premium payment against a policy
///
/// The payment covers the period `period_start_date..=period_end_date`;
/// a single-day period (start equal to end) is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumPayment {
    pub policy_id: PolicyId,
    pub payment_date: NaiveDate,
    pub payment_amount: Decimal,
    pub payment_method: PaymentMethod,
    /// Bank or gateway reference
    pub payment_reference: Option<String>,
    pub payment_status: PaymentStatus,
    pub period_start_date: NaiveDate,
    pub period_end_date: NaiveDate,
}

impl PremiumPayment {
    /// Records a successful payment for the given coverage period
    pub fn new(
        policy_id: PolicyId,
        payment_date: NaiveDate,
        payment_amount: Decimal,
        payment_method: PaymentMethod,
        period_start_date: NaiveDate,
        period_end_date: NaiveDate,
    ) -> Self {
        Self {
            policy_id,
            payment_date,
            payment_amount,
            payment_method,
            payment_reference: None,
            payment_status: PaymentStatus::Successful,
            period_start_date,
            period_end_date,
        }
    }

    /// Sets the external payment reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.payment_reference = Some(reference.into());
        self
    }

    /// Sets the payment status
    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = status;
        self
    }

    /// Whether the covered period is well-ordered (start ≤ end)
    pub fn period_is_ordered(&self) -> bool {
        self.period_start_date <= self.period_end_date
    }
}

/// Row for the `PremiumPayments` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PremiumPaymentRow {
    #[serde(rename = "PolicyID")]
    pub policy_id: PolicyId,
    pub payment_date: NaiveDate,
    pub payment_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_reference: Option<String>,
    pub payment_status: PaymentStatus,
    pub period_start_date: NaiveDate,
    pub period_end_date: NaiveDate,
}

impl TableRecord for PremiumPayment {
    type Row = PremiumPaymentRow;

    const TABLE: &'static str = "PremiumPayments";

    const COLUMNS: &'static [&'static str] = &[
        "PolicyID",
        "PaymentDate",
        "PaymentAmount",
        "PaymentMethod",
        "PaymentReference",
        "PaymentStatus",
        "PeriodStartDate",
        "PeriodEndDate",
    ];

    fn to_row(&self) -> Result<PremiumPaymentRow, RecordError> {
        Ok(PremiumPaymentRow {
            policy_id: self.policy_id,
            payment_date: self.payment_date,
            payment_amount: self.payment_amount,
            payment_method: self.payment_method,
            payment_reference: self.payment_reference.clone(),
            payment_status: self.payment_status,
            period_start_date: self.period_start_date,
            period_end_date: self.period_end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn monthly_payment() -> PremiumPayment {
        PremiumPayment::new(
            PolicyId::new(10),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            dec!(186.50),
            PaymentMethod::DirectDebit,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        )
        .with_reference("DD-83920174")
    }

    #[test]
    fn test_payment_defaults_to_successful() {
        assert_eq!(monthly_payment().payment_status, PaymentStatus::Successful);
    }

    #[test]
    fn test_payment_row_serializes_to_schema_columns() {
        let value = serde_json::to_value(monthly_payment().to_row().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), PremiumPayment::COLUMNS.len());
        for column in PremiumPayment::COLUMNS {
            assert!(object.contains_key(*column), "missing column {}", column);
        }
        assert_eq!(object["PaymentMethod"], serde_json::json!("Direct Debit"));
        assert_eq!(object["PaymentStatus"], serde_json::json!("Successful"));
    }

    #[test]
    fn test_single_day_period_is_ordered() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let payment = PremiumPayment::new(
            PolicyId::new(10),
            day,
            dec!(6.15),
            PaymentMethod::Bpay,
            day,
            day,
        );
        assert!(payment.period_is_ordered());
    }

    #[test]
    fn test_inverted_period_is_not_ordered() {
        let payment = PremiumPayment::new(
            PolicyId::new(10),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            dec!(186.50),
            PaymentMethod::DirectDebit,
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        assert!(!payment.period_is_ordered());
    }
}

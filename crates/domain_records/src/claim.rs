//! Claim entity
//!
//! A claim records a single service: who received it, who provided it, what
//! was charged, and how the charge splits across the Medicare rebate, the
//! insurer's payment, and the member's gap. The split is a domain
//! expectation (`ChargedAmount == MedicareAmount + InsuranceAmount +
//! GapAmount`); the projection does not enforce it, the validator reports it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimNumber, MemberId, PolicyId, ProviderId};

use crate::error::RecordError;
use crate::record::TableRecord;

/// Claim processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Submitted,
    #[serde(rename = "In Process")]
    InProcess,
    Approved,
    Paid,
    Rejected,
}

/// Service category of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimType {
    Hospital,
    Medical,
    Dental,
    Optical,
    Physiotherapy,
    Chiropractic,
    Psychology,
    Podiatry,
    Acupuncture,
    Naturopathy,
    #[serde(rename = "Remedial Massage")]
    RemedialMassage,
    Ambulance,
}

/// A health insurance claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Reference number in `CL-YYYYMMDD-NNNNN` form
    pub claim_number: ClaimNumber,
    pub policy_id: PolicyId,
    pub member_id: MemberId,
    pub provider_id: ProviderId,
    /// When the service was performed
    pub service_date: DateTime<Utc>,
    /// When the claim was lodged; never earlier than the service
    pub submission_date: DateTime<Utc>,
    pub claim_type: ClaimType,
    pub service_description: String,
    /// Medicare Benefits Schedule item billed, for medical services
    pub mbs_item_number: Option<String>,
    /// Total charged by the provider
    pub charged_amount: Decimal,
    /// Medicare rebate portion
    pub medicare_amount: Decimal,
    /// Insurer-paid portion
    pub insurance_amount: Decimal,
    /// Member out-of-pocket portion
    pub gap_amount: Decimal,
    /// Excess drawn from the policy for this claim
    pub excess_applied: Decimal,
    pub status: ClaimStatus,
    pub processed_date: Option<DateTime<Utc>>,
    pub payment_date: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
}

impl Claim {
    /// Creates a submitted claim with the full charge unallocated
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        claim_number: ClaimNumber,
        policy_id: PolicyId,
        member_id: MemberId,
        provider_id: ProviderId,
        service_date: DateTime<Utc>,
        submission_date: DateTime<Utc>,
        claim_type: ClaimType,
        service_description: impl Into<String>,
        charged_amount: Decimal,
    ) -> Self {
        Self {
            claim_number,
            policy_id,
            member_id,
            provider_id,
            service_date,
            submission_date,
            claim_type,
            service_description: service_description.into(),
            mbs_item_number: None,
            charged_amount,
            medicare_amount: Decimal::ZERO,
            insurance_amount: Decimal::ZERO,
            gap_amount: Decimal::ZERO,
            excess_applied: Decimal::ZERO,
            status: ClaimStatus::Submitted,
            processed_date: None,
            payment_date: None,
            rejection_reason: None,
        }
    }

    /// Sets the charge split across Medicare, insurer, and gap
    pub fn with_amounts(mut self, medicare: Decimal, insurance: Decimal, gap: Decimal) -> Self {
        self.medicare_amount = medicare;
        self.insurance_amount = insurance;
        self.gap_amount = gap;
        self
    }

    /// Sets the excess applied
    pub fn with_excess_applied(mut self, excess: Decimal) -> Self {
        self.excess_applied = excess;
        self
    }

    /// Sets the MBS item number
    pub fn with_mbs_item(mut self, item: impl Into<String>) -> Self {
        self.mbs_item_number = Some(item.into());
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the processed timestamp
    pub fn with_processed_date(mut self, date: DateTime<Utc>) -> Self {
        self.processed_date = Some(date);
        self
    }

    /// Sets the payment timestamp
    pub fn with_payment_date(mut self, date: DateTime<Utc>) -> Self {
        self.payment_date = Some(date);
        self
    }

    /// Sets the rejection reason
    pub fn with_rejection_reason(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = Some(reason.into());
        self
    }

    /// Whether the charge equals the Medicare + insurer + gap split
    pub fn amounts_reconcile(&self) -> bool {
        self.charged_amount == self.medicare_amount + self.insurance_amount + self.gap_amount
    }
}

/// Row for the `Claims` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimRow {
    pub claim_number: ClaimNumber,
    #[serde(rename = "PolicyID")]
    pub policy_id: PolicyId,
    #[serde(rename = "MemberID")]
    pub member_id: MemberId,
    #[serde(rename = "ProviderID")]
    pub provider_id: ProviderId,
    pub service_date: DateTime<Utc>,
    pub submission_date: DateTime<Utc>,
    pub claim_type: ClaimType,
    pub service_description: String,
    #[serde(rename = "MBSItemNumber")]
    pub mbs_item_number: Option<String>,
    pub charged_amount: Decimal,
    pub medicare_amount: Decimal,
    pub insurance_amount: Decimal,
    pub gap_amount: Decimal,
    pub excess_applied: Decimal,
    pub status: ClaimStatus,
    pub processed_date: Option<DateTime<Utc>>,
    pub payment_date: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
}

impl TableRecord for Claim {
    type Row = ClaimRow;

    const TABLE: &'static str = "Claims";

    const COLUMNS: &'static [&'static str] = &[
        "ClaimNumber",
        "PolicyID",
        "MemberID",
        "ProviderID",
        "ServiceDate",
        "SubmissionDate",
        "ClaimType",
        "ServiceDescription",
        "MBSItemNumber",
        "ChargedAmount",
        "MedicareAmount",
        "InsuranceAmount",
        "GapAmount",
        "ExcessApplied",
        "Status",
        "ProcessedDate",
        "PaymentDate",
        "RejectionReason",
    ];

    fn to_row(&self) -> Result<ClaimRow, RecordError> {
        Ok(ClaimRow {
            claim_number: self.claim_number,
            policy_id: self.policy_id,
            member_id: self.member_id,
            provider_id: self.provider_id,
            service_date: self.service_date,
            submission_date: self.submission_date,
            claim_type: self.claim_type,
            service_description: self.service_description.clone(),
            mbs_item_number: self.mbs_item_number.clone(),
            charged_amount: self.charged_amount,
            medicare_amount: self.medicare_amount,
            insurance_amount: self.insurance_amount,
            gap_amount: self.gap_amount,
            excess_applied: self.excess_applied,
            status: self.status,
            processed_date: self.processed_date,
            payment_date: self.payment_date,
            rejection_reason: self.rejection_reason.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn hospital_claim() -> Claim {
        let service = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        let submitted = Utc.with_ymd_and_hms(2024, 3, 18, 14, 0, 0).unwrap();
        Claim::new(
            "CL-20240318-00001".parse().unwrap(),
            PolicyId::new(10),
            MemberId::new(1),
            ProviderId::new(42),
            service,
            submitted,
            ClaimType::Hospital,
            "Knee arthroscopy",
            dec!(1200.00),
        )
        .with_mbs_item("49318")
        .with_amounts(dec!(334.05), dec!(615.95), dec!(250.00))
        .with_excess_applied(dec!(250.00))
        .with_status(ClaimStatus::Approved)
    }

    #[test]
    fn test_claim_amounts_reconcile() {
        assert!(hospital_claim().amounts_reconcile());
    }

    #[test]
    fn test_unallocated_claim_does_not_reconcile() {
        let service = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        let claim = Claim::new(
            "CL-20240315-00002".parse().unwrap(),
            PolicyId::new(10),
            MemberId::new(1),
            ProviderId::new(42),
            service,
            service,
            ClaimType::Dental,
            "Periodic examination",
            dec!(120.00),
        );
        assert!(!claim.amounts_reconcile());
    }

    #[test]
    fn test_claim_row_serializes_to_schema_columns() {
        let value = serde_json::to_value(hospital_claim().to_row().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Claim::COLUMNS.len());
        for column in Claim::COLUMNS {
            assert!(object.contains_key(*column), "missing column {}", column);
        }
        assert_eq!(object["ClaimNumber"], serde_json::json!("CL-20240318-00001"));
        assert_eq!(object["MBSItemNumber"], serde_json::json!("49318"));
        assert_eq!(object["Status"], serde_json::json!("Approved"));
    }

    #[test]
    fn test_in_process_status_serializes_with_space() {
        let claim = hospital_claim().with_status(ClaimStatus::InProcess);
        let value = serde_json::to_value(claim.to_row().unwrap()).unwrap();
        assert_eq!(value["Status"], serde_json::json!("In Process"));
    }

    #[test]
    fn test_amounts_project_unchanged() {
        let row = hospital_claim().to_row().unwrap();
        assert_eq!(row.charged_amount, dec!(1200.00));
        assert_eq!(row.medicare_amount, dec!(334.05));
        assert_eq!(row.insurance_amount, dec!(615.95));
        assert_eq!(row.gap_amount, dec!(250.00));
        assert_eq!(
            row.charged_amount,
            row.medicare_amount + row.insurance_amount + row.gap_amount
        );
    }

    #[test]
    fn test_to_row_is_idempotent() {
        let claim = hospital_claim();
        assert_eq!(claim.to_row().unwrap(), claim.to_row().unwrap());
    }
}

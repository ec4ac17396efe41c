//! Policy entity and policy membership
//!
//! A policy links a primary member to a coverage plan. Additional covered
//! persons are attached through `PolicyMember` rows, one per person, with a
//! relationship back to the primary member.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{MemberId, PlanId, PolicyId};

use crate::error::RecordError;
use crate::record::TableRecord;

/// Who the policy covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageType {
    Single,
    Couple,
    Family,
    #[serde(rename = "Single Parent")]
    SingleParent,
}

/// How often premiums fall due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PremiumFrequency {
    Monthly,
    Quarterly,
    Annually,
}

impl PremiumFrequency {
    /// Number of premium payments in a full year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PremiumFrequency::Monthly => 12,
            PremiumFrequency::Quarterly => 4,
            PremiumFrequency::Annually => 1,
        }
    }
}

/// Policy lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Suspended,
    Cancelled,
    Lapsed,
}

/// How premiums are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Direct Debit")]
    DirectDebit,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "BPAY")]
    Bpay,
    PayPal,
}

/// Relationship of a covered person to the primary member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relationship {
    /// The primary member themselves
    #[serde(rename = "Self")]
    SelfCovered,
    Spouse,
    Child,
    Dependent,
}

/// A health insurance policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Policy number as issued
    pub policy_number: String,
    /// Primary member holding the policy
    pub primary_member_id: MemberId,
    /// Plan the policy is written against
    pub plan_id: PlanId,
    pub coverage_type: CoverageType,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Excess selected from the plan's options
    pub excess_amount: Decimal,
    pub premium_frequency: PremiumFrequency,
    /// Premium per `premium_frequency` period
    pub current_premium: Decimal,
    /// Government rebate applied, as a percentage
    pub rebate_percentage: Decimal,
    /// LHC loading applied, as a percentage
    pub lhc_loading_percentage: Decimal,
    pub status: PolicyStatus,
    pub payment_method: PaymentMethod,
    pub last_premium_paid_date: Option<NaiveDate>,
    pub next_premium_due_date: Option<NaiveDate>,
}

impl Policy {
    /// Creates an active monthly direct-debit policy
    pub fn new(
        policy_number: impl Into<String>,
        primary_member_id: MemberId,
        plan_id: PlanId,
        coverage_type: CoverageType,
        start_date: NaiveDate,
        current_premium: Decimal,
    ) -> Self {
        Self {
            policy_number: policy_number.into(),
            primary_member_id,
            plan_id,
            coverage_type,
            start_date,
            end_date: None,
            excess_amount: Decimal::ZERO,
            premium_frequency: PremiumFrequency::Monthly,
            current_premium,
            rebate_percentage: Decimal::ZERO,
            lhc_loading_percentage: Decimal::ZERO,
            status: PolicyStatus::Active,
            payment_method: PaymentMethod::DirectDebit,
            last_premium_paid_date: None,
            next_premium_due_date: None,
        }
    }

    /// Sets the selected excess
    pub fn with_excess(mut self, amount: Decimal) -> Self {
        self.excess_amount = amount;
        self
    }

    /// Sets the premium frequency
    pub fn with_frequency(mut self, frequency: PremiumFrequency) -> Self {
        self.premium_frequency = frequency;
        self
    }

    /// Sets the rebate percentage
    pub fn with_rebate(mut self, percentage: Decimal) -> Self {
        self.rebate_percentage = percentage;
        self
    }

    /// Sets the LHC loading percentage
    pub fn with_lhc_loading(mut self, percentage: Decimal) -> Self {
        self.lhc_loading_percentage = percentage;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the payment method
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// Sets the end date
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the premium paid / next due dates
    pub fn with_premium_dates(
        mut self,
        last_paid: Option<NaiveDate>,
        next_due: Option<NaiveDate>,
    ) -> Self {
        self.last_premium_paid_date = last_paid;
        self.next_premium_due_date = next_due;
        self
    }

    /// Whether the policy is currently in force
    pub fn is_in_force(&self) -> bool {
        self.status == PolicyStatus::Active
    }
}

/// Row for the `Policies` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyRow {
    pub policy_number: String,
    #[serde(rename = "PrimaryMemberID")]
    pub primary_member_id: MemberId,
    #[serde(rename = "PlanID")]
    pub plan_id: PlanId,
    pub coverage_type: CoverageType,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub excess_amount: Decimal,
    pub premium_frequency: PremiumFrequency,
    pub current_premium: Decimal,
    pub rebate_percentage: Decimal,
    #[serde(rename = "LHCLoadingPercentage")]
    pub lhc_loading_percentage: Decimal,
    pub status: PolicyStatus,
    pub payment_method: PaymentMethod,
    pub last_premium_paid_date: Option<NaiveDate>,
    pub next_premium_due_date: Option<NaiveDate>,
}

impl TableRecord for Policy {
    type Row = PolicyRow;

    const TABLE: &'static str = "Policies";

    const COLUMNS: &'static [&'static str] = &[
        "PolicyNumber",
        "PrimaryMemberID",
        "PlanID",
        "CoverageType",
        "StartDate",
        "EndDate",
        "ExcessAmount",
        "PremiumFrequency",
        "CurrentPremium",
        "RebatePercentage",
        "LHCLoadingPercentage",
        "Status",
        "PaymentMethod",
        "LastPremiumPaidDate",
        "NextPremiumDueDate",
    ];

    fn to_row(&self) -> Result<PolicyRow, RecordError> {
        Ok(PolicyRow {
            policy_number: self.policy_number.clone(),
            primary_member_id: self.primary_member_id,
            plan_id: self.plan_id,
            coverage_type: self.coverage_type,
            start_date: self.start_date,
            end_date: self.end_date,
            excess_amount: self.excess_amount,
            premium_frequency: self.premium_frequency,
            current_premium: self.current_premium,
            rebate_percentage: self.rebate_percentage,
            lhc_loading_percentage: self.lhc_loading_percentage,
            status: self.status,
            payment_method: self.payment_method,
            last_premium_paid_date: self.last_premium_paid_date,
            next_premium_due_date: self.next_premium_due_date,
        })
    }
}

/// A person covered under a policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyMember {
    pub policy_id: PolicyId,
    pub member_id: MemberId,
    pub relationship_to_primary: Relationship,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl PolicyMember {
    /// Adds a member to a policy from the given date
    pub fn new(
        policy_id: PolicyId,
        member_id: MemberId,
        relationship_to_primary: Relationship,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            policy_id,
            member_id,
            relationship_to_primary,
            start_date,
            end_date: None,
            is_active: true,
        }
    }

    /// Sets the end date and marks the membership inactive
    pub fn ended(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self.is_active = false;
        self
    }
}

/// Row for the `PolicyMembers` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyMemberRow {
    #[serde(rename = "PolicyID")]
    pub policy_id: PolicyId,
    #[serde(rename = "MemberID")]
    pub member_id: MemberId,
    pub relationship_to_primary: Relationship,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl TableRecord for PolicyMember {
    type Row = PolicyMemberRow;

    const TABLE: &'static str = "PolicyMembers";

    const COLUMNS: &'static [&'static str] = &[
        "PolicyID",
        "MemberID",
        "RelationshipToPrimary",
        "StartDate",
        "EndDate",
        "IsActive",
    ];

    fn to_row(&self) -> Result<PolicyMemberRow, RecordError> {
        Ok(PolicyMemberRow {
            policy_id: self.policy_id,
            member_id: self.member_id,
            relationship_to_primary: self.relationship_to_primary,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_policy() -> Policy {
        Policy::new(
            "POL-2024-000123",
            MemberId::new(1),
            PlanId::new(3),
            CoverageType::Single,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            dec!(186.50),
        )
        .with_excess(dec!(250))
        .with_rebate(dec!(24.608))
    }

    #[test]
    fn test_policy_defaults() {
        let policy = sample_policy();
        assert_eq!(policy.premium_frequency, PremiumFrequency::Monthly);
        assert_eq!(policy.payment_method, PaymentMethod::DirectDebit);
        assert_eq!(policy.status, PolicyStatus::Active);
        assert!(policy.is_in_force());
    }

    #[test]
    fn test_policy_row_references() {
        let row = sample_policy().to_row().unwrap();
        assert_eq!(row.primary_member_id, MemberId::new(1));
        assert_eq!(row.plan_id, PlanId::new(3));
        assert_eq!(row.excess_amount, dec!(250));
    }

    #[test]
    fn test_policy_row_serializes_to_schema_columns() {
        let value = serde_json::to_value(sample_policy().to_row().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Policy::COLUMNS.len());
        for column in Policy::COLUMNS {
            assert!(object.contains_key(*column), "missing column {}", column);
        }
        // Identifier newtypes stay plain integers on the wire.
        assert_eq!(object["PrimaryMemberID"], serde_json::json!(1));
        assert_eq!(object["PaymentMethod"], serde_json::json!("Direct Debit"));
        assert_eq!(object["Status"], serde_json::json!("Active"));
    }

    #[test]
    fn test_single_parent_serializes_with_space() {
        let policy = Policy {
            coverage_type: CoverageType::SingleParent,
            ..sample_policy()
        };
        let value = serde_json::to_value(policy.to_row().unwrap()).unwrap();
        assert_eq!(value["CoverageType"], serde_json::json!("Single Parent"));
    }

    #[test]
    fn test_payments_per_year() {
        assert_eq!(PremiumFrequency::Monthly.payments_per_year(), 12);
        assert_eq!(PremiumFrequency::Quarterly.payments_per_year(), 4);
        assert_eq!(PremiumFrequency::Annually.payments_per_year(), 1);
    }

    #[test]
    fn test_policy_member_row() {
        let covered = PolicyMember::new(
            PolicyId::new(10),
            MemberId::new(2),
            Relationship::Spouse,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        let value = serde_json::to_value(covered.to_row().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), PolicyMember::COLUMNS.len());
        assert_eq!(object["RelationshipToPrimary"], serde_json::json!("Spouse"));
        assert_eq!(object["IsActive"], serde_json::json!(true));
    }

    #[test]
    fn test_self_relationship_serializes_as_self() {
        let covered = PolicyMember::new(
            PolicyId::new(10),
            MemberId::new(1),
            Relationship::SelfCovered,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        let value = serde_json::to_value(covered.to_row().unwrap()).unwrap();
        assert_eq!(value["RelationshipToPrimary"], serde_json::json!("Self"));
    }

    #[test]
    fn test_ended_policy_member() {
        let covered = PolicyMember::new(
            PolicyId::new(10),
            MemberId::new(2),
            Relationship::Child,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        )
        .ended(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert!(!covered.is_active);
        assert_eq!(
            covered.end_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
        );
    }
}

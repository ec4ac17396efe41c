//! Test data builders
//!
//! Builder patterns for constructing test data with sensible defaults,
//! letting tests override only the fields they care about.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimNumber, MemberId, PolicyId, ProviderId};
use domain_records::{
    Address, Claim, ClaimStatus, ClaimType, Gender, Member, PaymentMethod, PremiumPayment,
    State,
};

use crate::fixtures::DateFixtures;

/// Builder for test members
pub struct TestMemberBuilder {
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    gender: Gender,
    address: Address,
    member_number: Option<String>,
    email: Option<String>,
    medicare_number: Option<String>,
}

impl Default for TestMemberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMemberBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            date_of_birth: DateFixtures::date_of_birth(),
            gender: Gender::Male,
            address: Address::new("123 Main St", "Sydney", State::NSW, "2000"),
            member_number: Some("MEM001".to_string()),
            email: Some("john.smith@example.com".to_string()),
            medicare_number: Some("2951836514".to_string()),
        }
    }

    /// Sets the name
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Sets the date of birth
    pub fn with_date_of_birth(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = date;
        self
    }

    /// Sets the gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the address
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Sets the member number
    pub fn with_member_number(mut self, number: impl Into<String>) -> Self {
        self.member_number = Some(number.into());
        self
    }

    /// Clears the optional contact fields
    pub fn minimal(mut self) -> Self {
        self.member_number = None;
        self.email = None;
        self.medicare_number = None;
        self
    }

    /// Builds the member
    pub fn build(self) -> Member {
        let mut member = Member::new(
            self.first_name,
            self.last_name,
            self.date_of_birth,
            self.gender,
            self.address,
        );
        if let Some(number) = self.member_number {
            member = member.with_member_number(number);
        }
        if let Some(email) = self.email {
            member = member.with_email(email);
        }
        if let Some(medicare) = self.medicare_number {
            member = member.with_medicare_number(medicare);
        }
        member
    }
}

/// Builder for test claims
///
/// Defaults to a reconciled hospital claim; `with_charged` re-derives the
/// gap so the amounts stay consistent unless a split is set explicitly.
pub struct TestClaimBuilder {
    claim_number: ClaimNumber,
    policy_id: PolicyId,
    member_id: MemberId,
    provider_id: ProviderId,
    service_date: DateTime<Utc>,
    submission_date: DateTime<Utc>,
    claim_type: ClaimType,
    service_description: String,
    charged_amount: Decimal,
    medicare_amount: Decimal,
    insurance_amount: Decimal,
    status: ClaimStatus,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            claim_number: "CL-20240318-00001".parse().unwrap(),
            policy_id: PolicyId::new(1),
            member_id: MemberId::new(1),
            provider_id: ProviderId::new(1),
            service_date: DateFixtures::service_datetime(),
            submission_date: DateFixtures::submission_datetime(),
            claim_type: ClaimType::Hospital,
            service_description: "Appendicectomy".to_string(),
            charged_amount: dec!(1200.00),
            medicare_amount: dec!(334.05),
            insurance_amount: dec!(615.95),
            status: ClaimStatus::Approved,
        }
    }

    /// Sets the claim number
    pub fn with_claim_number(mut self, number: ClaimNumber) -> Self {
        self.claim_number = number;
        self
    }

    /// Sets the claim type and description
    pub fn with_service(mut self, claim_type: ClaimType, description: impl Into<String>) -> Self {
        self.claim_type = claim_type;
        self.service_description = description.into();
        self
    }

    /// Sets the charged amount, keeping the existing Medicare/insurer split
    pub fn with_charged(mut self, amount: Decimal) -> Self {
        self.charged_amount = amount;
        self
    }

    /// Sets the Medicare and insurer portions
    pub fn with_split(mut self, medicare: Decimal, insurance: Decimal) -> Self {
        self.medicare_amount = medicare;
        self.insurance_amount = insurance;
        self
    }

    /// Sets the service and submission timestamps
    pub fn with_dates(mut self, service: DateTime<Utc>, submission: DateTime<Utc>) -> Self {
        self.service_date = service;
        self.submission_date = submission;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the claim with the gap derived from the remaining charge
    pub fn build(self) -> Claim {
        let gap = self.charged_amount - self.medicare_amount - self.insurance_amount;
        Claim::new(
            self.claim_number,
            self.policy_id,
            self.member_id,
            self.provider_id,
            self.service_date,
            self.submission_date,
            self.claim_type,
            self.service_description,
            self.charged_amount,
        )
        .with_amounts(self.medicare_amount, self.insurance_amount, gap)
        .with_status(self.status)
    }
}

/// Builder for test premium payments
pub struct TestPaymentBuilder {
    policy_id: PolicyId,
    payment_date: NaiveDate,
    payment_amount: Decimal,
    payment_method: PaymentMethod,
    period_start: NaiveDate,
    period_end: NaiveDate,
}

impl Default for TestPaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPaymentBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            policy_id: PolicyId::new(1),
            payment_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            payment_amount: dec!(200.00),
            payment_method: PaymentMethod::DirectDebit,
            period_start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        }
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.payment_amount = amount;
        self
    }

    /// Sets the payment method
    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// Sets the covered period
    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.period_start = start;
        self.period_end = end;
        self
    }

    /// Builds the payment
    pub fn build(self) -> PremiumPayment {
        PremiumPayment::new(
            self.policy_id,
            self.payment_date,
            self.payment_amount,
            self.payment_method,
            self.period_start,
            self.period_end,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_claim_builder_reconciles() {
        let claim = TestClaimBuilder::new().build();
        assert!(claim.amounts_reconcile());
    }

    #[test]
    fn test_claim_builder_derives_gap() {
        let claim = TestClaimBuilder::new()
            .with_charged(dec!(950.00))
            .build();
        assert_eq!(claim.gap_amount, dec!(0.00));
        assert!(claim.amounts_reconcile());
    }

    #[test]
    fn test_minimal_member_has_no_contact_details() {
        let member = TestMemberBuilder::new().minimal().build();
        assert!(member.member_number.is_none());
        assert!(member.email.is_none());
        assert!(member.medicare_number.is_none());
    }
}

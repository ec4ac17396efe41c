//! Record validation rules
//!
//! Shape checks for records before they are handed to the persistence layer.
//! Referential integrity of identifier fields is a persistence concern and
//! is not checked here.
//!
//! # Validation Rules
//!
//! ## Member
//! - First and last name must be present
//! - Postcode must be four digits; Medicare number ten digits
//! - Email must be well-formed (when present)
//! - Join date cannot precede date of birth
//!
//! ## Claim
//! - Submission date must not precede the service date
//! - Amounts must be non-negative
//! - `ChargedAmount == MedicareAmount + InsuranceAmount + GapAmount` is a
//!   domain expectation; a mismatch is reported as a warning, not an error
//! - A rejected claim without a rejection reason draws a warning
//!
//! ## PremiumPayment
//! - Period must be ordered (start ≤ end; a single-day period is valid)
//! - Amount must be non-negative

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};
use validator::Validate;

use crate::claim::{Claim, ClaimStatus};
use crate::member::Member;
use crate::payment::PremiumPayment;
use crate::plan::CoveragePlan;
use crate::policy::{Policy, PolicyMember};
use crate::provider::Provider;

/// Result of record validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the record is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for record model entities
pub struct RecordValidator;

impl RecordValidator {
    /// Validates a member record
    pub fn validate_member(member: &Member) -> ValidationResult {
        debug!(member = %member.full_name(), "validating member");
        let mut result = ValidationResult::ok();

        if member.first_name.trim().is_empty() {
            result.add_error("First name is required");
        }
        if member.last_name.trim().is_empty() {
            result.add_error("Last name is required");
        }
        if !is_postcode(&member.address.post_code) {
            result.add_error(format!(
                "Postcode {:?} is not a four-digit Australian postcode",
                member.address.post_code
            ));
        }
        if let Some(ref medicare) = member.medicare_number {
            if !is_digits(medicare, 10) {
                result.add_error(format!(
                    "Medicare number {:?} is not ten digits",
                    medicare
                ));
            }
        }
        if member.validate().is_err() {
            result.add_error("Email address is malformed");
        }
        if let Some(join_date) = member.join_date {
            if join_date < member.date_of_birth {
                result.add_error("Join date precedes date of birth");
            }
        }
        if member.lhc_loading_percentage < Decimal::ZERO {
            result.add_error("LHC loading cannot be negative");
        }

        result
    }

    /// Validates a coverage plan record
    pub fn validate_plan(plan: &CoveragePlan) -> ValidationResult {
        debug!(plan_code = %plan.plan_code, "validating coverage plan");
        let mut result = ValidationResult::ok();

        if plan.plan_code.trim().is_empty() {
            result.add_error("Plan code is required");
        }
        if plan.monthly_premium < Decimal::ZERO || plan.annual_premium < Decimal::ZERO {
            result.add_error("Premiums cannot be negative");
        }
        if plan.excess_options.iter().any(|e| *e < Decimal::ZERO) {
            result.add_error("Excess options cannot be negative");
        }
        if let Some(end) = plan.end_date {
            if end < plan.effective_date {
                result.add_error("End date precedes effective date");
            }
        }
        if plan.annual_premium != plan.monthly_premium * dec!(12) {
            result.add_warning(format!(
                "Annual premium {} is not 12x the monthly premium {}",
                plan.annual_premium, plan.monthly_premium
            ));
        }

        result
    }

    /// Validates a policy record
    pub fn validate_policy(policy: &Policy) -> ValidationResult {
        debug!(policy_number = %policy.policy_number, "validating policy");
        let mut result = ValidationResult::ok();

        if policy.policy_number.trim().is_empty() {
            result.add_error("Policy number is required");
        }
        if policy.current_premium < Decimal::ZERO {
            result.add_error("Premium cannot be negative");
        }
        if policy.rebate_percentage < Decimal::ZERO || policy.rebate_percentage > dec!(100) {
            result.add_error("Rebate percentage must be between 0 and 100");
        }
        if let Some(end) = policy.end_date {
            if end < policy.start_date {
                result.add_error("End date precedes start date");
            }
        }

        result
    }

    /// Validates a policy membership record
    pub fn validate_policy_member(covered: &PolicyMember) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if let Some(end) = covered.end_date {
            if end < covered.start_date {
                result.add_error("End date precedes start date");
            }
        }
        result
    }

    /// Validates a provider record
    pub fn validate_provider(provider: &Provider) -> ValidationResult {
        debug!(provider_number = %provider.provider_number, "validating provider");
        let mut result = ValidationResult::ok();

        if provider.provider_number.trim().is_empty() {
            result.add_error("Provider number is required");
        }
        if provider.provider_name.trim().is_empty() {
            result.add_error("Provider name is required");
        }
        if !is_postcode(&provider.address.post_code) {
            result.add_error(format!(
                "Postcode {:?} is not a four-digit Australian postcode",
                provider.address.post_code
            ));
        }
        if provider.validate().is_err() {
            result.add_error("Email address is malformed");
        }
        if let (Some(start), Some(end)) =
            (provider.agreement_start_date, provider.agreement_end_date)
        {
            if end < start {
                result.add_error("Agreement end date precedes its start date");
            }
        }

        result
    }

    /// Validates a claim record
    pub fn validate_claim(claim: &Claim) -> ValidationResult {
        debug!(claim_number = %claim.claim_number, "validating claim");
        let mut result = ValidationResult::ok();

        if claim.submission_date < claim.service_date {
            result.add_error("Submission date precedes service date");
        }
        for (label, amount) in [
            ("Charged", claim.charged_amount),
            ("Medicare", claim.medicare_amount),
            ("Insurance", claim.insurance_amount),
            ("Gap", claim.gap_amount),
            ("Excess applied", claim.excess_applied),
        ] {
            if amount < Decimal::ZERO {
                result.add_error(format!("{} amount cannot be negative", label));
            }
        }
        if !claim.amounts_reconcile() {
            warn!(
                claim_number = %claim.claim_number,
                charged = %claim.charged_amount,
                "claim amounts do not reconcile"
            );
            result.add_warning(format!(
                "Charged amount {} does not equal Medicare {} + insurance {} + gap {}",
                claim.charged_amount,
                claim.medicare_amount,
                claim.insurance_amount,
                claim.gap_amount
            ));
        }
        if claim.status == ClaimStatus::Rejected && claim.rejection_reason.is_none() {
            result.add_warning("Rejected claim has no rejection reason");
        }

        result
    }

    /// Validates a premium payment record
    pub fn validate_payment(payment: &PremiumPayment) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if !payment.period_is_ordered() {
            result.add_error("Period start date is after period end date");
        }
        if payment.payment_amount < Decimal::ZERO {
            result.add_error("Payment amount cannot be negative");
        }

        result
    }
}

fn is_postcode(s: &str) -> bool {
    is_digits(s, 4)
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::claim::ClaimType;
    use crate::member::{Gender, State};
    use crate::policy::PaymentMethod;
    use chrono::{NaiveDate, TimeZone, Utc};
    use core_kernel::{MemberId, PlanId, PolicyId, ProviderId};
    use rust_decimal_macros::dec;

    fn valid_member() -> Member {
        Member::new(
            "John",
            "Smith",
            NaiveDate::from_ymd_opt(1980, 1, 15).unwrap(),
            Gender::Male,
            Address::new("123 Main St", "Sydney", State::NSW, "2000"),
        )
        .with_medicare_number("2951836514")
        .with_email("john.smith@example.com")
    }

    #[test]
    fn test_valid_member_passes() {
        let result = RecordValidator::validate_member(&valid_member());
        assert!(result.is_valid, "errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_bad_postcode_fails() {
        let mut member = valid_member();
        member.address.post_code = "20000".to_string();
        assert!(!RecordValidator::validate_member(&member).is_valid);
    }

    #[test]
    fn test_bad_medicare_number_fails() {
        let member = valid_member().with_medicare_number("12345");
        assert!(!RecordValidator::validate_member(&member).is_valid);
    }

    #[test]
    fn test_join_date_before_birth_fails() {
        let member = valid_member().with_join_date(NaiveDate::from_ymd_opt(1979, 1, 1).unwrap());
        assert!(!RecordValidator::validate_member(&member).is_valid);
    }

    #[test]
    fn test_unreconciled_claim_warns_but_is_valid() {
        let service = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        let claim = Claim::new(
            "CL-20240315-00001".parse().unwrap(),
            PolicyId::new(1),
            MemberId::new(1),
            ProviderId::new(1),
            service,
            service,
            ClaimType::Hospital,
            "Hernia repair",
            dec!(1200.00),
        )
        .with_amounts(dec!(334.05), dec!(615.95), dec!(100.00));

        let result = RecordValidator::validate_claim(&claim);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_submission_before_service_fails() {
        let service = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        let submitted = Utc.with_ymd_and_hms(2024, 3, 14, 9, 0, 0).unwrap();
        let claim = Claim::new(
            "CL-20240314-00001".parse().unwrap(),
            PolicyId::new(1),
            MemberId::new(1),
            ProviderId::new(1),
            service,
            submitted,
            ClaimType::Optical,
            "Frames and lenses",
            dec!(300.00),
        )
        .with_amounts(dec!(0), dec!(240.00), dec!(60.00));
        assert!(!RecordValidator::validate_claim(&claim).is_valid);
    }

    #[test]
    fn test_single_day_payment_period_passes() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let payment = PremiumPayment::new(
            PolicyId::new(1),
            day,
            dec!(6.15),
            PaymentMethod::DirectDebit,
            day,
            day,
        );
        assert!(RecordValidator::validate_payment(&payment).is_valid);
    }

    #[test]
    fn test_inverted_payment_period_fails() {
        let payment = PremiumPayment::new(
            PolicyId::new(1),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            dec!(186.50),
            PaymentMethod::DirectDebit,
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        assert!(!RecordValidator::validate_payment(&payment).is_valid);
    }

    #[test]
    fn test_plan_premium_mismatch_warns() {
        let plan = CoveragePlan::new(
            "GOLD-HOSP",
            "Gold Hospital",
            crate::plan::PlanType::Hospital,
            dec!(200.00),
            dec!(2500.00),
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        );
        let result = RecordValidator::validate_plan(&plan);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_policy_rebate_out_of_range_fails() {
        let policy = Policy::new(
            "POL-2024-000123",
            MemberId::new(1),
            PlanId::new(1),
            crate::policy::CoverageType::Single,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            dec!(186.50),
        )
        .with_rebate(dec!(120));
        assert!(!RecordValidator::validate_policy(&policy).is_valid);
    }
}

//! Pre-built test fixtures
//!
//! Ready-to-use, deterministic entities for unit and integration tests.
//! Every fixture is fully specified (no clocks, no randomness) so repeated
//! calls return equal values.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use core_kernel::{MemberId, PlanId, PolicyId, ProviderId};
use domain_records::{
    Address, Claim, ClaimStatus, ClaimType, CoverageDetails, CoveragePlan, CoverageType,
    Gender, HospitalTier, Member, PaymentMethod, PlanType, Policy, PolicyMember,
    PremiumPayment, Provider, ProviderType, RebateTier, Relationship, State,
    WaitingPeriods,
};

/// Fixture for date/time test data
pub struct DateFixtures;

impl DateFixtures {
    /// Standard policy start date (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// The John Smith date of birth from the canonical member scenario
    pub fn date_of_birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1980, 1, 15).unwrap()
    }

    /// Service timestamp for the canonical hospital claim
    pub fn service_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }

    /// Submission timestamp three days after the service
    pub fn submission_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 18, 14, 0, 0).unwrap()
    }
}

/// Fixture for member test data
pub struct MemberFixtures;

impl MemberFixtures {
    /// The canonical John Smith member (MEM001)
    pub fn john_smith() -> Member {
        Member::new(
            "John",
            "Smith",
            DateFixtures::date_of_birth(),
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

    /// A second member for multi-member policies
    pub fn jane_smith() -> Member {
        Member::new(
            "Jane",
            "Smith",
            NaiveDate::from_ymd_opt(1982, 8, 20).unwrap(),
            Gender::Female,
            Address::new("123 Main St", "Sydney", State::NSW, "2000"),
        )
        .with_member_number("MEM002")
        .with_title("Mrs")
        .with_email("jane.smith@example.com")
        .with_rebate_tier(RebateTier::Tier1)
    }
}

/// Fixture for coverage plan test data
pub struct PlanFixtures;

impl PlanFixtures {
    /// The canonical GOLD-HOSP plan: 200.00 monthly / 2400.00 annual
    pub fn gold_hospital() -> CoveragePlan {
        let mut details = CoverageDetails::new();
        details.set_flag(CoverageDetails::PRIVATE_ROOM, true);
        details.set_flag(CoverageDetails::AMBULANCE_COVER, true);

        CoveragePlan::new(
            "GOLD-HOSP",
            "Gold Hospital",
            PlanType::Hospital,
            dec!(200.00),
            dec!(2400.00),
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        )
        .with_hospital_tier(HospitalTier::Gold)
        .with_excess_options(vec![dec!(0), dec!(250), dec!(500)])
        .with_waiting_periods(WaitingPeriods::standard())
        .with_coverage_details(details)
    }

    /// An extras-only plan with nested per-service limits
    pub fn mid_extras() -> CoveragePlan {
        let mut details = CoverageDetails::new();
        details.set(
            "dental",
            serde_json::json!({"annual_limit": 800, "preventative": "70%", "general": "60%"}),
        );
        details.set("optical", serde_json::json!({"annual_limit": 300}));

        CoveragePlan::new(
            "MID-EXTRAS",
            "Mid Extras",
            PlanType::Extras,
            dec!(45.00),
            dec!(540.00),
            NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
        )
        .with_coverage_details(details)
    }
}

/// Fixture for policy test data
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// An active single policy on the GOLD-HOSP plan
    pub fn single_active() -> Policy {
        Policy::new(
            "POL-2024-000123",
            MemberId::new(1),
            PlanId::new(1),
            CoverageType::Single,
            DateFixtures::policy_start(),
            dec!(200.00),
        )
        .with_excess(dec!(250.00))
        .with_rebate(dec!(25.0))
    }

    /// The primary member's own coverage row for [`PolicyFixtures::single_active`]
    pub fn primary_coverage() -> PolicyMember {
        PolicyMember::new(
            PolicyId::new(1),
            MemberId::new(1),
            Relationship::SelfCovered,
            DateFixtures::policy_start(),
        )
    }
}

/// Fixture for provider test data
pub struct ProviderFixtures;

impl ProviderFixtures {
    /// A preferred hospital provider
    pub fn sydney_private() -> Provider {
        Provider::new(
            "PROV001",
            "Sydney Private Hospital",
            ProviderType::Hospital,
            Address::new("456 Hospital Ave", "Sydney", State::NSW, "2000"),
        )
        .with_phone("0298765432")
        .with_email("info@sydneyprivate.example.com")
        .preferred(NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(), None)
    }

    /// A general practitioner outside the preferred network
    pub fn collins_street_gp() -> Provider {
        Provider::new(
            "GP-0007",
            "Collins Street Clinic",
            ProviderType::GeneralPractitioner,
            Address::new("12 Collins St", "Melbourne", State::VIC, "3000"),
        )
        .with_phone("0396540321")
    }
}

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// An approved hospital claim whose amounts reconcile:
    /// 1200.00 charged = 334.05 Medicare + 615.95 insurance + 250.00 gap,
    /// with a 250.00 excess applied.
    pub fn approved_hospital_claim() -> Claim {
        Claim::new(
            "CL-20240318-00001".parse().unwrap(),
            PolicyId::new(1),
            MemberId::new(1),
            ProviderId::new(1),
            DateFixtures::service_datetime(),
            DateFixtures::submission_datetime(),
            ClaimType::Hospital,
            "Appendicectomy",
            dec!(1200.00),
        )
        .with_mbs_item("30390")
        .with_amounts(dec!(334.05), dec!(615.95), dec!(250.00))
        .with_excess_applied(dec!(250.00))
        .with_status(ClaimStatus::Approved)
        .with_processed_date(Utc.with_ymd_and_hms(2024, 3, 20, 10, 0, 0).unwrap())
    }

    /// A fully insurer-paid dental claim with no gap
    pub fn paid_dental_claim() -> Claim {
        let service = Utc.with_ymd_and_hms(2024, 2, 5, 11, 0, 0).unwrap();
        Claim::new(
            "CL-20240205-00044".parse().unwrap(),
            PolicyId::new(1),
            MemberId::new(1),
            ProviderId::new(2),
            service,
            service,
            ClaimType::Dental,
            "Periodic examination",
            dec!(120.00),
        )
        .with_amounts(dec!(0.00), dec!(120.00), dec!(0.00))
        .with_status(ClaimStatus::Paid)
        .with_payment_date(Utc.with_ymd_and_hms(2024, 2, 7, 9, 0, 0).unwrap())
    }
}

/// Fixture for premium payment test data
pub struct PaymentFixtures;

impl PaymentFixtures {
    /// A successful February direct debit covering the calendar month
    pub fn february_direct_debit() -> PremiumPayment {
        PremiumPayment::new(
            PolicyId::new(1),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            dec!(200.00),
            PaymentMethod::DirectDebit,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        )
        .with_reference("DD-83920174")
    }

    /// A single-day coverage period (start equal to end)
    pub fn single_day_period() -> PremiumPayment {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        PremiumPayment::new(
            PolicyId::new(1),
            day,
            dec!(6.58),
            PaymentMethod::Bpay,
            day,
            day,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_deterministic() {
        assert_eq!(
            MemberFixtures::john_smith().member_number,
            MemberFixtures::john_smith().member_number
        );
        assert_eq!(
            ClaimFixtures::approved_hospital_claim().claim_number,
            ClaimFixtures::approved_hospital_claim().claim_number
        );
    }

    #[test]
    fn test_claim_fixtures_reconcile() {
        assert!(ClaimFixtures::approved_hospital_claim().amounts_reconcile());
        assert!(ClaimFixtures::paid_dental_claim().amounts_reconcile());
    }

    #[test]
    fn test_single_day_period_fixture_is_ordered() {
        assert!(PaymentFixtures::single_day_period().period_is_ordered());
    }
}

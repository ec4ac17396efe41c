//! Property-based test generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants (reconciled claim splits, ordered date pairs, valid
//! claim numbers).

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::ClaimNumber;
use domain_records::{Gender, HospitalTier, PlanType, RebateTier, State};

/// Strategy for generating Australian states
pub fn state_strategy() -> impl Strategy<Value = State> {
    prop_oneof![
        Just(State::NSW),
        Just(State::VIC),
        Just(State::QLD),
        Just(State::WA),
        Just(State::SA),
        Just(State::TAS),
        Just(State::ACT),
        Just(State::NT),
    ]
}

/// Strategy for generating genders
pub fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Other)]
}

/// Strategy for generating rebate tiers
pub fn rebate_tier_strategy() -> impl Strategy<Value = RebateTier> {
    prop_oneof![
        Just(RebateTier::Base),
        Just(RebateTier::Tier1),
        Just(RebateTier::Tier2),
        Just(RebateTier::Tier3),
    ]
}

/// Strategy for generating plan types
pub fn plan_type_strategy() -> impl Strategy<Value = PlanType> {
    prop_oneof![
        Just(PlanType::Hospital),
        Just(PlanType::Extras),
        Just(PlanType::Combined),
    ]
}

/// Strategy for generating hospital tiers
pub fn hospital_tier_strategy() -> impl Strategy<Value = HospitalTier> {
    prop_oneof![
        Just(HospitalTier::Basic),
        Just(HospitalTier::Bronze),
        Just(HospitalTier::Silver),
        Just(HospitalTier::Gold),
    ]
}

/// Strategy for generating monetary amounts in cents, as `Decimal`
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating four-digit postcodes
pub fn postcode_strategy() -> impl Strategy<Value = String> {
    (800u32..9999u32).prop_map(|n| format!("{:04}", n))
}

/// Strategy for generating calendar dates between 1940 and 2030
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..33_000i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(1940, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for generating an ordered date pair (start ≤ end)
pub fn ordered_date_pair_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..3650i64)
        .prop_map(|(start, span)| (start, start + Duration::days(span)))
}

/// Strategy for generating valid claim numbers
pub fn claim_number_strategy() -> impl Strategy<Value = ClaimNumber> {
    (date_strategy(), 0u32..=99_999u32)
        .prop_map(|(date, sequence)| ClaimNumber::new(date, sequence).unwrap())
}

/// Strategy for a reconciled (charged, medicare, insurance, gap) split:
/// the three components are carved out of the charge so they always sum to it
pub fn reconciled_amounts_strategy() -> impl Strategy<Value = (Decimal, Decimal, Decimal, Decimal)>
{
    (0i64..1_000_000i64, 0u32..=100u32, 0u32..=100u32).prop_map(
        |(charged_cents, medicare_pct, insurance_pct)| {
            let medicare_cents = charged_cents * medicare_pct as i64 / 100;
            let remaining = charged_cents - medicare_cents;
            let insurance_cents = remaining * insurance_pct as i64 / 100;
            let gap_cents = remaining - insurance_cents;
            (
                Decimal::new(charged_cents, 2),
                Decimal::new(medicare_cents, 2),
                Decimal::new(insurance_cents, 2),
                Decimal::new(gap_cents, 2),
            )
        },
    )
}

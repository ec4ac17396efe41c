//! Coverage plan entity
//!
//! Plans carry three structured sub-fields (excess options, waiting periods,
//! coverage details) that the schema stores as JSON text columns rather than
//! normalized sub-tables. In memory they are fully typed; the row projection
//! JSON-encodes them, and an empty collection projects to NULL.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::RecordError;
use crate::record::TableRecord;

/// Plan product type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanType {
    Hospital,
    Extras,
    Combined,
}

/// Hospital cover tiers under the Australian PHI reforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HospitalTier {
    Basic,
    Bronze,
    Silver,
    Gold,
}

/// Waiting periods by treatment category, in whole months
///
/// Categories are open-ended strings; the standard set covers at least
/// `general`, `pre_existing` and `pregnancy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaitingPeriods(BTreeMap<String, u32>);

impl WaitingPeriods {
    pub const GENERAL: &'static str = "general";
    pub const PRE_EXISTING: &'static str = "pre_existing";
    pub const PREGNANCY: &'static str = "pregnancy";

    /// Creates an empty set of waiting periods
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard waiting periods: general 2, pre-existing 12, pregnancy 12,
    /// psychiatric 2, rehabilitation 2
    pub fn standard() -> Self {
        let mut periods = Self::new();
        periods.set(Self::GENERAL, 2);
        periods.set(Self::PRE_EXISTING, 12);
        periods.set(Self::PREGNANCY, 12);
        periods.set("psychiatric", 2);
        periods.set("rehabilitation", 2);
        periods
    }

    /// Sets the waiting period for a category
    pub fn set(&mut self, category: impl Into<String>, months: u32) {
        self.0.insert(category.into(), months);
    }

    /// Returns the waiting period for a category, if defined
    pub fn months_for(&self, category: &str) -> Option<u32> {
        self.0.get(category).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Feature flags and arbitrary coverage detail for a plan
///
/// Holds booleans for simple features (`private_room`, `ambulance_cover`)
/// and nested JSON for per-service limits on extras plans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageDetails(serde_json::Map<String, Value>);

impl CoverageDetails {
    pub const PRIVATE_ROOM: &'static str = "private_room";
    pub const AMBULANCE_COVER: &'static str = "ambulance_cover";

    /// Creates an empty detail map
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a boolean feature flag
    pub fn set_flag(&mut self, feature: impl Into<String>, covered: bool) {
        self.0.insert(feature.into(), Value::Bool(covered));
    }

    /// Sets an arbitrary detail value (e.g. per-service annual limits)
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Returns a boolean flag, if present and boolean
    pub fn flag(&self, feature: &str) -> Option<bool> {
        self.0.get(feature).and_then(Value::as_bool)
    }

    /// Returns the raw detail value, if present
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A health insurance coverage plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoveragePlan {
    /// Product code (e.g. "GOLD-HOSP")
    pub plan_code: String,
    pub plan_name: String,
    pub plan_type: PlanType,
    /// Hospital tier; None for extras-only plans
    pub hospital_tier: Option<HospitalTier>,
    pub monthly_premium: Decimal,
    pub annual_premium: Decimal,
    /// Selectable excess amounts, lowest first
    pub excess_options: Vec<Decimal>,
    pub waiting_periods: WaitingPeriods,
    pub coverage_details: CoverageDetails,
    pub is_active: bool,
    pub effective_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl CoveragePlan {
    /// Creates a plan with the required product fields
    pub fn new(
        plan_code: impl Into<String>,
        plan_name: impl Into<String>,
        plan_type: PlanType,
        monthly_premium: Decimal,
        annual_premium: Decimal,
        effective_date: NaiveDate,
    ) -> Self {
        Self {
            plan_code: plan_code.into(),
            plan_name: plan_name.into(),
            plan_type,
            hospital_tier: None,
            monthly_premium,
            annual_premium,
            excess_options: Vec::new(),
            waiting_periods: WaitingPeriods::new(),
            coverage_details: CoverageDetails::new(),
            is_active: true,
            effective_date,
            end_date: None,
        }
    }

    /// Sets the hospital tier
    pub fn with_hospital_tier(mut self, tier: HospitalTier) -> Self {
        self.hospital_tier = Some(tier);
        self
    }

    /// Sets the excess options
    pub fn with_excess_options(mut self, options: Vec<Decimal>) -> Self {
        self.excess_options = options;
        self
    }

    /// Sets the waiting periods
    pub fn with_waiting_periods(mut self, periods: WaitingPeriods) -> Self {
        self.waiting_periods = periods;
        self
    }

    /// Sets the coverage details
    pub fn with_coverage_details(mut self, details: CoverageDetails) -> Self {
        self.coverage_details = details;
        self
    }

    /// Sets the end date
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Marks the plan closed to new business
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Row for the `CoveragePlans` table
///
/// The three structured sub-fields are JSON text; NULL when the underlying
/// collection is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoveragePlanRow {
    pub plan_code: String,
    pub plan_name: String,
    pub plan_type: PlanType,
    pub hospital_tier: Option<HospitalTier>,
    pub monthly_premium: Decimal,
    pub annual_premium: Decimal,
    pub excess_options: Option<String>,
    pub waiting_periods: Option<String>,
    pub coverage_details: Option<String>,
    pub is_active: bool,
    pub effective_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl TableRecord for CoveragePlan {
    type Row = CoveragePlanRow;

    const TABLE: &'static str = "CoveragePlans";

    const COLUMNS: &'static [&'static str] = &[
        "PlanCode",
        "PlanName",
        "PlanType",
        "HospitalTier",
        "MonthlyPremium",
        "AnnualPremium",
        "ExcessOptions",
        "WaitingPeriods",
        "CoverageDetails",
        "IsActive",
        "EffectiveDate",
        "EndDate",
    ];

    fn to_row(&self) -> Result<CoveragePlanRow, RecordError> {
        let excess_options = if self.excess_options.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&self.excess_options)?)
        };
        let waiting_periods = if self.waiting_periods.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&self.waiting_periods)?)
        };
        let coverage_details = if self.coverage_details.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&self.coverage_details)?)
        };

        Ok(CoveragePlanRow {
            plan_code: self.plan_code.clone(),
            plan_name: self.plan_name.clone(),
            plan_type: self.plan_type,
            hospital_tier: self.hospital_tier,
            monthly_premium: self.monthly_premium,
            annual_premium: self.annual_premium,
            excess_options,
            waiting_periods,
            coverage_details,
            is_active: self.is_active,
            effective_date: self.effective_date,
            end_date: self.end_date,
        })
    }
}

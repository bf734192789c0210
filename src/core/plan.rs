use serde::Serialize;

use super::allocation::{AllocationResult, allocate};
use super::error::Result;
use super::profile::RiskProfile;
use super::projection::{Projection, project};
use super::reference::ReferenceDataProvider;

/// Allocation plus its projection for one set of investor inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub allocation: AllocationResult,
    pub projection: Projection,
}

/// Headline numbers of a plan at a given age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioPoint {
    pub age: u32,
    pub blend_factor: f64,
    pub one_year_total: f64,
    pub five_year_total: f64,
    pub five_year_gain: f64,
}

pub fn build_plan(
    age: u32,
    risk_profile: RiskProfile,
    total_investment: f64,
    reference: &dyn ReferenceDataProvider,
) -> Result<Plan> {
    let allocation = allocate(age, risk_profile, reference)?;
    let projection = project(&allocation, reference.expected_returns(), total_investment)?;
    Ok(Plan {
        allocation,
        projection,
    })
}

/// Builds a plan for every age in `ages`, keeping only the summary figures.
pub fn scenario_sweep(
    ages: impl IntoIterator<Item = u32>,
    risk_profile: RiskProfile,
    total_investment: f64,
    reference: &dyn ReferenceDataProvider,
) -> Result<Vec<ScenarioPoint>> {
    ages.into_iter()
        .map(|age| -> Result<ScenarioPoint> {
            let plan = build_plan(age, risk_profile, total_investment, reference)?;
            let summary = plan.projection.summary;
            Ok(ScenarioPoint {
                age,
                blend_factor: plan.allocation.blend_factor,
                one_year_total: summary.one_year_total,
                five_year_total: summary.five_year_total,
                five_year_gain: summary.five_year_gain,
            })
        })
        .collect()
}

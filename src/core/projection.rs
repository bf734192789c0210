//! Projects invested amounts forward with annual compounding.
use serde::Serialize;
use tracing::debug;

use super::allocation::AllocationResult;
use super::asset::AssetClass;
use super::error::{EngineError, Result};
use super::numeric::round_dp;
use super::reference::ExpectedReturnTable;

/// Per-asset invested amount and projected values, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub asset: AssetClass,
    pub weight: f64,
    pub expected_return: f64,
    pub amount: f64,
    pub one_year: f64,
    pub five_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_investment: f64,
    /// Sum of the rounded per-asset amounts; may differ from
    /// `total_investment` by up to one unit per asset.
    pub invested_total: f64,
    pub one_year_total: f64,
    pub five_year_total: f64,
    pub one_year_gain: f64,
    pub five_year_gain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub rows: Vec<ProjectionRow>,
    pub summary: PortfolioSummary,
}

/// Value of `amount` after `years` of annual compounding at `rate_pct` percent.
pub fn compound(amount: f64, rate_pct: f64, years: i32) -> f64 {
    amount * (1.0 + rate_pct / 100.0).powi(years)
}

/// Splits `total_investment` by the allocation weights and projects each
/// slice one and five years out.
pub fn project(
    allocation: &AllocationResult,
    returns: &ExpectedReturnTable,
    total_investment: f64,
) -> Result<Projection> {
    if !total_investment.is_finite() || total_investment <= 0.0 {
        return Err(EngineError::Domain(format!(
            "total investment must be a positive amount, got {total_investment}"
        )));
    }

    let rows = allocation
        .entries
        .iter()
        .map(|entry| -> Result<ProjectionRow> {
            let rate = *returns
                .get(&entry.asset)
                .ok_or(EngineError::MissingReturnData(entry.asset))?;
            let amount = round_dp(entry.weight / 100.0 * total_investment, 0);
            Ok(ProjectionRow {
                asset: entry.asset,
                weight: entry.weight,
                expected_return: rate,
                amount,
                one_year: round_dp(compound(amount, rate, 1), 0),
                five_year: round_dp(compound(amount, rate, 5), 0),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let invested_total: f64 = rows.iter().map(|r| r.amount).sum();
    let one_year_total: f64 = rows.iter().map(|r| r.one_year).sum();
    let five_year_total: f64 = rows.iter().map(|r| r.five_year).sum();

    let overflowed = rows
        .iter()
        .flat_map(|r| [r.amount, r.one_year, r.five_year])
        .chain([invested_total, one_year_total, five_year_total])
        .any(|v| !v.is_finite());
    if overflowed {
        return Err(EngineError::Domain(format!(
            "projected values for a total investment of {total_investment} are not finite"
        )));
    }
    debug!(
        total_investment,
        invested_total, one_year_total, five_year_total, "Projected portfolio"
    );

    Ok(Projection {
        rows,
        summary: PortfolioSummary {
            total_investment,
            invested_total,
            one_year_total,
            five_year_total,
            one_year_gain: one_year_total - total_investment,
            five_year_gain: five_year_total - total_investment,
        },
    })
}

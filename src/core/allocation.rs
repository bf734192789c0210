//! Age and risk aware allocation weighting.
//!
//! The base weight vector for a risk profile is blended with the conservative
//! vector by a factor that grows one percentage point per year of age past
//! 25, then renormalized so the weights always sum to 100.
use serde::Serialize;
use tracing::debug;

use super::asset::{ASSET_COUNT, AssetCategory, AssetClass};
use super::error::{EngineError, Result};
use super::numeric::round_dp;
use super::profile::RiskProfile;
use super::reference::{ReferenceDataProvider, WeightVector};

/// Age at which the conservative blend starts.
pub const BLEND_START_AGE: u32 = 25;

/// Weight of a single asset class, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationEntry {
    pub asset: AssetClass,
    pub weight: f64,
}

/// Normalized allocation, one entry per asset class in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationResult {
    pub age: u32,
    pub risk_profile: RiskProfile,
    pub blend_factor: f64,
    pub entries: Vec<AllocationEntry>,
}

impl AllocationResult {
    pub fn weight_of(&self, asset: AssetClass) -> f64 {
        self.entries
            .iter()
            .find(|e| e.asset == asset)
            .map_or(0.0, |e| e.weight)
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Total weight per broad category, in [`AssetCategory::ALL`] order.
    pub fn category_breakdown(&self) -> Vec<(AssetCategory, f64)> {
        AssetCategory::ALL
            .iter()
            .map(|category| {
                let total = self
                    .entries
                    .iter()
                    .filter(|e| e.asset.category() == *category)
                    .map(|e| e.weight)
                    .sum();
                (*category, round_dp(total, 2))
            })
            .collect()
    }
}

/// Fraction of the conservative vector mixed into the base weights.
///
/// Zero up to [`BLEND_START_AGE`], then 0.01 per year, capped at 1 so the
/// base weights never receive a negative coefficient.
pub fn blend_factor(age: u32) -> f64 {
    ((f64::from(age) - f64::from(BLEND_START_AGE)) / 100.0).clamp(0.0, 1.0)
}

/// Computes the recommended weight per asset class for an investor.
pub fn allocate(
    age: u32,
    risk_profile: RiskProfile,
    reference: &dyn ReferenceDataProvider,
) -> Result<AllocationResult> {
    let adjust = blend_factor(age);
    let blended = blend(
        reference.base_weights(risk_profile),
        reference.conservative_weights(),
        adjust,
    );

    let total: f64 = blended.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(EngineError::Domain(format!(
            "blended weights for {risk_profile} at age {age} sum to {total}, cannot normalize"
        )));
    }
    debug!(age, %risk_profile, adjust, total, "Blended allocation weights");

    let entries = AssetClass::ALL
        .iter()
        .zip(blended.iter())
        .map(|(asset, weight)| AllocationEntry {
            asset: *asset,
            weight: round_dp(weight / total * 100.0, 2),
        })
        .collect();

    Ok(AllocationResult {
        age,
        risk_profile,
        blend_factor: adjust,
        entries,
    })
}

fn blend(base: &WeightVector, conservative: &WeightVector, adjust: f64) -> WeightVector {
    let mut blended = [0.0; ASSET_COUNT];
    for (out, (b, c)) in blended.iter_mut().zip(base.iter().zip(conservative.iter())) {
        *out = b * (1.0 - adjust) + adjust * c;
    }
    blended
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference::ReferenceData;

    fn weights(result: &AllocationResult) -> Vec<f64> {
        result.entries.iter().map(|e| e.weight).collect()
    }

    #[test]
    fn test_blend_factor() {
        assert_eq!(blend_factor(20), 0.0);
        assert_eq!(blend_factor(25), 0.0);
        assert_eq!(blend_factor(30), 0.05);
        assert_eq!(blend_factor(70), 0.45);
        assert_eq!(blend_factor(125), 1.0);
        assert_eq!(blend_factor(400), 1.0);
    }

    #[test]
    fn test_age_25_returns_base_weights() {
        let data = ReferenceData::builtin();
        for profile in RiskProfile::ALL {
            let result = allocate(25, profile, data).unwrap();
            assert_eq!(weights(&result), data.base_weights(profile).to_vec());
            assert_eq!(result.blend_factor, 0.0);
        }
    }

    #[test]
    fn test_young_investor_gets_base_weights() {
        let data = ReferenceData::builtin();
        let result = allocate(18, RiskProfile::High, data).unwrap();
        assert_eq!(weights(&result), data.base_weights(RiskProfile::High).to_vec());
    }

    #[test]
    fn test_high_risk_at_30() {
        let result = allocate(30, RiskProfile::High, ReferenceData::builtin()).unwrap();
        assert_eq!(result.blend_factor, 0.05);
        assert_eq!(result.entries.len(), 14);
        assert!((result.total_weight() - 100.0).abs() <= 0.1);
        // 20 * 0.95 + 5 * 0.05
        assert!((result.weight_of(AssetClass::LargeCapEquity) - 19.25).abs() < 1e-9);
        // 10 * 0.95 + 25 * 0.05
        assert!((result.weight_of(AssetClass::DebtFunds) - 10.75).abs() < 1e-9);
    }

    #[test]
    fn test_low_risk_never_holds_crypto() {
        for age in [20, 25, 45, 70, 90] {
            let result = allocate(age, RiskProfile::Low, ReferenceData::builtin()).unwrap();
            assert_eq!(result.weight_of(AssetClass::CryptoRegulated), 0.0);
        }
    }

    #[test]
    fn test_moderate_at_70_shifts_conservative() {
        let result = allocate(70, RiskProfile::Moderate, ReferenceData::builtin()).unwrap();
        assert_eq!(result.blend_factor, 0.45);
        assert!((result.total_weight() - 100.0).abs() <= 0.1);
        assert!((result.weight_of(AssetClass::DebtFunds) - 21.15).abs() < 1e-9);
        assert!((result.weight_of(AssetClass::LargeCapEquity) - 12.15).abs() < 1e-9);
        assert!((result.weight_of(AssetClass::GovtBonds) - 13.4).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_age_saturates_at_conservative() {
        let data = ReferenceData::builtin();
        for age in [125, 200, u32::MAX] {
            let result = allocate(age, RiskProfile::High, data).unwrap();
            assert_eq!(weights(&result), data.conservative_weights().to_vec());
            assert!(result.entries.iter().all(|e| e.weight >= 0.0));
        }
    }

    #[test]
    fn test_unnormalized_tables_are_renormalized() {
        let mut data = ReferenceData::default();
        data.base_weights.high = [2.0; 14];
        let result = allocate(25, RiskProfile::High, &data).unwrap();
        for entry in &result.entries {
            assert!((entry.weight - 7.14).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_weights_is_domain_error() {
        let mut data = ReferenceData::default();
        data.base_weights.low = [0.0; 14];
        let err = allocate(22, RiskProfile::Low, &data).unwrap_err();
        assert!(matches!(err, EngineError::Domain(_)));
    }

    #[test]
    fn test_category_breakdown() {
        let result = allocate(25, RiskProfile::High, ReferenceData::builtin()).unwrap();
        let breakdown = result.category_breakdown();
        assert_eq!(breakdown[0], (AssetCategory::Equity, 57.0));
        assert_eq!(breakdown[1], (AssetCategory::Debt, 20.0));
        assert_eq!(breakdown[2], (AssetCategory::Hybrid, 3.0));
        assert_eq!(breakdown[3], (AssetCategory::Alternative, 20.0));
    }

    #[test]
    fn test_allocate_is_deterministic() {
        let a = allocate(47, RiskProfile::Moderate, ReferenceData::builtin()).unwrap();
        let b = allocate(47, RiskProfile::Moderate, ReferenceData::builtin()).unwrap();
        assert_eq!(a, b);
    }
}

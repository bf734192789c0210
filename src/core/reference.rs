//! Immutable reference data: base weight tables, the conservative vector
//! and the expected-return table.
//!
//! The engines never read globals directly; they go through
//! [`ReferenceDataProvider`], which is implemented by [`ReferenceData`].
//! The built-in tables live in a process-wide [`LazyLock`] and can be
//! overridden piecewise from the config file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::warn;

use super::asset::{ASSET_COUNT, AssetClass};
use super::error::{EngineError, Result};
use super::profile::RiskProfile;

/// One non-negative weight per asset class, in catalog order.
pub type WeightVector = [f64; ASSET_COUNT];

/// Annualized expected return, in percent, per asset class.
pub type ExpectedReturnTable = BTreeMap<AssetClass, f64>;

const HIGH_WEIGHTS: WeightVector = [
    20.0, 18.0, 10.0, 8.0, 5.0, 10.0, 2.0, 5.0, 4.0, 3.0, 5.0, 3.0, 4.0, 3.0,
];
const MODERATE_WEIGHTS: WeightVector = [
    18.0, 12.0, 18.0, 8.0, 5.0, 8.0, 5.0, 8.0, 3.0, 0.0, 5.0, 5.0, 3.0, 2.0,
];
const LOW_WEIGHTS: WeightVector = [
    10.0, 5.0, 25.0, 10.0, 5.0, 5.0, 10.0, 15.0, 3.0, 0.0, 5.0, 5.0, 1.0, 1.0,
];
const CONSERVATIVE_WEIGHTS: WeightVector = [
    5.0, 3.0, 25.0, 10.0, 5.0, 3.0, 10.0, 20.0, 2.0, 0.0, 5.0, 4.0, 2.0, 6.0,
];

const EXPECTED_RETURNS: [(AssetClass, f64); ASSET_COUNT] = [
    (AssetClass::LargeCapEquity, 10.0),
    (AssetClass::MidSmallCapEquity, 13.0),
    (AssetClass::DebtFunds, 7.0),
    (AssetClass::GoldEtf, 6.0),
    (AssetClass::ReitsInvits, 8.0),
    (AssetClass::InternationalEquity, 9.0),
    (AssetClass::CashLiquid, 4.0),
    (AssetClass::GovtBonds, 6.0),
    (AssetClass::Commodities, 8.0),
    (AssetClass::CryptoRegulated, 15.0),
    (AssetClass::IndexFunds, 9.0),
    (AssetClass::HybridFunds, 8.0),
    (AssetClass::ThematicFunds, 11.0),
    (AssetClass::CorporateBonds, 7.0),
];

static BUILTIN: LazyLock<ReferenceData> = LazyLock::new(|| ReferenceData {
    base_weights: BaseWeightTable::default(),
    conservative_weights: CONSERVATIVE_WEIGHTS,
    expected_returns: EXPECTED_RETURNS.into_iter().collect(),
});

/// Read-only access to the tables the engines consume.
pub trait ReferenceDataProvider: Send + Sync {
    fn base_weights(&self, profile: RiskProfile) -> &WeightVector;
    fn conservative_weights(&self) -> &WeightVector;
    fn expected_returns(&self) -> &ExpectedReturnTable;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseWeightTable {
    pub high: WeightVector,
    pub moderate: WeightVector,
    pub low: WeightVector,
}

impl Default for BaseWeightTable {
    fn default() -> Self {
        BaseWeightTable {
            high: HIGH_WEIGHTS,
            moderate: MODERATE_WEIGHTS,
            low: LOW_WEIGHTS,
        }
    }
}

impl BaseWeightTable {
    pub fn get(&self, profile: RiskProfile) -> &WeightVector {
        match profile {
            RiskProfile::High => &self.high,
            RiskProfile::Moderate => &self.moderate,
            RiskProfile::Low => &self.low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub base_weights: BaseWeightTable,
    pub conservative_weights: WeightVector,
    pub expected_returns: ExpectedReturnTable,
}

impl Default for ReferenceData {
    fn default() -> Self {
        ReferenceData::builtin().clone()
    }
}

impl ReferenceData {
    /// The embedded tables, built once per process.
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }

    /// Checks that every weight is finite and non-negative and every return
    /// is finite and above -100%. Tables that do not sum to 100 are allowed
    /// since the allocation engine renormalizes, but they are logged.
    pub fn validate(&self) -> Result<()> {
        let vectors = RiskProfile::ALL
            .iter()
            .map(|p| (p.to_string(), self.base_weights.get(*p)))
            .chain(std::iter::once((
                "Conservative".to_string(),
                &self.conservative_weights,
            )));

        for (label, weights) in vectors {
            for (asset, weight) in AssetClass::ALL.iter().zip(weights.iter()) {
                if !weight.is_finite() || *weight < 0.0 {
                    return Err(EngineError::ReferenceData(format!(
                        "{label} weight for {asset} must be a finite non-negative number, got {weight}"
                    )));
                }
            }
            let total: f64 = weights.iter().sum();
            if (total - 100.0).abs() > 0.1 {
                warn!(table = %label, total, "Weight table does not sum to 100");
            }
        }

        for (asset, rate) in &self.expected_returns {
            if !rate.is_finite() || *rate <= -100.0 {
                return Err(EngineError::ReferenceData(format!(
                    "expected return for {asset} must be finite and above -100%, got {rate}"
                )));
            }
        }

        Ok(())
    }
}

impl ReferenceDataProvider for ReferenceData {
    fn base_weights(&self, profile: RiskProfile) -> &WeightVector {
        self.base_weights.get(profile)
    }

    fn conservative_weights(&self) -> &WeightVector {
        &self.conservative_weights
    }

    fn expected_returns(&self) -> &ExpectedReturnTable {
        &self.expected_returns
    }
}

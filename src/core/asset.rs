//! Asset class catalog

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::error::EngineError;

/// Number of entries in the asset catalog.
pub const ASSET_COUNT: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AssetClass {
    #[serde(rename = "Large Cap Equity")]
    LargeCapEquity,
    #[serde(rename = "Mid/Small Cap Equity")]
    MidSmallCapEquity,
    #[serde(rename = "Debt Funds")]
    DebtFunds,
    #[serde(rename = "Gold ETF")]
    GoldEtf,
    #[serde(rename = "REITs/InvITs")]
    ReitsInvits,
    #[serde(rename = "International Equity")]
    InternationalEquity,
    #[serde(rename = "Cash/Liquid")]
    CashLiquid,
    #[serde(rename = "Govt Bonds")]
    GovtBonds,
    #[serde(rename = "Commodities")]
    Commodities,
    #[serde(rename = "Crypto (Regulated)")]
    CryptoRegulated,
    #[serde(rename = "Index Funds")]
    IndexFunds,
    #[serde(rename = "Hybrid Funds")]
    HybridFunds,
    #[serde(rename = "Thematic Funds")]
    ThematicFunds,
    #[serde(rename = "Corporate Bonds")]
    CorporateBonds,
}

impl AssetClass {
    /// The catalog, in the order every weight vector follows.
    pub const ALL: [AssetClass; ASSET_COUNT] = [
        AssetClass::LargeCapEquity,
        AssetClass::MidSmallCapEquity,
        AssetClass::DebtFunds,
        AssetClass::GoldEtf,
        AssetClass::ReitsInvits,
        AssetClass::InternationalEquity,
        AssetClass::CashLiquid,
        AssetClass::GovtBonds,
        AssetClass::Commodities,
        AssetClass::CryptoRegulated,
        AssetClass::IndexFunds,
        AssetClass::HybridFunds,
        AssetClass::ThematicFunds,
        AssetClass::CorporateBonds,
    ];

    /// Position of this asset in the catalog, and so in every [`WeightVector`].
    ///
    /// [`WeightVector`]: super::reference::WeightVector
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            AssetClass::LargeCapEquity => "Large Cap Equity",
            AssetClass::MidSmallCapEquity => "Mid/Small Cap Equity",
            AssetClass::DebtFunds => "Debt Funds",
            AssetClass::GoldEtf => "Gold ETF",
            AssetClass::ReitsInvits => "REITs/InvITs",
            AssetClass::InternationalEquity => "International Equity",
            AssetClass::CashLiquid => "Cash/Liquid",
            AssetClass::GovtBonds => "Govt Bonds",
            AssetClass::Commodities => "Commodities",
            AssetClass::CryptoRegulated => "Crypto (Regulated)",
            AssetClass::IndexFunds => "Index Funds",
            AssetClass::HybridFunds => "Hybrid Funds",
            AssetClass::ThematicFunds => "Thematic Funds",
            AssetClass::CorporateBonds => "Corporate Bonds",
        }
    }

    /// Short snake_case alias accepted on the command line and in config keys.
    pub fn key(self) -> &'static str {
        match self {
            AssetClass::LargeCapEquity => "large_cap_equity",
            AssetClass::MidSmallCapEquity => "mid_small_cap_equity",
            AssetClass::DebtFunds => "debt_funds",
            AssetClass::GoldEtf => "gold_etf",
            AssetClass::ReitsInvits => "reits_invits",
            AssetClass::InternationalEquity => "international_equity",
            AssetClass::CashLiquid => "cash_liquid",
            AssetClass::GovtBonds => "govt_bonds",
            AssetClass::Commodities => "commodities",
            AssetClass::CryptoRegulated => "crypto_regulated",
            AssetClass::IndexFunds => "index_funds",
            AssetClass::HybridFunds => "hybrid_funds",
            AssetClass::ThematicFunds => "thematic_funds",
            AssetClass::CorporateBonds => "corporate_bonds",
        }
    }

    pub fn category(self) -> AssetCategory {
        match self {
            AssetClass::LargeCapEquity
            | AssetClass::MidSmallCapEquity
            | AssetClass::InternationalEquity
            | AssetClass::IndexFunds
            | AssetClass::ThematicFunds => AssetCategory::Equity,
            AssetClass::DebtFunds
            | AssetClass::CashLiquid
            | AssetClass::GovtBonds
            | AssetClass::CorporateBonds => AssetCategory::Debt,
            AssetClass::HybridFunds => AssetCategory::Hybrid,
            AssetClass::GoldEtf
            | AssetClass::ReitsInvits
            | AssetClass::Commodities
            | AssetClass::CryptoRegulated => AssetCategory::Alternative,
        }
    }
}

impl Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AssetClass::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s) || a.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::InvalidInput(format!("unknown asset class: {s}")))
    }
}

/// Broad grouping used for the equity/debt split in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AssetCategory {
    Equity,
    Debt,
    Hybrid,
    Alternative,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 4] = [
        AssetCategory::Equity,
        AssetCategory::Debt,
        AssetCategory::Hybrid,
        AssetCategory::Alternative,
    ];

    /// Returns display name and emoji for the category
    pub fn display_info(&self) -> (&'static str, &'static str) {
        match self {
            AssetCategory::Equity => ("Equity", "📈"),
            AssetCategory::Debt => ("Debt", "📉"),
            AssetCategory::Hybrid => ("Hybrid", "📊"),
            AssetCategory::Alternative => ("Alternative", "🪙"),
        }
    }
}

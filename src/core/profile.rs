use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::error::EngineError;

/// Investor-selected aggressiveness tier. Selects the base weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    High,
    Moderate,
    Low,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [RiskProfile::High, RiskProfile::Moderate, RiskProfile::Low];

    /// Short description of how each profile invests.
    pub fn philosophy(&self) -> &'static [&'static str] {
        match self {
            RiskProfile::High => &[
                "Aggressive growth strategy with major equity exposure.",
                "Focused on long-term compounding through diversified equity themes.",
                "Small allocation to gold, bonds, and crypto for balance and optionality.",
            ],
            RiskProfile::Moderate => &[
                "Balanced strategy between equity and debt.",
                "Seeks steady growth with limited drawdowns.",
                "Includes exposure to gold, hybrid, and REITs for stability.",
            ],
            RiskProfile::Low => &[
                "Conservative allocation for capital preservation.",
                "Higher share in bonds, debt, and gold.",
                "Minimal risk assets ensure predictable compounding.",
            ],
        }
    }
}

impl Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RiskProfile::High => "High",
                RiskProfile::Moderate => "Moderate",
                RiskProfile::Low => "Low",
            }
        )
    }
}

impl FromStr for RiskProfile {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(RiskProfile::High),
            "moderate" => Ok(RiskProfile::Moderate),
            "low" => Ok(RiskProfile::Low),
            _ => Err(EngineError::InvalidInput(format!(
                "unknown risk profile '{s}', expected one of High, Moderate, Low"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("HIGH".parse::<RiskProfile>().unwrap(), RiskProfile::High);
        assert_eq!("moderate".parse::<RiskProfile>().unwrap(), RiskProfile::Moderate);
        assert_eq!(" Low ".parse::<RiskProfile>().unwrap(), RiskProfile::Low);
    }

    #[test]
    fn test_unknown_profile_is_invalid_input() {
        let err = "aggressive".parse::<RiskProfile>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
        assert!(err.to_string().contains("aggressive"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for profile in RiskProfile::ALL {
            assert_eq!(profile.to_string().parse::<RiskProfile>().unwrap(), profile);
        }
    }
}

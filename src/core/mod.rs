//! Allocation and projection engines, and the reference data they consume

pub mod allocation;
pub mod asset;
pub mod config;
pub mod error;
pub mod log;
pub mod numeric;
pub mod plan;
pub mod profile;
pub mod projection;
pub mod reference;

// Re-export main types for cleaner imports
pub use allocation::{AllocationEntry, AllocationResult, allocate, blend_factor};
pub use asset::{AssetCategory, AssetClass};
pub use error::EngineError;
pub use plan::{Plan, ScenarioPoint, build_plan, scenario_sweep};
pub use profile::RiskProfile;
pub use projection::{PortfolioSummary, Projection, ProjectionRow, compound, project};
pub use reference::{ExpectedReturnTable, ReferenceData, ReferenceDataProvider, WeightVector};

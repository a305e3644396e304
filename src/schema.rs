use serde::{Deserialize, Serialize};

use crate::numeric::Percent;

// ------------------------------------------------------------
// Rate strategy parameters
// ------------------------------------------------------------
//
// One set of interest-rate-strategy inputs for a single asset,
// exactly as collected from the operator.
//
// IMPORTANT:
// - `None` means the operator skipped an optional field.
//   A skipped field is OMITTED from the rendered fragment,
//   never defaulted to zero.
//
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RateParams {
    pub optimal_utilization_rate: Option<Percent>,
    pub base_variable_borrow_rate: Option<Percent>,
    pub variable_rate_slope1: Option<Percent>,
    pub variable_rate_slope2: Option<Percent>,
}

// ------------------------------------------------------------
// Rate strategy update
// ------------------------------------------------------------
//
// Pairs one asset with the parameter set collected for it.
//
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateStrategyUpdate {
    /// Asset symbol as selected by the operator (e.g. "USDC")
    pub asset: String,

    /// Parameters collected for this asset
    pub params: RateParams,
}

/// Ordered batch of updates, one per selected asset.
///
/// CONTRACT:
/// - Insertion order == selection order == emitted array index.
/// - Built once per collection run, then read-only.
pub type UpdateBatch = Vec<RateStrategyUpdate>;

// ------------------------------------------------------------
// Code artifact
// ------------------------------------------------------------
//
// Container handed to the outer artifact assembler, which merges
// fragments from every feature module into one proposal source
// file. This crate only ever fills `functions`.
//
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CodeArtifact {
    /// Rendered function bodies, one string per function
    pub functions: Vec<String>,
}

use serde::Deserialize;

use crate::error::{GeneratorError, Result};
use crate::numeric::{DEFAULT_RAY_DECIMALS, MAX_RAY_DECIMALS};

// ------------------------------------------------------------
// Root configuration
// ------------------------------------------------------------
//
// Top-level structure loaded from `config.json`.
//
// It defines:
// - The pools a proposal can target
// - The fixed-point scale used by the target protocol
//
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Pools known to the generator
    pub pools: Vec<PoolConfig>,

    /// Fixed-point scale of the target protocol: 100% == 10^ray_decimals.
    ///
    /// Injectable so protocol variants with a different scale
    /// (e.g. 18-decimal wad) can reuse the same core.
    #[serde(default = "default_ray_decimals")]
    pub ray_decimals: u32,
}

fn default_ray_decimals() -> u32 {
    DEFAULT_RAY_DECIMALS
}

// ------------------------------------------------------------
// Pool configuration
// ------------------------------------------------------------
//
// One deployed pool instance.
//
// IMPORTANT:
// - `name` doubles as the asset-library prefix in generated code
//   ("AaveV3Ethereum" -> "AaveV3EthereumAssets.USDC_UNDERLYING"),
//   so it must match the on-chain address-book library name.
//
#[derive(Debug, Deserialize, Clone)]
pub struct PoolConfig {
    /// Pool identifier (e.g. "AaveV3Ethereum")
    pub name: String,

    /// Asset symbols listed on this pool
    pub assets: Vec<String>,
}

/// Resolved target-pool context threaded through collection and
/// rendering. Carries everything a feature module may ask about
/// the pool, so modules never touch the raw config.
#[derive(Debug, Clone)]
pub struct PoolContext {
    pub pool: String,
    pub assets: Vec<String>,
    pub ray_decimals: u32,
}

impl Config {
    /// Resolve a pool by name into a `PoolContext`.
    ///
    /// Validates the fixed-point scale here, once, so the numeric
    /// core can assume it is in range.
    pub fn pool_context(&self, name: &str) -> Result<PoolContext> {
        if self.ray_decimals > MAX_RAY_DECIMALS {
            return Err(GeneratorError::UnsupportedScale(self.ray_decimals));
        }
        self.pools
            .iter()
            .find(|p| p.name == name)
            .map(|p| PoolContext {
                pool: p.name.clone(),
                assets: p.assets.clone(),
                ray_decimals: self.ray_decimals,
            })
            .ok_or_else(|| GeneratorError::UnknownPool(name.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_pool() -> PoolContext {
        PoolContext {
            pool: "AaveV3Ethereum".to_string(),
            assets: vec!["USDC".to_string(), "DAI".to_string(), "WETH".to_string()],
            ray_decimals: DEFAULT_RAY_DECIMALS,
        }
    }

    #[test]
    fn resolves_known_pool() {
        let cfg: Config = serde_json::from_str(
            r#"{"pools":[{"name":"AaveV3Ethereum","assets":["USDC","DAI"]}]}"#,
        )
        .expect("valid config");

        let ctx = cfg.pool_context("AaveV3Ethereum").expect("known pool");
        assert_eq!(ctx.ray_decimals, DEFAULT_RAY_DECIMALS);
        assert_eq!(ctx.assets, vec!["USDC", "DAI"]);

        assert!(matches!(
            cfg.pool_context("AaveV3Mars"),
            Err(GeneratorError::UnknownPool(_))
        ));
    }

    #[test]
    fn rejects_oversized_scale() {
        let cfg: Config = serde_json::from_str(
            r#"{"pools":[{"name":"P","assets":[]}],"ray_decimals":64}"#,
        )
        .expect("valid config");

        assert!(matches!(
            cfg.pool_context("P"),
            Err(GeneratorError::UnsupportedScale(64))
        ));
    }
}

use crate::config::PoolContext;
use crate::error::{GeneratorError, Result};

/// Asset-selection service.
///
/// CONTRACT:
/// - Returns an ORDERED, DEDUPLICATED sequence of asset symbols,
///   each known to the given pool.
/// - May return an empty sequence; an empty selection is valid.
/// - May suspend indefinitely pending operator input.
/// - Never returns a symbol the pool does not list.
///
/// Failures abort the collection that issued the request.
#[async_trait::async_trait]
pub trait AssetSelect: Send + Sync {
    async fn select(&self, message: &str, pool: &PoolContext) -> Result<Vec<String>>;
}

/// Translate an asset symbol into the address-book library
/// reference used in generated code.
///
/// Example:
///     ("USDC", AaveV3Ethereum) -> "AaveV3EthereumAssets.USDC_UNDERLYING"
///
/// Pure; used only during rendering. Unknown assets are a
/// `Translation` error — the generated constant would not exist.
pub fn translate_asset_to_underlying(asset: &str, pool: &PoolContext) -> Result<String> {
    if !pool.assets.iter().any(|a| a == asset) {
        return Err(GeneratorError::Translation {
            asset: asset.to_string(),
            pool: pool.pool.clone(),
        });
    }
    Ok(format!("{}Assets.{}_UNDERLYING", pool.pool, asset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::test_pool;

    #[test]
    fn translates_listed_asset() {
        let pool = test_pool();
        assert_eq!(
            translate_asset_to_underlying("USDC", &pool).expect("listed asset"),
            "AaveV3EthereumAssets.USDC_UNDERLYING"
        );
    }

    #[test]
    fn rejects_unlisted_asset() {
        let pool = test_pool();
        assert!(matches!(
            translate_asset_to_underlying("SHIB", &pool),
            Err(GeneratorError::Translation { .. })
        ));
    }
}

use std::sync::atomic::Ordering;

use crate::codegen::{ArrayFunction, StructLiteral};
use crate::config::PoolContext;
use crate::error::Result;
use crate::metrics::METRICS;
use crate::numeric::Percent;
use crate::prompts::{PercentInput, translate_asset_to_underlying};
use crate::schema::{CodeArtifact, RateParams, RateStrategyUpdate, UpdateBatch};

use super::{FeatureModule, FeatureTag, Services};

/// Solidity type of one emitted array element.
const UPDATE_TYPE: &str = "IAaveV3ConfigEngine.RateStrategyUpdate";

/// Solidity type of the nested parameter struct.
const INPUT_DATA_TYPE: &str = "IAaveV3ConfigEngine.InterestRateInputData";

/// Interest-rate-strategy updates feature.
///
/// Collects one `RateParams` per selected asset, then renders the
/// `rateStrategiesUpdates()` override consumed by the config
/// engine.
pub struct RateUpdates;

/// Collect the four rate-strategy fields for one asset.
///
/// Fields are requested strictly one after another; each prompt
/// suspends until answered. With `required` unset the operator may
/// skip any field, and a skipped field stays skipped (no zero
/// substitution).
///
/// Any prompt failure aborts the whole parameter set.
pub async fn fetch_rate_strategy_params(
    percents: &dyn PercentInput,
    required: bool,
) -> Result<RateParams> {
    let params = RateParams {
        optimal_utilization_rate: percents.percent("optimalUtilizationRate", required).await?,
        base_variable_borrow_rate: percents.percent("baseVariableBorrowRate", required).await?,
        variable_rate_slope1: percents.percent("variableRateSlope1", required).await?,
        variable_rate_slope2: percents.percent("variableRateSlope2", required).await?,
    };

    for field in [
        &params.optimal_utilization_rate,
        &params.base_variable_borrow_rate,
        &params.variable_rate_slope1,
        &params.variable_rate_slope2,
    ] {
        let counter = if field.is_some() {
            &METRICS.fields_collected
        } else {
            &METRICS.fields_skipped
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    Ok(params)
}

/// The emitted parameter struct, with only the PRESENT fields.
///
/// Field-name mapping follows the config engine's input struct:
/// the prompt asks for `optimalUtilizationRate` but the engine
/// field is `optimalUsageRatio`; the three slope/base names pass
/// through unchanged.
fn input_data_literal(params: &RateParams, ray_decimals: u32) -> StructLiteral {
    let mut literal = StructLiteral::new(INPUT_DATA_TYPE);

    let fields: [(&str, &Option<Percent>); 4] = [
        ("optimalUsageRatio", &params.optimal_utilization_rate),
        ("baseVariableBorrowRate", &params.base_variable_borrow_rate),
        ("variableRateSlope1", &params.variable_rate_slope1),
        ("variableRateSlope2", &params.variable_rate_slope2),
    ];

    for (name, value) in fields {
        if let Some(percent) = value {
            literal = literal.field_expr(name, percent.to_ray(ray_decimals));
        }
    }

    literal
}

#[async_trait::async_trait]
impl FeatureModule for RateUpdates {
    type State = UpdateBatch;

    fn tag(&self) -> FeatureTag {
        FeatureTag::RateUpdates
    }

    fn description(&self) -> &'static str {
        "RateStrategiesUpdates"
    }

    /// Interactive collection phase.
    ///
    /// One batch entry per selected asset, in selection order.
    /// The batch under construction is the only state; it is
    /// dropped on the first failure, so a partial batch can never
    /// escape.
    async fn cli(&self, pool: &PoolContext, services: &Services) -> Result<UpdateBatch> {
        println!("Fetching information for RatesUpdate on {}", pool.pool);

        let assets = services
            .assets
            .select("Select the assets you want to amend", pool)
            .await?;
        METRICS
            .assets_selected
            .fetch_add(assets.len(), Ordering::Relaxed);

        let mut batch: UpdateBatch = Vec::with_capacity(assets.len());
        for asset in assets {
            println!("Fetching info for {asset}");
            let params = fetch_rate_strategy_params(services.percents.as_ref(), false).await?;
            batch.push(RateStrategyUpdate { asset, params });
        }
        Ok(batch)
    }

    /// Pure rendering phase.
    ///
    /// The declared array length is exactly `batch.len()`; an
    /// empty batch still yields a well-formed function allocating
    /// a zero-length array. Entity translation failures abort with
    /// no partial fragment.
    fn build(&self, pool: &PoolContext, batch: &UpdateBatch) -> Result<CodeArtifact> {
        let mut elements = Vec::with_capacity(batch.len());

        for update in batch {
            let element = StructLiteral::new(UPDATE_TYPE)
                .field_expr(
                    "asset",
                    translate_asset_to_underlying(&update.asset, pool)?,
                )
                .field_struct(
                    "params",
                    input_data_literal(&update.params, pool.ray_decimals),
                );
            elements.push(element);
        }

        let function = ArrayFunction {
            name: "rateStrategiesUpdates".to_string(),
            element_type: UPDATE_TYPE.to_string(),
            array_var: "rateStrategies".to_string(),
            elements,
        };

        Ok(CodeArtifact {
            functions: vec![function.render()],
        })
    }
}

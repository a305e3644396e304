//! Feature module registry and dispatcher
//!
//! A feature module is one self-contained slice of a governance
//! proposal: an interactive collection phase (`cli`) followed by a
//! pure rendering phase (`build`). The outer assembler composes
//! the fragments of every selected feature into one proposal
//! source file; this crate ships the rate-strategy feature.

pub mod rate_updates;

use std::sync::Arc;

use crate::config::PoolContext;
use crate::error::{GeneratorError, Result};
use crate::prompts::{AssetSelect, PercentInput};
use crate::schema::CodeArtifact;

/// Stable identifiers for the known feature modules.
///
/// CONTRACT:
/// - Tags are lowercase, kebab-case and stable: they appear on the
///   command line and in assembler manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureTag {
    RateUpdates,
}

impl FeatureTag {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "rate-updates" => Ok(Self::RateUpdates),
            _ => Err(GeneratorError::UnknownFeature(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RateUpdates => "rate-updates",
        }
    }
}

/// Interactive collaborators handed to the collection phase.
///
/// Shared trait objects: the same terminal prompter typically
/// backs both, while tests substitute scripted fakes.
#[derive(Clone)]
pub struct Services {
    pub assets: Arc<dyn AssetSelect>,
    pub percents: Arc<dyn PercentInput>,
}

/// Two-phase contract every feature module implements.
///
/// PHASES:
/// - `cli`: interactive; suspends at every prompt, resumes with
///   that answer before issuing the next. Produces the module's
///   collected state or fails as a whole — never partially.
/// - `build`: pure; state in, code fragment out. Safe to call
///   repeatedly, no interactive behavior, no side effects.
#[async_trait::async_trait]
pub trait FeatureModule: Send + Sync {
    /// State collected by `cli` and consumed by `build`.
    type State;

    fn tag(&self) -> FeatureTag;

    fn description(&self) -> &'static str;

    async fn cli(&self, pool: &PoolContext, services: &Services) -> Result<Self::State>;

    fn build(&self, pool: &PoolContext, state: &Self::State) -> Result<CodeArtifact>;
}

/// Resolve a tag and run both phases of the matching module.
pub async fn run(tag: FeatureTag, pool: &PoolContext, services: &Services) -> Result<CodeArtifact> {
    match tag {
        FeatureTag::RateUpdates => {
            let feature = rate_updates::RateUpdates;
            log::info!(
                "running feature {} ({}) against {}",
                feature.tag().as_str(),
                feature.description(),
                pool.pool
            );
            let batch = feature.cli(pool, services).await?;
            feature.build(pool, &batch)
        }
    }
}

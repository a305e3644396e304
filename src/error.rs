use thiserror::Error;

/// Failures surfaced by the generator core.
///
/// PROPAGATION POLICY:
/// - Every failure aborts the phase it occurred in.
/// - No partial batches, no partial fragments.
/// - Retry decisions belong to the caller, never to this crate.
///
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// An interactive request could not produce a valid value.
    ///
    /// Raised when a prompt collaborator exhausts its input
    /// (e.g. stdin reaches EOF while a value is still required).
    #[error("input validation failed for '{field}': {reason}")]
    InputValidation { field: String, reason: String },

    /// An asset has no underlying reference in the target pool.
    ///
    /// Fatal to rendering: the fragment would reference a library
    /// constant that does not exist on-chain.
    #[error("asset '{asset}' has no underlying reference in pool '{pool}'")]
    Translation { asset: String, pool: String },

    /// Operator text is not a representable decimal percentage.
    #[error("'{0}' is not a valid decimal percentage")]
    InvalidPercent(String),

    /// Pool name not present in the configuration file.
    #[error("unknown pool '{0}'")]
    UnknownPool(String),

    /// Feature tag not present in the registry.
    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    /// Fixed-point scale outside the range the numeric core supports.
    #[error("ray_decimals {0} out of supported range")]
    UnsupportedScale(u32),

    /// Terminal / pipe failure underneath an interactive prompt.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

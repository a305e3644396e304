use crate::error::Result;
use crate::numeric::Percent;

/// Percentage-input service.
///
/// CONTRACT:
/// - `Ok(Some(p))` — operator supplied a valid decimal percentage.
/// - `Ok(None)` — operator skipped the field; only legal when
///   `required` is false. Absence is explicit: consumers must
///   pattern-match, there is no zero-default.
/// - `Err(_)` — no valid value can be produced (fatal to the
///   collection in progress).
///
/// Validation lives behind this trait: implementations never
/// return a malformed value.
#[async_trait::async_trait]
pub trait PercentInput: Send + Sync {
    async fn percent(&self, message: &str, required: bool) -> Result<Option<Percent>>;
}

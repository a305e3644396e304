use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use once_cell::sync::Lazy;

/// Global runtime metrics for one generator invocation.
///
/// Purpose:
/// - Track prompt traffic (issued / rejected inputs)
/// - Track collected vs. skipped fields
/// - Track rendered fragments
///
/// Design:
/// - Lock-free (Atomics)
/// - Observational only: nothing reads these to make decisions
#[derive(Default)]
pub struct RuntimeMetrics {
    // Interactive phase
    pub prompts_issued: AtomicUsize,
    pub inputs_rejected: AtomicUsize,
    pub assets_selected: AtomicUsize,
    pub fields_collected: AtomicUsize,
    pub fields_skipped: AtomicUsize,

    // Rendering phase
    pub fragments_rendered: AtomicUsize,
}

/// Global metrics registry (singleton)
pub static METRICS: Lazy<Arc<RuntimeMetrics>> =
    Lazy::new(|| Arc::new(RuntimeMetrics::default()));

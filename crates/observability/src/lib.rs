//! Shared tracing/logging setup.

pub mod tracing;

/// Initialize process-wide logging. Safe to call more than once; later
/// calls are no-ops.
pub fn init() {
    tracing::init();
}

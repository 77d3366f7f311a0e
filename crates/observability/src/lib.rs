//! Tracing/logging setup shared by storefront binaries.

/// Initialize process-wide tracing, choosing the output format from
/// `STOREFRONT_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

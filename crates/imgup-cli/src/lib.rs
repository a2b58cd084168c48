pub mod notify;
pub mod picker;

/// Format a byte count as kilobytes with one decimal, e.g. "120.5 kb".
pub fn format_size_kb(size_bytes: i64) -> String {
    format!("{:.1} kb", size_bytes as f64 / 1024.0)
}


/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

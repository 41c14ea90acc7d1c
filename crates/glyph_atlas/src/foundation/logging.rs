//! Logging utilities and structured logging support

/// Initialize the logging system
///
/// Defaults to `info` unless `RUST_LOG` says otherwise.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

//! Logging setup
//!
//! Everything logs through the `log` facade. Native builds print through
//! env_logger (default level `info`, override with `RUST_LOG`).

/// Initialize the logging backend. Call once, first thing in `main`.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

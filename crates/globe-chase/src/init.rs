//! Logging setup for applications embedding the chase view.

/// Initializes `env_logger` from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
///
/// # Example
///
/// ```no_run
/// globe_chase::init_logging();
/// log::info!("chase view starting");
/// ```
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("globe-chase logging initialized");
    }
}

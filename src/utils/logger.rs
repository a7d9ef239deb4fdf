use std::env;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Install a global `tracing` subscriber.
///
/// The level comes from the `LOGLEVEL` environment variable (`TRACE`,
/// `DEBUG`, `INFO`, `WARN` or `ERROR`, default `INFO`). Only the first call
/// has any effect, and a subscriber installed elsewhere is left in place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level_from(env::var("LOGLEVEL").ok().as_deref());
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}

pub(crate) fn log_level_from(value: Option<&str>) -> Level {
    match value.map(|v| v.trim().to_uppercase()).as_deref() {
        Some("TRACE") => Level::TRACE,
        Some("DEBUG") => Level::DEBUG,
        Some("WARN") => Level::WARN,
        Some("ERROR") => Level::ERROR,
        _ => Level::INFO,
    }
}

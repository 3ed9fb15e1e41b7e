// Logger setup shared by the sketch binaries.

use crate::error::Error;
use log::LevelFilter;
use std::sync::Once;

/// Which sketch is logging, and how loudly when `RUST_LOG` is unset.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log target of the binary (its crate name, e.g. `walkers`).
    pub sketch: String,
    /// Level for the library and the sketch binary; dependencies stay at warn.
    pub level: LevelFilter,
}

impl LoggingConfig {
    /// Config for the binary currently being built.
    pub fn for_sketch(sketch: &str) -> Self {
        Self { sketch: sketch.to_string(), level: LevelFilter::Info }
    }

    /// env_logger filter used when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> String {
        let level = self.level.as_str().to_ascii_lowercase();
        format!("warn,pixel_sketches={level},{}={level}", self.sketch)
    }

    /// `RUST_LOG` wins when present and non-empty.
    fn filter(&self, from_env: Option<String>) -> String {
        from_env.filter(|f| !f.trim().is_empty()).unwrap_or_else(|| self.default_filter())
    }
}

static INIT: Once = Once::new();

/// Install the stderr logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.filter(std::env::var("RUST_LOG").ok());
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter).format_timestamp_millis();
        // try_init: a test harness may already own the global logger.
        let _ = builder.try_init();
        log::debug!("{} logging with filter {filter}", config.sketch);
    });
}

/// Log the error that ended a sketch, naming whether it stopped startup or
/// the running frame loop.
pub fn report_fatal(err: &Error) {
    log::error!("{}", fatal_message(err));
}

fn fatal_message(err: &Error) -> String {
    if err.during_startup() {
        format!("Failed to initialize: {err}")
    } else {
        format!("Stopped while running: {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_names_library_and_sketch() {
        let cfg = LoggingConfig::for_sketch("walkers");
        assert_eq!(cfg.default_filter(), "warn,pixel_sketches=info,walkers=info");

        let quiet = LoggingConfig { level: LevelFilter::Debug, ..cfg };
        assert_eq!(quiet.default_filter(), "warn,pixel_sketches=debug,walkers=debug");
    }

    #[test]
    fn rust_log_overrides_the_default() {
        let cfg = LoggingConfig::for_sketch("shapes");
        assert_eq!(cfg.filter(Some("trace".into())), "trace");
        assert_eq!(cfg.filter(Some("  ".into())), cfg.default_filter());
        assert_eq!(cfg.filter(None), cfg.default_filter());
    }

    #[test]
    fn loop_failures_are_not_reported_as_startup() {
        let present = Error::WindowUpdate("surface lost".into());
        assert_eq!(
            fatal_message(&present),
            "Stopped while running: Window update error: surface lost"
        );

        let open = Error::WindowInit("no display".into());
        assert!(fatal_message(&open).starts_with("Failed to initialize"));
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::for_sketch("tests"));
        init_logging(LoggingConfig::for_sketch("tests"));
        log::info!("still alive");
    }
}

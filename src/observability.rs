//! This module provides observability and diagnostics for the codec engine.
//!
//! All diagnostics go through the `log` facade, so the library stays silent
//! unless the host installs a logger. `enable_verbose_logging` installs an
//! `env_logger` backend for hosts that do not have one.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::CodecError;

/// Logs a structured key-value metric at debug level under the `mmtf_codec::metrics` target.
///
/// # Example
/// ```
/// use mmtf_codec::log_metric;
/// let count = 4;
/// log_metric!("event"="decode_array", "strategy"=10, "count"=&count);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if log::log_enabled!(target: "mmtf_codec::metrics", log::Level::Debug) {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            log::debug!(target: "mmtf_codec::metrics", "MMTF_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an info-level `env_logger` backend, at most once per process.
///
/// With `log_file`, records are appended to that file instead of stderr. Later
/// calls are no-ops, as is the first call if the host already installed a logger.
pub fn enable_verbose_logging(log_file: Option<&Path>) -> Result<(), CodecError> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}

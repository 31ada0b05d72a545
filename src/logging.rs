use std::fs::File;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable naming a log file path.
pub const LOG_ENV: &str = "FLAGNAMES_LOG";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize tracing on stderr, or in a file when `FLAGNAMES_LOG` is set.
///
/// `RUST_LOG` wins when present. Otherwise the level is `debug` with
/// `trace` requested and `warn` without, so resolver traces stay quiet
/// unless asked for.
///
/// Log files get unique names so concurrent runs don't clobber each other:
/// `{path}.{timestamp}.{pid}`
pub fn init_tracing(trace: bool) {
    let default_level = if trace { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer: BoxedLayer = match log_file() {
        Some(file) => fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_level(true)
            .boxed(),
        None => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .boxed(),
    };

    // A subscriber may already be installed (e.g. by an embedding app).
    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init();
}

/// Open the log file named by `FLAGNAMES_LOG`, if any.
///
/// Falls back to stderr logging when the file can't be created.
fn log_file() -> Option<File> {
    let log_path = std::env::var(LOG_ENV).ok()?;

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    match File::create(&unique_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", unique_path, e);
            None
        }
    }
}

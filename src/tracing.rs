//! Logging setup
//!
//! Two sinks are installed:
//! - stderr, filtered by `RUST_LOG` (default `warn`), e.g.
//!   `RUST_LOG=csvtool::update=debug csvtool people.csv`
//! - `csvtool.log` in the logs dir, rotated daily, always at debug
//!
//! stdout stays reserved for the rendered table.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::Registry, util::SubscriberInitExt, EnvFilter, Layer,
};

const LOG_FILE_PREFIX: &str = "csvtool.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber
pub fn init() {
    let mut layers: Vec<BoxedLayer> = vec![stderr_layer()];
    if let Some(layer) = file_layer() {
        layers.push(layer);
    }

    tracing_subscriber::registry().with(layers).init();
}

fn stderr_layer() -> BoxedLayer {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter)
        .boxed()
}

/// `None` when the logs dir cannot be created
fn file_layer() -> Option<BoxedLayer> {
    let dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            return None;
        }
    };

    let layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
        .with_ansi(false)
        .with_target(true)
        .with_filter(EnvFilter::new("debug"))
        .boxed();
    Some(layer)
}

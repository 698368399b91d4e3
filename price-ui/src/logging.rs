//! Tracing setup driven by the `[logging]` section of the settings file.

use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::settings::LoggingSettings;

/// Filter used when neither a flag, the settings file nor `RUST_LOG` sets one.
pub const DEFAULT_FILTER: &str = "warn";

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(
        &self,
        w: &mut Writer<'_>,
    ) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

/// Picks the filter: `flag`, then `settings.level`, then `RUST_LOG`,
/// then [`DEFAULT_FILTER`].
pub fn resolve_filter(
    flag: Option<&str>,
    settings: &LoggingSettings,
) -> Result<EnvFilter> {
    match flag.or(settings.level.as_deref()) {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log level '{directive}'")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Installs the global subscriber. Call once at startup.
///
/// Console records go to stderr so they never mix with form output on
/// stdout; they are colored only when stderr is a terminal. When
/// `settings.file` is set, records are also appended there without color.
pub fn init_logging(
    flag: Option<&str>,
    settings: &LoggingSettings,
) -> Result<()> {
    let filter = resolve_filter(flag, settings)?;

    let console = settings.console.then(|| {
        fmt::layer()
            .with_timer(LocalTime)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr)
    });

    let file = settings
        .file
        .as_deref()
        .map(open_log_file)
        .transpose()?
        .map(|file| {
            fmt::layer()
                .with_timer(LocalTime)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .context("logging is already initialized")
}

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use tracing::{Event, Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

const DEFAULT_FILTER: &str = "info,charter_core=debug";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

// =============================================================================
// Event format
// =============================================================================

/// `<local time> <LEVEL> <file:line> <fields>`, coloured on a terminal.
struct BookingFmt;

fn level_colour(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

impl<S, N> FormatEvent<S, N> for BookingFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let location = meta
            .file()
            .zip(meta.line())
            .map(|(file, line)| format!("{}:{line}", file.trim_start_matches("src/")));

        if writer.has_ansi_escapes() {
            write!(writer, "{DIM}{timestamp}{RESET} ")?;
            write!(writer, "{}{:>5}{RESET} ", level_colour(meta.level()), meta.level())?;
            if let Some(location) = location {
                write!(writer, "{CYAN}{location}{RESET} ")?;
            }
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
            if let Some(location) = location {
                write!(writer, "{location} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// =============================================================================
// Optional log file
// =============================================================================

type SharedFile = Arc<Mutex<Option<File>>>;

/// Writer target that drops output until a file is attached.
#[derive(Clone)]
struct LogFile(SharedFile);

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), File::flush)
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(lock_file(&self.0))
    }
}

fn lock_file(slot: &SharedFile) -> MutexGuard<'_, Option<File>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// Reload handles
// =============================================================================

type Reloader = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

struct Handles {
    level: Reloader,
    stdout: Reloader,
    file: SharedFile,
}

static HANDLES: OnceLock<Handles> = OnceLock::new();

fn reloader<S>(
    handle: reload::Handle<EnvFilter, S>,
    what: &'static str,
) -> Reloader
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow!("{what} filter reload failed: {e}"))
    })
}

fn handles() -> Result<&'static Handles> {
    match HANDLES.get() {
        Some(handles) => Ok(handles),
        None => bail!("logging not yet initialized"),
    }
}

fn startup_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

// =============================================================================
// Public API
// =============================================================================

/// Installs the global subscriber. Call once, before anything logs.
///
/// The level starts at `RUST_LOG` or `info,charter_core=debug`; the file layer
/// stays silent until [`enable_file_logging`] is called.
pub fn init_logging() {
    let file: SharedFile = Arc::new(Mutex::new(None));

    let (level_filter, level_handle) = reload::Layer::new(startup_filter());
    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(BookingFmt)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(BookingFmt)
        .with_ansi(false)
        .with_writer(LogFile(file.clone()));

    let installed = tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    if installed.is_ok() {
        let _ = HANDLES.set(Handles {
            level: reloader(level_handle, "level"),
            stdout: reloader(stdout_handle, "stdout"),
            file,
        });
    }
}

/// Replaces the active filter. Accepts a bare level or any `EnvFilter`
/// directive.
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(directive).with_context(|| format!("invalid log level '{directive}'"))?;
    (handles()?.level)(filter)
}

/// Mutes or unmutes stdout without touching the file layer.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    let filter = EnvFilter::new(if enabled { "trace" } else { "off" });
    (handles()?.stdout)(filter)
}

/// Appends log output to `path`, replacing any file already attached.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *lock_file(&handles()?.file) = Some(file);
    Ok(())
}

/// Applies the `[logging]` section on top of the startup subscriber.
///
/// `RUST_LOG` still wins over the configured level when set.
pub fn apply_config(config: &LoggingConfig) -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        set_log_level(&config.level)?;
    }
    if let Some(path) = &config.file {
        enable_file_logging(path)?;
        info!(path = %path.display(), "file logging enabled");
    }
    set_stdout_enabled(config.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_colours_are_distinct() {
        let levels = [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE];
        let mut colours: Vec<_> = levels.iter().map(level_colour).collect();
        colours.dedup();

        assert_eq!(colours.len(), levels.len());
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn file_writer_discards_without_file() {
        let slot = LogFile(Arc::new(Mutex::new(None)));
        let mut writer = slot.make_writer();

        assert_eq!(writer.write(b"dropped").unwrap(), 7);
        assert!(writer.flush().is_ok());
    }
}

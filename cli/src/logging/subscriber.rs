//! Console and file rendering of [`tracing`] events.
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::Layer as _;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use super::utils::{DATETIME_FORMAT, TIME_FORMAT, log_file_path, strip_ansi, utc_now};

/// Tracing target used for stage headers.
pub(super) const STAGE_TARGET: &str = "aclfw::stage";

/// The `message` field of an event, however it was recorded.
#[derive(Default)]
struct Message(String);

impl tracing::field::Visit for Message {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.0);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.clear();
            let _ = write!(self.0, "{value:?}");
        }
    }
}

impl Message {
    fn of(event: &tracing::Event<'_>) -> String {
        let mut message = Self::default();
        event.record(&mut message);
        message.0
    }
}

fn is_stage(event: &tracing::Event<'_>) -> bool {
    event.metadata().target() == STAGE_TARGET
}

/// Console rendering: warnings and errors are tagged, debug is dimmed.
fn console_line(level: Level, stage: bool, msg: &str) -> String {
    match level {
        Level::ERROR => format!("\x1b[31merror:\x1b[0m {msg}"),
        Level::WARN => format!("\x1b[33mwarning:\x1b[0m {msg}"),
        Level::INFO if stage => format!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m"),
        Level::INFO => format!("  {msg}"),
        _ => format!("  \x1b[2m{msg}\x1b[0m"),
    }
}

/// Log file rendering: timestamped, level column, no colour.
fn file_line(timestamp: &str, level: Level, stage: bool, msg: &str) -> String {
    let msg = strip_ansi(msg);
    if stage {
        format!("[{timestamp}] ==> {msg}")
    } else {
        format!("[{timestamp}] {:<5} {msg}", level.as_str())
    }
}

/// Appends every event to a log file.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<File>,
}

impl FileLayer {
    /// Truncate `path`, write a run header naming `command`, and keep the
    /// file open for appending. `None` if the file cannot be written.
    pub(super) fn create(path: &Path, command: &str) -> Option<Self> {
        let version =
            option_env!("ACLFW_VERSION").unwrap_or(concat!("dev-", env!("CARGO_PKG_VERSION")));
        let started = utc_now(DATETIME_FORMAT);
        fs::write(path, format!("# aclfw {version} {command} started {started} UTC\n")).ok()?;
        let file = fs::OpenOptions::new().append(true).open(path).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let line = file_line(
            &utc_now(TIME_FORMAT),
            *event.metadata().level(),
            is_stage(event),
            &Message::of(event),
        );
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }
}

struct ConsoleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let line = console_line(*event.metadata().level(), is_stage(event), &Message::of(event));
        writeln!(writer, "{line}")
    }
}

/// Install the global subscriber for one command run.
///
/// The console shows `INFO` and above (`DEBUG` with `verbose`); warnings and
/// errors go to stderr, the rest to stdout. Every event down to `DEBUG` is
/// also appended to the command's log file when it can be opened.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));
    let console = tracing_subscriber::fmt::layer()
        .event_format(ConsoleFormatter)
        .with_writer(writer)
        .with_filter(console_level);

    let file = log_file_path(command)
        .and_then(|path| FileLayer::create(&path, command))
        .map(|layer| layer.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry().with(console).with(file).init();
}

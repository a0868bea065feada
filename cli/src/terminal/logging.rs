use std::io;

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

const DEFAULT_FILTER: &str = "info";
const OWN_TARGET_PREFIX: &str = "pingwatch";

/// Installs the global subscriber. Diagnostics go to stderr so stdout only
/// carries the per-server report.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .event_format(PingwatchFormatter)
        .init();
}

/// One line per event: a colored level symbol, then the message. Events raised
/// by dependencies (visible with `RUST_LOG=debug`) carry their target so they
/// can be told apart from our own diagnostics.
pub struct PingwatchFormatter;

impl<S, N> FormatEvent<S, N> for PingwatchFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let (symbol, color_func) = level_symbol(meta.level());

        write!(writer, "{} ", color_func(symbol.into()))?;
        if let Some(target) = foreign_target(meta.target()) {
            write!(writer, "{} ", format!("{target}:").dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_symbol(level: &Level) -> (&'static str, fn(ColoredString) -> ColoredString) {
    match *level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    }
}

fn foreign_target(target: &str) -> Option<&str> {
    (!target.starts_with(OWN_TARGET_PREFIX)).then_some(target)
}

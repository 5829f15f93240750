use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Target of events carrying finished terminal output.
pub const PRINT_TARGET: &str = "perfpredict::print";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PERFPREDICT_LOG";

pub struct PerfFormatter;

impl<S, N> FormatEvent<S, N> for PerfFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

/// Filter from a directive string, with terminal output always let through.
///
/// An unparsable `spec` falls back to `info`.
pub fn filter(spec: &str) -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::try_new(spec)
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive(format!("{PRINT_TARGET}=info").parse::<Directive>()?);
    Ok(filter)
}

/// Subscriber writing through [`PerfFormatter`] to `writer`.
pub fn subscriber<W>(
    spec: &str,
    writer: W,
) -> anyhow::Result<impl Subscriber + Send + Sync + use<W>>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter(spec)?)
        .event_format(PerfFormatter)
        .with_writer(writer)
        .finish())
}

/// Installs the global subscriber on stdout.
///
/// The filter comes from [`LOG_ENV`] (default `info`).
pub fn init_logging() -> anyhow::Result<()> {
    let spec = std::env::var(LOG_ENV).unwrap_or_else(|_| "info".to_string());

    tracing::subscriber::set_global_default(subscriber(&spec, std::io::stdout)?)
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}

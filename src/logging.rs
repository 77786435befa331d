//! Log rendering for the relay.
//!
//! Every event emitted by this crate is rendered as
//! `<YYYY-MM-DD HH:MM:SS> - <LEVEL> - <component>: <message>` and handed to a
//! [`LogSink`]. The binary installs [`StderrSink`], which the monitoring daemon
//! collects into its own integration log. Tests install [`MemorySink`] and
//! inspect the captured lines. Events from dependencies are filtered out.
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber, error, info, warn};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

use crate::config::RelayConfig;
use crate::error::{Error, Result, Severity};
use crate::types::DeliveryReceipt;

/// Events outside this target prefix never reach the sink.
pub const LOG_TARGET: &str = "alert_relay";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination for rendered log lines.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&self, line: &str) {
        // Nowhere left to report a failing stderr.
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

/// In-memory sink; clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Lines rendered at `level`, e.g. `"WARNING"`.
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        let marker = format!(" - {} - ", level);
        self.lines()
            .into_iter()
            .filter(|line| line.contains(&marker))
            .collect()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

/// Level names as the daemon's log parsers expect them.
pub fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

pub fn format_line(timestamp: &str, level: &Level, component: &str, message: &str) -> String {
    format!(
        "{} - {} - {}: {}",
        timestamp,
        level_label(level),
        component,
        message
    )
}

pub struct RelayLogLayer {
    component: String,
    sink: Arc<dyn LogSink>,
}

impl RelayLogLayer {
    pub fn new(component: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            component: component.into(),
            sink,
        }
    }
}

struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    fn new() -> Self {
        Self {
            message: String::new(),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

impl<S> Layer<S> for RelayLogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::new();
        event.record(&mut visitor);

        let message = if !visitor.message.is_empty() {
            visitor.message
        } else {
            metadata.target().to_string()
        };

        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = format_line(&timestamp, metadata.level(), &self.component, &message);
        self.sink.write_line(&line);
    }
}

/// Build the subscriber for one invocation: INFO and up, DEBUG and up when
/// the debug flag is set, restricted to this crate's events.
pub fn subscriber(
    config: &RelayConfig,
    sink: Arc<dyn LogSink>,
) -> impl Subscriber + Send + Sync + use<> {
    let max_level = if config.debug { Level::DEBUG } else { Level::INFO };
    let filter = Targets::new().with_target(LOG_TARGET, max_level);

    tracing_subscriber::registry()
        .with(RelayLogLayer::new(&config.component, sink).with_filter(filter))
}

/// Install the relay subscriber process-wide.
pub fn init(config: &RelayConfig, sink: Arc<dyn LogSink>) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(config, sink)).map_err(Error::unhandled)
}

/// The single outcome line of an invocation.
pub fn report_outcome(outcome: &Result<DeliveryReceipt>) {
    match outcome {
        Ok(receipt) => info!("Alert sent successfully. Status: {}", receipt.status),
        Err(e) => match e.severity() {
            Severity::Warning => warn!("{}", e),
            Severity::Error => error!("{}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tracing::debug;

    fn capture<F: FnOnce()>(config: &RelayConfig, f: F) -> MemorySink {
        let sink = MemorySink::new();
        tracing::subscriber::with_default(subscriber(config, Arc::new(sink.clone())), f);
        sink
    }

    #[test]
    fn test_line_format() {
        let line = format_line("2024-05-01 10:00:00", &Level::WARN, "n8n-webhook", "hello");
        assert_eq!(line, "2024-05-01 10:00:00 - WARNING - n8n-webhook: hello");
    }

    #[test]
    fn test_rendered_line_has_timestamp_prefix() {
        let sink = capture(&RelayConfig::default(), || info!("ping {}", 1));
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);

        let (timestamp, rest) = lines[0].split_once(" - ").unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(rest, "INFO - n8n-webhook: ping 1");
    }

    #[test]
    fn test_debug_lines_follow_debug_flag() {
        let quiet = capture(&RelayConfig::default(), || debug!("hidden"));
        assert!(quiet.lines().is_empty());

        let config = RelayConfig {
            debug: true,
            ..RelayConfig::default()
        };
        let loud = capture(&config, || debug!("shown"));
        assert_eq!(loud.lines_at("DEBUG").len(), 1);
    }

    #[test]
    fn test_foreign_targets_are_dropped() {
        let sink = capture(&RelayConfig::default(), || {
            tracing::info!(target: "hyper::client", "connecting");
            tracing::error!(target: "reqwest", "boom");
        });
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_report_success() {
        let sink = capture(&RelayConfig::default(), || {
            report_outcome(&Ok(DeliveryReceipt { status: 201 }))
        });
        let info = sink.lines_at("INFO");
        assert_eq!(info.len(), 1);
        assert!(info[0].ends_with("Alert sent successfully. Status: 201"));
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_report_rejection_as_warning() {
        let sink = capture(&RelayConfig::default(), || {
            report_outcome(&Err(Error::DeliveryRejected { status: 500 }))
        });
        let warnings = sink.lines_at("WARNING");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].ends_with("Webhook returned unexpected status: 500"));
        assert!(sink.lines_at("ERROR").is_empty());
    }

    #[test]
    fn test_report_timeout_as_error() {
        let sink = capture(&RelayConfig::default(), || {
            report_outcome(&Err(Error::DeliveryTimeout {
                timeout: Duration::from_secs(30),
            }))
        });
        let errors = sink.lines_at("ERROR");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].ends_with("Webhook request timed out after 30s"));
    }
}

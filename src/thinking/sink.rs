use std::io::Write;

use tracing::debug;

use super::record::ThoughtRecord;
use super::render::{render, render_colored};
use crate::config::DisplayConfig;

/// Side channel that receives every recorded thought.
///
/// Implementations must not fail the caller; a sink that cannot write
/// swallows the error.
#[cfg_attr(test, mockall::automock)]
pub trait ThoughtSink: Send {
    /// Show a freshly recorded thought
    fn emit(&mut self, record: &ThoughtRecord);
}

/// Writes the boxed rendering to standard output.
///
/// The write is blocking and happens while the caller holds the log lock, so
/// a stalled stdout stalls every request behind it.
#[derive(Debug, Clone, Copy)]
pub struct StdoutSink {
    color: bool,
}

impl StdoutSink {
    /// Create a stdout sink, optionally colorizing headers
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl ThoughtSink for StdoutSink {
    fn emit(&mut self, record: &ThoughtRecord) {
        let rendered = if self.color {
            render_colored(record)
        } else {
            render(record)
        };

        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", rendered).and_then(|_| stdout.flush()) {
            debug!(error = %e, "Failed to write thought display");
        }
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ThoughtSink for NullSink {
    fn emit(&mut self, _record: &ThoughtRecord) {}
}

/// Build the sink described by the display configuration
pub fn sink_from_config(display: &DisplayConfig) -> Box<dyn ThoughtSink> {
    if display.enabled {
        Box::new(StdoutSink::new(display.color))
    } else {
        Box::new(NullSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_accepts_records() {
        let mut sink = NullSink;
        sink.emit(&ThoughtRecord::new("ignored", 1, 1, false));
    }

    #[test]
    fn test_stdout_sink_does_not_panic() {
        let mut sink = StdoutSink::new(false);
        sink.emit(&ThoughtRecord::new("printed", 1, 2, true));

        let mut sink = StdoutSink::new(true);
        sink.emit(&ThoughtRecord::new("printed", 2, 2, false).revising(1));
    }

    #[test]
    fn test_mock_sink_sees_record() {
        let mut sink = MockThoughtSink::new();
        sink.expect_emit()
            .withf(|record| record.thought == "observed" && record.thought_number == 3)
            .times(1)
            .return_const(());

        sink.emit(&ThoughtRecord::new("observed", 3, 3, false));
    }

    #[test]
    fn test_sink_from_config() {
        // Boxed trait objects are opaque; exercising both branches is enough.
        let mut enabled = sink_from_config(&DisplayConfig {
            enabled: true,
            color: false,
        });
        enabled.emit(&ThoughtRecord::new("shown", 1, 1, false));

        let mut disabled = sink_from_config(&DisplayConfig {
            enabled: false,
            color: true,
        });
        disabled.emit(&ThoughtRecord::new("hidden", 1, 1, false));
    }
}

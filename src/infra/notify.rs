use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::application::submission::Notifier;

/// Terminal stand-in for toast notifications: successes on stdout, errors on
/// stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        info!(%message, "success notification");
        if let Err(err) = write_line(io::stdout().lock(), '✔', message) {
            debug!(error = %err, "failed to write success notification");
        }
    }

    fn error(&self, message: &str) {
        warn!(%message, "error notification");
        if let Err(err) = write_line(io::stderr().lock(), '✖', message) {
            debug!(error = %err, "failed to write error notification");
        }
    }
}

fn write_line(mut out: impl Write, symbol: char, message: &str) -> io::Result<()> {
    writeln!(out, "{symbol} {message}")?;
    out.flush()
}

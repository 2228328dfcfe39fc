use std::io::Write;

use ec_core::ports::NotificationPort;
use tracing::{error, info, warn};

/// Prints toasts on stderr and mirrors them into the log.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn print(&self, marker: &str, message: &str) {
        let _ = writeln!(std::io::stderr(), "{marker} {message}");
    }
}

impl NotificationPort for ConsoleNotifier {
    fn success(&self, message: &str) {
        info!(toast = "success", "{}", message);
        self.print("✔", message);
    }

    fn warning(&self, message: &str) {
        warn!(toast = "warning", "{}", message);
        self.print("!", message);
    }

    fn error(&self, message: &str) {
        error!(toast = "error", "{}", message);
        self.print("✖", message);
    }
}

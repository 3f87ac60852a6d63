//! Console notifications for the command-line front end

use crate::ports::{Notifier, Severity};

pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn symbol(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Error => "✗",
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn show(&self, severity: Severity, text: &str) {
        tracing::info!(%severity, text, "Notification");
        match severity {
            Severity::Error => eprintln!("{} {}", Self::symbol(severity), text),
            _ => println!("{} {}", Self::symbol(severity), text),
        }
    }
}

// Adapters layer: concrete implementations for external systems. The only
// external collaborator here is the host's file-tracking subsystem, reduced
// to the RefreshNotifier port.

use crate::domain::ports::RefreshNotifier;
use std::path::Path;

/// Logs each rewritten file. The CLI stand-in for the original host's
/// mark-dirty-and-refresh hand-off.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl RefreshNotifier for LogNotifier {
    fn notify_changed(&self, path: &Path) {
        tracing::info!("Updated {}", path.display());
    }
}

/// No-op notifier for hosts without a file-tracking subsystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl RefreshNotifier for NullNotifier {
    fn notify_changed(&self, _path: &Path) {}
}

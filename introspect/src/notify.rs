//! Editor notification seam.

/// Surface for user-visible error notifications.
///
/// The host editor integration implements this; [`LogNotifier`] is the
/// default when nothing is wired up.
pub trait Notifier: Send + Sync {
    /// Shows `message` to the user.
    fn show_error(&self, message: &str);
}

/// Fallback notifier that forwards to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show_error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

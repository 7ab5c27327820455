use tracing::{error, info};

/// Sink for user-facing transient notifications (toasts, in a UI frontend).
///
/// Notifications are fire-and-forget; the engine never blocks on them and
/// never treats them as a recovery mechanism.
pub trait Notify: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink routing notifications to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotify;

impl Notify for LogNotify {
    fn success(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

//! User notification contract
//!
//! Fire-and-forget transient messages (toast analogue). No acknowledgement,
//! no queuing guarantee beyond at-least-once display.

/// Trait for showing a transient message to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// No-op implementation for contexts without a user surface.
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _message: &str) {}
}

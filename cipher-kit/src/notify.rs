//! Notification sink for non-fatal warnings

use crate::error::Result;

/// Receives user-facing messages raised while a transform runs.
///
/// The transforms never wait on the sink; whatever the implementation does
/// with the message, the operation continues.
pub trait Notifier {
    /// Delivers `message` under `title`
    fn notify(&self, message: &str, title: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str, &str),
{
    fn notify(&self, message: &str, title: &str) {
        self(message, title)
    }
}

/// Forwards every message to `log::warn!`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, title: &str) {
        log::warn!("{}: {}", title, message);
    }
}

/// Drops every message
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str, _title: &str) {}
}

/// Title used for every error notification.
pub const ERROR_TITLE: &str = "Chyba";

/// Hands a failure to `notifier` under [`ERROR_TITLE`] and yields `None`;
/// passes a success through.
pub fn recover<T>(result: Result<T>, notifier: &dyn Notifier) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            notifier.notify(&err.user_message(), ERROR_TITLE);
            None
        }
    }
}

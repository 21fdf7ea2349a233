//! Notifier port: shows transient notifications to the user.

use std::rc::Rc;

use meterdash_domain::notification::Notification;

/// Sink for notifications.
///
/// Implementations show the notification immediately and remove it after
/// [`DISPLAY_DURATION`](meterdash_domain::notification::DISPLAY_DURATION),
/// independently of any other visible notification.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<T: Notifier> Notifier for Rc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

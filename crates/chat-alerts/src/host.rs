//! Host notification capability.

use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::types::{Notification, Permission};

/// Port to the host's desktop notification facility.
pub trait NotificationHost {
    /// Current permission, or `None` when the host has no notification support.
    fn permission(&self) -> Option<Permission>;

    /// Ask the user for permission. The outcome is stored by the host.
    fn request_permission(&self);

    /// Construct and display one notification.
    fn show(&self, notification: &Notification);
}

impl<H: NotificationHost + ?Sized> NotificationHost for &H {
    fn permission(&self) -> Option<Permission> {
        (**self).permission()
    }

    fn request_permission(&self) {
        (**self).request_permission()
    }

    fn show(&self, notification: &Notification) {
        (**self).show(notification)
    }
}

impl<H: NotificationHost + ?Sized> NotificationHost for Arc<H> {
    fn permission(&self) -> Option<Permission> {
        (**self).permission()
    }

    fn request_permission(&self) {
        (**self).request_permission()
    }

    fn show(&self, notification: &Notification) {
        (**self).show(notification)
    }
}

/// Headless host that writes notifications to the log.
///
/// A permission request on an undecided host resolves to granted.
pub struct LogHost {
    permission: Mutex<Permission>,
}

impl LogHost {
    pub fn new(permission: Permission) -> Self {
        Self {
            permission: Mutex::new(permission),
        }
    }
}

impl NotificationHost for LogHost {
    fn permission(&self) -> Option<Permission> {
        self.permission.lock().ok().map(|p| *p)
    }

    fn request_permission(&self) {
        let Ok(mut slot) = self.permission.lock() else {
            return;
        };
        if *slot == Permission::Default {
            *slot = Permission::Granted;
        }
        tracing::info!(permission = ?*slot, "Notification permission requested");
    }

    fn show(&self, notification: &Notification) {
        let payload = json!({
            "type": "chat_unread_notification",
            "data": notification,
        });
        tracing::info!(%payload, "Notification shown");
    }
}

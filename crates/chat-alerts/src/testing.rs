//! In-memory notification host for tests.

use std::sync::Mutex;

use crate::host::NotificationHost;
use crate::types::{Notification, Permission};

#[derive(Debug, Default)]
struct Recorded {
    permission: Option<Permission>,
    on_request: Option<Permission>,
    requests: usize,
    shown: Vec<Notification>,
}

/// Fake host that records permission requests and shown notifications.
#[derive(Debug, Default)]
pub struct RecordingHost {
    inner: Mutex<Recorded>,
}

impl RecordingHost {
    /// Host with notification support and the given permission.
    pub fn new(permission: Permission) -> Self {
        Self {
            inner: Mutex::new(Recorded {
                permission: Some(permission),
                ..Recorded::default()
            }),
        }
    }

    /// Host without notification support.
    pub fn unsupported() -> Self {
        Self::default()
    }

    /// Permission the user picks when prompted. Without this the prompt is
    /// dismissed and the permission stays as it was.
    pub fn answering(self, answer: Permission) -> Self {
        self.with(|r| r.on_request = Some(answer));
        self
    }

    pub fn set_permission(&self, permission: Permission) {
        self.with(|r| r.permission = Some(permission));
    }

    pub fn requests(&self) -> usize {
        self.with(|r| r.requests)
    }

    pub fn shown(&self) -> Vec<Notification> {
        self.with(|r| r.shown.clone())
    }

    fn with<R>(&self, f: impl FnOnce(&mut Recorded) -> R) -> R {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl NotificationHost for RecordingHost {
    fn permission(&self) -> Option<Permission> {
        self.with(|r| r.permission)
    }

    fn request_permission(&self) {
        self.with(|r| {
            r.requests += 1;
            if let (Some(_), Some(answer)) = (r.permission, r.on_request) {
                r.permission = Some(answer);
            }
        });
    }

    fn show(&self, notification: &Notification) {
        self.with(|r| r.shown.push(notification.clone()));
    }
}

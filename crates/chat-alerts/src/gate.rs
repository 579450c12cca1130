//! One-shot notification permission request.

use crate::host::NotificationHost;
use crate::types::Permission;

/// Requests notification permission at most once per mount.
#[derive(Debug, Default)]
pub struct PermissionGate {
    checked: bool,
}

impl PermissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the mount check. Only the first call on a gate does anything;
    /// the prompt is issued when the host supports notifications and the
    /// user has not decided yet.
    pub fn on_mount<H: NotificationHost + ?Sized>(&mut self, host: &H) {
        if self.checked {
            return;
        }
        self.checked = true;

        match host.permission() {
            Some(Permission::Default) => {
                tracing::debug!("Requesting notification permission");
                host.request_permission();
            }
            Some(permission) => {
                tracing::debug!(?permission, "Notification permission already decided");
            }
            None => tracing::debug!("Notifications unsupported by host"),
        }
    }

    pub fn has_checked(&self) -> bool {
        self.checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHost;

    #[test]
    fn requests_once_when_undecided() {
        let host = RecordingHost::new(Permission::Default);
        let mut gate = PermissionGate::new();
        gate.on_mount(&host);
        assert_eq!(host.requests(), 1);
        assert!(gate.has_checked());
    }

    #[test]
    fn no_request_when_decided() {
        for permission in [Permission::Granted, Permission::Denied] {
            let host = RecordingHost::new(permission);
            let mut gate = PermissionGate::new();
            gate.on_mount(&host);
            assert_eq!(host.requests(), 0, "permission {permission:?}");
        }
    }

    #[test]
    fn unsupported_host_is_skipped() {
        let host = RecordingHost::unsupported();
        let mut gate = PermissionGate::new();
        gate.on_mount(&host);
        assert_eq!(host.requests(), 0);
    }

    #[test]
    fn remount_of_same_gate_does_not_ask_again() {
        // prompt dismissed, permission stays undecided
        let host = RecordingHost::new(Permission::Default);
        let mut gate = PermissionGate::new();
        gate.on_mount(&host);
        gate.on_mount(&host);
        gate.on_mount(&host);
        assert_eq!(host.requests(), 1);
    }

    #[test]
    fn fresh_gate_asks_again_while_undecided() {
        let host = RecordingHost::new(Permission::Default);
        PermissionGate::new().on_mount(&host);
        PermissionGate::new().on_mount(&host);
        assert_eq!(host.requests(), 2);
    }
}

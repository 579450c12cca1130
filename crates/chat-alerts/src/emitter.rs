//! Unread message alert emitter.

use crate::config::AlertConfig;
use crate::host::NotificationHost;
use crate::message::unread_notification;
use crate::types::{Permission, WidgetState};

/// Raises one notification for each observed change that leaves the panel
/// closed with unread messages, provided permission is granted.
///
/// Repeats are not suppressed: a count that goes 1 -> 2 -> 1 while closed
/// alerts three times.
#[derive(Debug)]
pub struct UnreadAlertEmitter {
    config: AlertConfig,
    last: Option<WidgetState>,
}

impl UnreadAlertEmitter {
    pub fn new(config: AlertConfig) -> Self {
        Self { config, last: None }
    }

    /// Observe the widget signals. Returns `true` when a notification was
    /// shown. Identical consecutive states are ignored.
    pub fn observe<H: NotificationHost + ?Sized>(&mut self, host: &H, state: WidgetState) -> bool {
        if self.last == Some(state) {
            return false;
        }
        self.last = Some(state);

        if !self.config.enabled || !state.has_unread_while_closed() {
            return false;
        }
        if host.permission() != Some(Permission::Granted) {
            tracing::debug!(unread = state.unread_count, "Unread alert skipped, permission not granted");
            return false;
        }

        let notification = unread_notification(&self.config, state.unread_count);
        host.show(&notification);
        tracing::debug!(unread = state.unread_count, "Unread alert shown");
        true
    }

    pub fn last_state(&self) -> Option<WidgetState> {
        self.last
    }
}

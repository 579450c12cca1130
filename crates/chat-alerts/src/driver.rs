//! Reactive wiring between the chat widget and the alert units.
//!
//! The widget publishes its state through [`WidgetSignals`]; [`run_alerts`]
//! subscribes, runs the permission gate once on mount and feeds every
//! change to the emitter.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::config::AlertConfig;
use crate::emitter::UnreadAlertEmitter;
use crate::gate::PermissionGate;
use crate::host::NotificationHost;
use crate::types::WidgetState;

/// Publisher side of the widget state. Every change is delivered to the
/// subscriber in order, none are merged.
#[derive(Debug, Clone)]
pub struct WidgetSignals {
    state: Arc<Mutex<WidgetState>>,
    tx: mpsc::UnboundedSender<WidgetState>,
}

impl WidgetSignals {
    /// The initial state is queued as the first observation.
    pub fn new(initial: WidgetState) -> (Self, mpsc::UnboundedReceiver<WidgetState>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(initial);
        let signals = Self {
            state: Arc::new(Mutex::new(initial)),
            tx,
        };
        (signals, rx)
    }

    /// Publish panel visibility. Returns `true` if the value changed.
    pub fn set_open(&self, is_open: bool) -> bool {
        self.update(|state| {
            if state.is_open == is_open {
                return false;
            }
            state.is_open = is_open;
            true
        })
    }

    /// Publish the unread count. Returns `true` if the value changed.
    pub fn set_unread(&self, unread_count: u32) -> bool {
        self.update(|state| {
            if state.unread_count == unread_count {
                return false;
            }
            state.unread_count = unread_count;
            true
        })
    }

    pub fn current(&self) -> WidgetState {
        *self.lock()
    }

    fn update(&self, modify: impl FnOnce(&mut WidgetState) -> bool) -> bool {
        let mut state = self.lock();
        if !modify(&mut state) {
            return false;
        }
        // Sent under the lock so clones publish in order.
        if self.tx.send(*state).is_err() {
            tracing::debug!("Alert loop gone, widget change dropped");
        }
        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WidgetState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Drive the gate and the emitter from widget state changes until every
/// publisher is dropped. Returns the number of notifications shown.
pub async fn run_alerts<H: NotificationHost>(
    host: H,
    config: AlertConfig,
    mut rx: mpsc::UnboundedReceiver<WidgetState>,
) -> usize {
    let mut gate = PermissionGate::new();
    let mut emitter = UnreadAlertEmitter::new(config);
    let mut shown = 0;

    gate.on_mount(&host);

    while let Some(state) = rx.recv().await {
        if emitter.observe(&host, state) {
            shown += 1;
        }
    }

    tracing::debug!(shown, "Widget signals closed, alert loop stopped");
    shown
}

//! Desktop alerts for the chat widget.
//!
//! Requests notification permission once per mount and raises a native
//! notification summarizing the unread count while the chat panel is closed.

pub mod config;
pub mod driver;
pub mod emitter;
pub mod gate;
pub mod host;
pub mod message;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod types;

pub use config::AlertConfig;
pub use driver::{WidgetSignals, run_alerts};
pub use emitter::UnreadAlertEmitter;
pub use gate::PermissionGate;
pub use host::{LogHost, NotificationHost};
pub use types::{Notification, Permission, WidgetState};

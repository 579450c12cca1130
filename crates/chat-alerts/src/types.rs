//! Alert type definitions.

use serde::{Deserialize, Serialize};

/// Host notification permission. Once decided it stays decided unless the
/// user revokes it outside the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Default,
    Granted,
    Denied,
}

impl Permission {
    pub fn from_str_setting(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "granted" => Self::Granted,
            "denied" => Self::Denied,
            _ => Self::Default,
        }
    }
}

/// A native notification as handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
}

/// Chat widget signals observed by the emitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetState {
    pub is_open: bool,
    pub unread_count: u32,
}

impl WidgetState {
    /// Panel closed with something unread.
    pub fn has_unread_while_closed(&self) -> bool {
        !self.is_open && self.unread_count > 0
    }
}

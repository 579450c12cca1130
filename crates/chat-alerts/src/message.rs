//! Notification text for unread chat messages.

use crate::config::AlertConfig;
use crate::types::Notification;

/// Body sentence for `count` unread messages. Singular only for exactly one.
pub fn unread_body(count: u32) -> String {
    if count > 1 {
        format!("Você tem {count} mensagens não lidas")
    } else {
        format!("Você tem {count} mensagem não lida")
    }
}

/// Build the unread summary notification.
pub fn unread_notification(config: &AlertConfig, count: u32) -> Notification {
    Notification {
        title: config.title.clone(),
        body: unread_body(count),
        icon: config.icon.clone(),
        badge: config.badge.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_pluralization() {
        assert_eq!(unread_body(1), "Você tem 1 mensagem não lida");
        assert_eq!(unread_body(2), "Você tem 2 mensagens não lidas");
        assert_eq!(unread_body(3), "Você tem 3 mensagens não lidas");
    }

    #[test]
    fn notification_uses_config_assets() {
        let config = AlertConfig::default();
        let n = unread_notification(&config, 4);
        assert_eq!(n.title, config.title);
        assert_eq!(n.icon, config.icon);
        assert_eq!(n.badge, config.badge);
        assert_eq!(n.body, "Você tem 4 mensagens não lidas");
    }
}

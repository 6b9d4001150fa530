use egui::Color32;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Error,
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub expires_at: Instant,
}

impl Notification {
    fn lifetime(notification_type: NotificationType) -> Duration {
        match notification_type {
            NotificationType::Error => Duration::from_secs(15),
            NotificationType::Info => Duration::from_secs(8),
            NotificationType::Success => Duration::from_secs(4),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub fn get_color(&self) -> Color32 {
        match self.notification_type {
            NotificationType::Error => Color32::from_rgb(220, 50, 50),
            NotificationType::Info => Color32::from_rgb(70, 130, 200),
            NotificationType::Success => Color32::from_rgb(40, 180, 40),
        }
    }

    pub fn get_icon(&self) -> &'static str {
        match self.notification_type {
            NotificationType::Error => "✗",
            NotificationType::Info => "ℹ",
            NotificationType::Success => "✓",
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> u64 {
        self.next_id += 1;
        let now = Instant::now();
        self.notifications.push(Notification {
            id: self.next_id,
            title: title.into(),
            message: message.into(),
            notification_type,
            created_at: now,
            expires_at: now + Notification::lifetime(notification_type),
        });
        self.next_id
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.add(NotificationType::Success, title, message)
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.add(NotificationType::Error, title, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }

    pub fn clear_expired(&mut self) {
        let now = Instant::now();
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    /// Newest first
    pub fn get_active_notifications(&self) -> Vec<&Notification> {
        let mut notifications: Vec<&Notification> = self.notifications.iter().collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        notifications
    }

    /// Toasts in the bottom-right corner
    pub fn show_toasts(&mut self, ctx: &egui::Context) {
        self.clear_expired();
        if self.notifications.is_empty() {
            return;
        }

        let mut dismissed = Vec::new();
        egui::Area::new(egui::Id::new("notification_toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -36.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for notification in self.get_active_notifications() {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.colored_label(
                                notification.get_color(),
                                format!("{} {}", notification.get_icon(), notification.title),
                            );
                            if ui.small_button("✕").clicked() {
                                dismissed.push(notification.id);
                            }
                        });
                        if !notification.message.is_empty() {
                            ui.label(&notification.message);
                        }
                    });
                    ui.add_space(4.0);
                }
            });

        for id in dismissed {
            self.dismiss(id);
        }

        // Keep repainting so expired toasts disappear without input
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_dismiss() {
        let mut manager = NotificationManager::new();
        let first = manager.success("Copied", "");
        let second = manager.error("Clipboard", "unavailable");
        assert_eq!(manager.get_active_notifications().len(), 2);
        assert_eq!(manager.get_active_notifications()[0].id, second);
        assert_eq!(
            manager.get_active_notifications()[0].notification_type,
            NotificationType::Error
        );

        manager.dismiss(first);
        assert_eq!(manager.get_active_notifications().len(), 1);
    }

    #[test]
    fn test_expiry() {
        let mut manager = NotificationManager::new();
        manager.add(NotificationType::Info, "Hello", "");
        let notification = manager.get_active_notifications()[0].clone();
        assert!(!notification.is_expired_at(notification.created_at));
        assert!(notification.is_expired_at(notification.expires_at));
    }
}

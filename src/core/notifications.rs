//! # Notifications
//!
//! The inbox collection. Seeded once from the catalog; the only mutations
//! are the two read operations, both idempotent. Unknown ids are ignored.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    System,
    Warranty,
    Promotion,
    Service,
}

impl NotificationCategory {
    pub fn label(self) -> &'static str {
        match self {
            NotificationCategory::System => "Hệ thống",
            NotificationCategory::Warranty => "Bảo hành",
            NotificationCategory::Promotion => "Khuyến mãi",
            NotificationCategory::Service => "Dịch vụ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: NotificationCategory,
    /// Display string, e.g. "2 giờ trước".
    pub timestamp: String,
    pub is_read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notifications {
    pub items: Vec<Notification>,
}

impl Notifications {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Marks one notification read. Unknown ids are a no-op.
    pub fn mark_read(&mut self, id: &str) {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => n.is_read = true,
            None => debug!("mark_read: unknown notification id {id}"),
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.is_read = true;
        }
    }
}

//! Notification events and the sink they are delivered to.
//!
//! How notifications are displayed is the UI's business; this module only
//! fixes the call contract: a message, a category, how long to show it, and
//! where in the world it happened.

use serde::{Deserialize, Serialize};

use crate::position::WorldPosition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub category: String,
    pub display_duration_ms: u32,
    pub position: WorldPosition,
}

/// Receives notifications. Fire-and-forget: nothing is returned.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in order.
impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

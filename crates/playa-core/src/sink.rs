//! Notification sink backed by the `log` facade.

use log::info;
use playa_logic::notify::{Notification, NotificationSink};

/// Writes every notification as an `info` record under `playa::notify`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, n: Notification) {
        info!(
            target: "playa::notify",
            "[{}] {} at ({:.0}, {:.0}) for {}ms",
            n.category,
            n.message,
            n.position.x,
            n.position.y,
            n.display_duration_ms
        );
    }
}

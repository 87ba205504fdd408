//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`StoreEvent`]s: one
//! event per newly created notification or calendar-event record. It is
//! designed to be shared via `Arc<EventBus>` across the application.

use aula_db::models::event::CalendarEvent;
use aula_db::models::notification::Notification;
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// StoreEvent
// ---------------------------------------------------------------------------

/// A record-created event, carrying the full created row.
///
/// Published by the API handler that inserted the row; consumed by the
/// push fan-out. Any other record source (an import job, a queue
/// consumer) can drive the same pipeline by publishing here.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// A row was inserted into `notifications`.
    NotificationCreated(Notification),
    /// A row was inserted into `events`.
    EventCreated(CalendarEvent),
}

impl StoreEvent {
    /// Short tag name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreEvent::NotificationCreated(_) => "notification_created",
            StoreEvent::EventCreated(_) => "event_created",
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`StoreEvent`].
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are
    /// dropped and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: StoreEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{notification_row, event_row};
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        let row = notification_row("Reunión de padres", "Este viernes", serde_json::json!({"type": "all"}));
        bus.publish(StoreEvent::NotificationCreated(row.clone()));

        let received = rx.recv().await.expect("should receive the event");
        assert_matches!(received, StoreEvent::NotificationCreated(n) if n.id == row.id);
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let row = event_row("Feria de Ciencias", Some(chrono::NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()));
        bus.publish(StoreEvent::EventCreated(row));

        let e1 = rx1.recv().await.expect("subscriber 1 should receive");
        let e2 = rx2.recv().await.expect("subscriber 2 should receive");

        assert_eq!(e1.kind(), "event_created");
        assert_eq!(e2.kind(), "event_created");
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        // No subscribers -- this must not panic.
        bus.publish(StoreEvent::EventCreated(event_row("Sin fecha", None)));
    }
}

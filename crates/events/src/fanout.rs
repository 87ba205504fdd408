//! Record-created events to push notifications.
//!
//! [`PushFanout`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! and, for every created notification or calendar-event record, resolves
//! the recipient descriptor and dispatches one multicast send. The whole
//! pipeline is awaited per event and recovers from every failure mode
//! internally: record creation never observes a push error.

use aula_core::recipient::Recipient;
use aula_db::models::event::CalendarEvent;
use aula_db::models::notification::Notification;
use chrono::{Datelike, NaiveDate};
use tokio::sync::broadcast;

use crate::bus::StoreEvent;
use crate::directory::DirectoryStore;
use crate::dispatch::dispatch;
use crate::delivery::PushTransport;
use crate::resolver::resolve;

/// Spanish month names for the fixed-locale event date format.
const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Background service running resolve-then-dispatch per created record.
pub struct PushFanout<S, T> {
    store: S,
    transport: T,
}

impl<S, T> PushFanout<S, T>
where
    S: DirectoryStore,
    T: PushTransport,
{
    /// Create a fan-out over the given directory store and transport.
    pub fn new(store: S, transport: T) -> Self {
        Self { store, transport }
    }

    /// Run the main fan-out loop.
    ///
    /// Consumes events from the bus via `receiver` and processes each one
    /// to completion before taking the next. The loop exits when the
    /// channel is closed (i.e. the bus is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<StoreEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.handle_event(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Push fan-out lagged, events were not delivered");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, push fan-out shutting down");
                    break;
                }
            }
        }
    }

    async fn handle_event(&self, event: &StoreEvent) {
        match event {
            StoreEvent::NotificationCreated(notification) => {
                self.on_notification_created(notification).await;
            }
            StoreEvent::EventCreated(calendar_event) => {
                self.on_event_created(calendar_event).await;
            }
        }
    }

    /// New notification record: descriptor and strings come straight from
    /// the row.
    async fn on_notification_created(&self, notification: &Notification) {
        if notification.title.trim().is_empty() {
            tracing::warn!(
                notification_id = %notification.id,
                "Notification record has no title; skipping push"
            );
            return;
        }

        let recipient = Recipient::from_value(&notification.recipient);
        tracing::info!(
            notification_id = %notification.id,
            recipient = recipient.kind(),
            title = %notification.title,
            "Processing notification"
        );

        let tokens = resolve(&self.store, &recipient).await;
        let report = dispatch(
            &self.transport,
            tokens,
            &notification.title,
            &notification.description,
        )
        .await;

        tracing::info!(
            notification_id = %notification.id,
            attempted = report.attempted,
            delivered = report.delivered(),
            "Finished processing notification"
        );
    }

    /// New calendar event: everyone is notified, with synthesized
    /// Spanish-locale strings.
    async fn on_event_created(&self, event: &CalendarEvent) {
        if event.title.trim().is_empty() {
            tracing::warn!(event_id = %event.id, "Event record has no title; skipping push");
            return;
        }
        let Some(date) = event.date else {
            tracing::warn!(event_id = %event.id, "Event record has no date; skipping push");
            return;
        };

        let title = format!("Nuevo Evento: {}", event.title);
        let body = format!(
            "Se ha agregado un nuevo evento para el {}.",
            format_date_es(date)
        );
        tracing::info!(event_id = %event.id, title = %title, "Processing calendar event");

        let tokens = resolve(&self.store, &Recipient::All).await;
        let report = dispatch(&self.transport, tokens, &title, &body).await;

        tracing::info!(
            event_id = %event.id,
            attempted = report.attempted,
            delivered = report.delivered(),
            "Finished processing calendar event"
        );
    }
}

/// Format a date the way the portal displays it: `14 de marzo de 2025`.
fn format_date_es(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS_ES[date.month0() as usize],
        date.year()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::EventBus;
    use crate::testutil::{event_row, notification_row, InMemoryDirectory, RecordingTransport};
    use serde_json::json;
    use std::time::Duration;
    use uuid::Uuid;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn fanout_with(
        dir: InMemoryDirectory,
    ) -> PushFanout<InMemoryDirectory, RecordingTransport> {
        PushFanout::new(dir, RecordingTransport::default())
    }

    #[test]
    fn formats_dates_in_spanish() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(format_date_es(date), "14 de marzo de 2025");

        let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(format_date_es(new_year), "1 de enero de 2026");

        let december = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date_es(december), "31 de diciembre de 2025");
    }

    #[tokio::test]
    async fn calendar_event_notifies_everyone_with_synthesized_strings() {
        let mut dir = InMemoryDirectory::default();
        dir.staff = vec![strings(&["a1"])];
        dir.students = vec![("Primer Grado".into(), strings(&["s1"]))];
        let fanout = fanout_with(dir);

        let row = event_row(
            "Feria de Ciencias",
            Some(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()),
        );
        fanout.on_event_created(&row).await;

        let calls = fanout.transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].title, "Nuevo Evento: Feria de Ciencias");
        assert_eq!(
            calls[0].body,
            "Se ha agregado un nuevo evento para el 14 de marzo de 2025."
        );
        assert_eq!(calls[0].tokens, strings(&["a1", "s1"]));
    }

    #[tokio::test]
    async fn event_without_date_never_reaches_resolver_or_transport() {
        let mut dir = InMemoryDirectory::default();
        dir.staff = vec![strings(&["a1"])];
        let fanout = fanout_with(dir);

        fanout.on_event_created(&event_row("Feria de Ciencias", None)).await;

        assert!(fanout.transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn event_without_title_is_skipped() {
        let mut dir = InMemoryDirectory::default();
        dir.staff = vec![strings(&["a1"])];
        let fanout = fanout_with(dir);

        let row = event_row("  ", Some(NaiveDate::from_ymd_opt(2025, 5, 2).unwrap()));
        fanout.on_event_created(&row).await;

        assert!(fanout.transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn notification_resolves_its_descriptor_and_dispatches() {
        let course = Uuid::new_v4();
        let mut dir = InMemoryDirectory::default();
        dir.course_grades
            .insert(course, strings(&["Cuarto Grado"]));
        dir.students = vec![
            ("Cuarto Grado".into(), strings(&["t1"])),
            ("Quinto Grado".into(), strings(&["t2"])),
        ];
        let fanout = fanout_with(dir);

        let row = notification_row(
            "Tarea de Matemáticas",
            "Entrega el lunes",
            json!({"type": "course", "id": course}),
        );
        fanout.on_notification_created(&row).await;

        let calls = fanout.transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].title, "Tarea de Matemáticas");
        assert_eq!(calls[0].body, "Entrega el lunes");
        assert_eq!(calls[0].tokens, strings(&["t1"]));
    }

    #[tokio::test]
    async fn notification_without_title_is_skipped() {
        let mut dir = InMemoryDirectory::default();
        dir.staff = vec![strings(&["a1"])];
        let fanout = fanout_with(dir);

        let row = notification_row("", "Cuerpo", json!({"type": "all"}));
        fanout.on_notification_created(&row).await;

        assert!(fanout.transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_recipient_resolves_to_nobody_and_skips_dispatch() {
        let mut dir = InMemoryDirectory::default();
        dir.staff = vec![strings(&["a1"])];
        let fanout = fanout_with(dir);

        // Missing id on a user descriptor: zero recipients, and the
        // dispatcher's empty short-circuit keeps the transport untouched.
        let row = notification_row("Aviso", "Cuerpo", json!({"type": "user"}));
        fanout.on_notification_created(&row).await;

        assert!(fanout.transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn run_consumes_events_from_the_bus() {
        let mut dir = InMemoryDirectory::default();
        dir.staff = vec![strings(&["a1"])];

        let bus = EventBus::default();
        let receiver = bus.subscribe();
        let transport = RecordingTransport::default();
        // Shared handle to the recorded calls, so they can be inspected
        // after `run` consumes the fan-out.
        let calls = transport.calls.clone();
        let fanout = PushFanout::new(dir, transport);

        let handle = tokio::spawn(async move {
            fanout.run(receiver).await;
        });

        bus.publish(StoreEvent::NotificationCreated(notification_row(
            "Aviso",
            "Cuerpo",
            json!({"type": "all"}),
        )));
        drop(bus);

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("fan-out should shut down when the bus closes")
            .expect("fan-out task should not panic");

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tokens, strings(&["a1"]));
    }
}

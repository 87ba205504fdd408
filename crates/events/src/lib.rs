//! Aula event bus and push notification core.
//!
//! This crate provides the building blocks of the push fan-out pipeline:
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`, carrying record-created events.
//! - [`resolver`] — turns a recipient descriptor into a deduplicated set
//!   of device tokens, behind the injected [`DirectoryStore`] capability.
//! - [`dispatch`](dispatch::dispatch) — issues one multicast send through
//!   the injected [`PushTransport`] capability and reports per-token
//!   failures.
//! - [`FcmDelivery`] — the production HTTP push transport.
//! - [`PushFanout`] — background service consuming the bus and running
//!   resolve-then-dispatch for every created record.

pub mod bus;
pub mod delivery;
pub mod directory;
pub mod dispatch;
pub mod fanout;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testutil;

pub use bus::{EventBus, StoreEvent};
pub use delivery::fcm::FcmDelivery;
pub use delivery::{PushMessage, PushTransport, SendOutcome, TransportError};
pub use directory::{DirectoryStore, PgDirectory, StoreError};
pub use dispatch::{DeliveryFailure, DispatchReport};
pub use fanout::PushFanout;

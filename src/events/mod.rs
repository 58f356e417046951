//! Change notification for compliance data.
//!
//! Carer status is derived from documents, so anything holding a cached
//! status needs to know when the underlying data moves. This module
//! provides an explicit publish–subscribe seam: mutating code publishes a
//! [`ComplianceEvent`] through a [`ChangeNotifier`], and interested
//! components subscribe to the [`EventBus`] to recompute.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// A change to the compliance data set.
///
/// Events carry ids rather than payloads: subscribers re-read through the
/// store, so a lagging subscriber can never act on stale field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComplianceEvent {
    /// A carer was created or their identity fields changed.
    CarerUpserted {
        /// The affected carer.
        carer_id: String,
    },
    /// A carer and their documents were removed.
    CarerDeleted {
        /// The removed carer.
        carer_id: String,
    },
    /// A document was added to or replaced on a carer.
    DocumentUpserted {
        /// The owning carer.
        carer_id: String,
        /// The affected document.
        document_id: String,
    },
    /// A document was removed from a carer.
    DocumentDeleted {
        /// The owning carer.
        carer_id: String,
        /// The removed document.
        document_id: String,
    },
}

/// Outbound hook for publishing compliance data changes.
///
/// The API layer publishes through this trait after every successful
/// mutation, so tests can observe notifications and embedders can plug in
/// their own transport.
pub trait ChangeNotifier: Send + Sync {
    /// Publishes an event. Must not fail the surrounding operation.
    fn notify(&self, event: ComplianceEvent);
}

/// A [`ChangeNotifier`] backed by a tokio broadcast channel.
///
/// Subscribers receive every event published after they subscribe.
/// Publishing with no live subscribers is a no-op.
///
/// # Example
///
/// ```
/// use compliance_engine::events::{ChangeNotifier, ComplianceEvent, EventBus};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let bus = EventBus::new(16);
/// let mut subscription = bus.subscribe();
///
/// bus.notify(ComplianceEvent::CarerUpserted {
///     carer_id: "carer_001".to_string(),
/// });
///
/// let event = subscription.recv().await.unwrap();
/// assert_eq!(
///     event,
///     ComplianceEvent::CarerUpserted { carer_id: "carer_001".to_string() }
/// );
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ComplianceEvent>,
}

impl EventBus {
    /// Creates a bus that buffers up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Opens a new subscription receiving all subsequently published events.
    pub fn subscribe(&self) -> broadcast::Receiver<ComplianceEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

impl ChangeNotifier for EventBus {
    fn notify(&self, event: ComplianceEvent) {
        // A send error only means there are no subscribers right now.
        let _ = self.tx.send(event);
    }
}

/// A [`ChangeNotifier`] that drops every event.
///
/// Useful in tests and batch tools that have no subscribers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl ChangeNotifier for NoopNotifier {
    fn notify(&self, _event: ComplianceEvent) {}
}

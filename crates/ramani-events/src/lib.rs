//! Typed notification bus for the Ramani client.
//!
//! The bus provides a closed signal enum with typed payloads, sequential
//! envelope identifiers, and a synchronous subscriber registry. Producers
//! publish by value; subscribers register a callback against a signal kind
//! and receive every matching envelope until they drop their subscription.
//! The bus lives inside a single-threaded browser page, so delivery is a
//! plain function call on the publisher's stack with no queueing, ordering
//! guarantees between kinds, or backpressure.

use std::cell::RefCell;
use std::rc::Rc;

/// Identifier assigned to each published signal envelope.
pub type SignalId = u64;

/// Cross-component notifications understood by the client shell.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Signal {
    /// A settings-style view asked the shell to switch inner-page layout on
    /// or off.
    InnerPageMode {
        /// Whether the active view is an inner (drill-down) page.
        inner: bool,
    },
    /// Something requested that the onboarding flow be shown again.
    OnboardingReset,
}

impl Signal {
    /// Discriminator used to route envelopes to subscribers.
    #[must_use]
    pub const fn kind(&self) -> SignalKind {
        match self {
            Self::InnerPageMode { .. } => SignalKind::InnerPageMode,
            Self::OnboardingReset => SignalKind::OnboardingReset,
        }
    }
}

/// Payload-free signal discriminators used for subscription routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Inner-page layout request.
    InnerPageMode,
    /// Onboarding reset request.
    OnboardingReset,
}

/// Metadata wrapper around signals. Each envelope tracks the sequential id
/// assigned at publish time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalEnvelope {
    /// Sequential identifier, starting at 1.
    pub id: SignalId,
    /// The published signal.
    pub signal: Signal,
}

type Handler = Rc<dyn Fn(&SignalEnvelope)>;

struct Registration {
    id: u64,
    kind: SignalKind,
    handler: Handler,
}

#[derive(Default)]
struct BusInner {
    next_signal_id: SignalId,
    next_subscription_id: u64,
    subscribers: Vec<Registration>,
}

/// Handle identifying a live subscription; pass it back to
/// [`SignalBus::unsubscribe`] to stop delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Shared signal bus for a single browser page.
///
/// Cloning the bus yields another handle to the same registry, so the shell
/// can hand one clone to the component tree via context while keeping its
/// own for subscription teardown.
#[derive(Clone, Default)]
pub struct SignalBus {
    inner: Rc<RefCell<BusInner>>,
}

/// Handle identity: two bus values compare equal when they share a registry.
impl PartialEq for SignalBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for SignalBus {}

impl SignalBus {
    /// Construct an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every future envelope of the given kind.
    pub fn subscribe(
        &self,
        kind: SignalKind,
        handler: impl Fn(&SignalEnvelope) + 'static,
    ) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_subscription_id += 1;
        let id = inner.next_subscription_id;
        inner.subscribers.push(Registration {
            id,
            kind,
            handler: Rc::new(handler),
        });
        SubscriptionId(id)
    }

    /// Remove a subscription. Unknown handles are ignored so teardown is
    /// idempotent.
    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|registration| registration.id != subscription.0);
    }

    /// Publish a signal, assigning it a sequential identifier and invoking
    /// every matching subscriber before returning.
    pub fn publish(&self, signal: Signal) -> SignalId {
        let kind = signal.kind();
        // Snapshot the handlers before dispatch so a subscriber may publish
        // or unsubscribe without holding the registry borrow.
        let (id, handlers): (SignalId, Vec<Handler>) = {
            let mut inner = self.inner.borrow_mut();
            inner.next_signal_id += 1;
            let id = inner.next_signal_id;
            let handlers = inner
                .subscribers
                .iter()
                .filter(|registration| registration.kind == kind)
                .map(|registration| Rc::clone(&registration.handler))
                .collect();
            (id, handlers)
        };
        let envelope = SignalEnvelope { id, signal };
        for handler in handlers {
            handler(&envelope);
        }
        id
    }

    /// Number of live subscriptions, across all kinds.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

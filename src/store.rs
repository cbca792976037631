//! Shared handle to the client-side book state.
//!
//! The store owns the canonical [`ClientState`] snapshot. Coordinators push
//! transitions through [`Store::apply`]; views read snapshots through
//! [`Store::subscribe`] or register a [`StoreObserver`] to see every
//! individual transition.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;

use crate::books::{apply, BookTransition, ClientState, TransitionKind};

/// Callback invoked once per applied transition.
///
/// Observers run synchronously while the transition slot is held, so they
/// must not call [`Store::apply`] themselves.
pub trait StoreObserver: Send + Sync {
    fn on_transition(&self, kind: TransitionKind, state: &ClientState);
}

/// Cloneable handle to one client state.
///
/// Exactly one transition is applied at a time. Coordinators in flight
/// contend for the next slot; nothing orders their terminal commits.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<ClientState>,
    sender: watch::Sender<ClientState>,
    observers: RwLock<Vec<Arc<dyn StoreObserver>>>,
}

/// Create a store holding `initial`.
pub fn create_store(initial: ClientState) -> Store {
    Store::new(initial)
}

impl Store {
    pub fn new(initial: ClientState) -> Self {
        let (sender, _) = watch::channel(initial.clone());
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(initial),
                sender,
                observers: RwLock::new(Vec::new()),
            }),
        }
    }

    pub fn with_observers(self, observers: Vec<Arc<dyn StoreObserver>>) -> Self {
        self.inner.observers.write().extend(observers);
        self
    }

    pub fn add_observer(&self, observer: Arc<dyn StoreObserver>) {
        self.inner.observers.write().push(observer);
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> ClientState {
        self.inner.state.lock().clone()
    }

    /// Receiver that is notified after every transition.
    ///
    /// Like any watch channel it only guarantees the latest value; use a
    /// [`StoreObserver`] to see each transition.
    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.inner.sender.subscribe()
    }

    /// Apply one transition and return the resulting snapshot.
    pub fn apply(&self, transition: BookTransition) -> ClientState {
        let kind = transition.kind();
        let mut guard = self.inner.state.lock();
        let next = apply(std::mem::take(&mut *guard), transition);
        *guard = next.clone();

        tracing::trace!(
            transition = %kind,
            is_loading = next.is_loading,
            has_error = next.error.is_some(),
            books = next.books.len(),
            "Applied transition"
        );

        self.inner.sender.send_replace(next.clone());
        for observer in self.inner.observers.read().iter() {
            observer.on_transition(kind, &next);
        }

        next
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(ClientState::default())
    }
}

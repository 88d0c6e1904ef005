//! The emitter itself: a registry of ordered handler lists keyed by event kind.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Event, SubscriptionId};

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// A single registration: the callback plus the identity used to remove it.
struct HandlerEntry<E: Event> {
    id: SubscriptionId,
    callback: Callback<E>,
    once: bool,
}

impl<E: Event> Clone for HandlerEntry<E> {
    fn clone(&self) -> Self {
        HandlerEntry {
            id: self.id,
            callback: Arc::clone(&self.callback),
            once: self.once,
        }
    }
}

/// Outcome counts for one [`EventEmitter::emit`] call.
///
/// Handler return values are never aggregated; this carries operational
/// counts only, and ignoring it is fine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitResult {
    /// Handlers that ran to completion.
    pub delivered: usize,
    /// Handlers that panicked. Dispatch continues past them.
    pub failed: usize,
    /// One-shot handlers found in the snapshot but already consumed by an
    /// earlier (re-entrant or concurrent) emit.
    pub skipped: usize,
}

impl EmitResult {
    /// True when no handler failed during this emit.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Typed publish/subscribe event emitter.
///
/// Maps every event kind (see [`Event`]) to an ordered list of handlers.
/// Producers call [`emit`](Self::emit); consumers register with
/// [`on`](Self::on) or [`once`](Self::once), hold on to the returned
/// [`SubscriptionId`], and deregister with [`off`](Self::off).
///
/// Dispatch follows three fixed rules:
/// - Handlers run synchronously on the emitting thread, in registration
///   order, against a snapshot of the list taken when `emit` starts.
///   Registrations made while an emit is running only take effect for the
///   next emit; removals (other than consumed one-shots) do not retract a
///   handler from the running emit.
/// - A one-shot handler is unregistered immediately before its callback
///   runs, so re-entrant and concurrent emits cannot deliver it twice.
/// - A panicking handler is logged and counted in [`EmitResult::failed`];
///   the remaining handlers for that event still run.
///
/// The registry lives behind `Arc`, so `clone()` hands out another handle
/// to the same emitter. Handlers may call back into the emitter freely:
/// no lock is held while they run.
///
/// ## Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use emitter_rust::{Event, EventEmitter};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum AppEvent {
///     Welcome { name: String },
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum AppEventKind {
///     Welcome,
/// }
///
/// impl Event for AppEvent {
///     type Kind = AppEventKind;
///     fn kind(&self) -> AppEventKind {
///         AppEventKind::Welcome
///     }
/// }
///
/// let bus = EventEmitter::new();
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let sub = bus.on(AppEventKind::Welcome, move |event: &AppEvent| {
///     let AppEvent::Welcome { name } = event;
///     sink.lock().unwrap().push(name.clone());
/// });
///
/// let result = bus.emit(&AppEvent::Welcome { name: "Alice".into() });
/// assert_eq!(result.delivered, 1);
///
/// bus.off(sub);
/// bus.emit(&AppEvent::Welcome { name: "Bob".into() });
/// assert_eq!(*seen.lock().unwrap(), vec!["Alice".to_string()]);
/// ```
pub struct EventEmitter<E: Event> {
    registry: Arc<RwLock<HashMap<E::Kind, Vec<HandlerEntry<E>>>>>,
    next_id: Arc<AtomicU64>,
}

impl<E: Event> EventEmitter<E> {
    /// Create an emitter with an empty registry.
    pub fn new() -> Self {
        EventEmitter {
            registry: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Register `handler` for events of `kind`, appending it to the end of
    /// the delivery order. Always succeeds.
    pub fn on<F>(&self, kind: E::Kind, handler: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.register(kind, handler, false)
    }

    /// Register a one-shot handler for events of `kind`.
    ///
    /// The handler is delivered at most once per registration; its
    /// subscription is consumed as part of that first delivery, before the
    /// emit call returns. `off` with the returned id before the first
    /// matching emit cancels it like any other subscription.
    pub fn once<F>(&self, kind: E::Kind, handler: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.register(kind, handler, true)
    }

    /// Remove the registration with the given id, whatever kind it was
    /// registered under. Returns whether anything was removed; an unknown
    /// or already-consumed id is a no-op.
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry_write();
        for handlers in registry.values_mut() {
            let before = handlers.len();
            handlers.retain(|entry| entry.id != id);
            if handlers.len() != before {
                return true;
            }
        }
        false
    }

    /// Synchronously deliver `event` to every handler registered for its
    /// kind at the moment this call starts, in registration order.
    ///
    /// Emitting a kind with no handlers is a no-op and returns an empty
    /// result.
    pub fn emit(&self, event: &E) -> EmitResult {
        let kind = event.kind();
        let snapshot = {
            let registry = self.registry_read();
            match registry.get(&kind) {
                Some(handlers) if !handlers.is_empty() => handlers.clone(),
                _ => return EmitResult::default(),
            }
        };

        let mut result = EmitResult::default();
        for entry in &snapshot {
            if entry.once && !self.claim(kind, entry.id) {
                result.skipped += 1;
                continue;
            }

            match panic::catch_unwind(AssertUnwindSafe(|| (entry.callback)(event))) {
                Ok(()) => result.delivered += 1,
                Err(payload) => {
                    result.failed += 1;
                    log::warn!(
                        "handler {} for {:?} panicked: {}",
                        entry.id,
                        kind,
                        panic_message(payload.as_ref())
                    );
                }
            }
        }
        result
    }

    /// Number of handlers currently registered for `kind`.
    pub fn listener_count(&self, kind: E::Kind) -> usize {
        self.registry_read().get(&kind).map_or(0, Vec::len)
    }

    /// Whether any handler is registered for `kind`.
    pub fn has_listeners(&self, kind: E::Kind) -> bool {
        self.listener_count(kind) > 0
    }

    /// Total number of handlers across all kinds.
    pub fn total_listeners(&self) -> usize {
        self.registry_read().values().map(Vec::len).sum()
    }

    /// Kinds that currently have at least one handler, in no particular
    /// order.
    pub fn kinds(&self) -> Vec<E::Kind> {
        self.registry_read()
            .iter()
            .filter(|(_, handlers)| !handlers.is_empty())
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// Remove every handler registered for `kind`. Returns how many were
    /// removed.
    pub fn clear_kind(&self, kind: E::Kind) -> usize {
        self.registry_write()
            .remove(&kind)
            .map_or(0, |handlers| handlers.len())
    }

    /// Remove every handler for every kind. Returns how many were removed.
    pub fn clear(&self) -> usize {
        let mut registry = self.registry_write();
        let removed = registry.values().map(Vec::len).sum();
        registry.clear();
        removed
    }

    fn register<F>(&self, kind: E::Kind, handler: F, once: bool) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let entry = HandlerEntry {
            id,
            callback: Arc::new(handler),
            once,
        };
        self.registry_write().entry(kind).or_default().push(entry);
        id
    }

    /// Consume a one-shot registration. Whichever emit removes the entry
    /// wins the right to invoke it.
    fn claim(&self, kind: E::Kind, id: SubscriptionId) -> bool {
        let mut registry = self.registry_write();
        match registry.get_mut(&kind) {
            Some(handlers) => {
                let before = handlers.len();
                handlers.retain(|entry| entry.id != id);
                handlers.len() != before
            }
            None => false,
        }
    }

    // Handler panics happen outside these critical sections, so the data
    // behind a poisoned guard is still consistent.
    fn registry_read(&self) -> RwLockReadGuard<'_, HashMap<E::Kind, Vec<HandlerEntry<E>>>> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn registry_write(&self) -> RwLockWriteGuard<'_, HashMap<E::Kind, Vec<HandlerEntry<E>>>> {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Event> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

// Clones share the registry and the id counter.
impl<E: Event> Clone for EventEmitter<E> {
    fn clone(&self) -> Self {
        EventEmitter {
            registry: Arc::clone(&self.registry),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

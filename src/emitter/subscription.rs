//! Opaque handles identifying a single registration.

use std::fmt;

/// Opaque handle returned by [`EventEmitter::on`](super::EventEmitter::on)
/// and [`EventEmitter::once`](super::EventEmitter::once), and accepted by
/// [`EventEmitter::off`](super::EventEmitter::off).
///
/// Every registration gets a fresh id, so subscribing the same closure
/// twice yields two independently removable subscriptions. Ids are never
/// recycled within an emitter's lifetime; `off` with a stale id is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(raw: u64) -> Self {
        SubscriptionId(raw)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

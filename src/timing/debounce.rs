//! Trailing-edge debouncing for repeated calls.

use std::time::{Duration, Instant};

struct Pending<T> {
    arg: T,
    deadline: Instant,
}

/// Wraps a callback so that a burst of calls collapses into one invocation
/// after the input goes quiet.
///
/// [`call`](Self::call) never invokes the callback directly. It records the
/// argument and arms a deadline one `delay` from now; calling again before
/// the deadline replaces the argument and re-arms it. The host drives
/// delivery by calling [`poll`](Self::poll) from its own loop or tick
/// handler. There are no timers or background threads.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use emitter_rust::Debounce;
///
/// let mut latest = None;
/// let mut search = Debounce::new(Duration::ZERO, |query: &str| {
///     latest = Some(query.len());
/// });
///
/// search.call("r");
/// search.call("ru");
/// search.call("rust");
///
/// // Zero delay: the burst is already quiet, so the next poll delivers
/// // the last argument only.
/// assert!(search.poll());
/// assert!(!search.poll());
///
/// drop(search);
/// assert_eq!(latest, Some(4));
/// ```
pub struct Debounce<T, F: FnMut(T)> {
    func: F,
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T, F: FnMut(T)> Debounce<T, F> {
    pub fn new(delay: Duration, func: F) -> Self {
        Debounce {
            func,
            delay,
            pending: None,
        }
    }

    /// Record `arg` and restart the quiet period. Any previously pending
    /// argument is dropped.
    pub fn call(&mut self, arg: T) {
        self.pending = Some(Pending {
            arg,
            deadline: Instant::now() + self.delay,
        });
    }

    /// Deliver the pending call if its quiet period has elapsed. Returns
    /// whether the callback ran.
    pub fn poll(&mut self) -> bool {
        let due = self
            .pending
            .as_ref()
            .map_or(false, |pending| Instant::now() >= pending.deadline);
        if due {
            self.fire()
        } else {
            false
        }
    }

    /// Deliver the pending call now, deadline or not.
    pub fn flush(&mut self) -> bool {
        self.fire()
    }

    /// Drop the pending call without invoking the callback.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a call is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending call is due. `Some(Duration::ZERO)`
    /// means the next poll delivers; `None` means nothing is pending.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| pending.deadline.saturating_duration_since(Instant::now()))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn fire(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                (self.func)(pending.arg);
                true
            }
            None => false,
        }
    }
}

//! Leading-edge throttling for high-frequency calls.

use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Wraps a callback so that calls pass through at most once per interval.
///
/// The first call fires immediately; calls landing inside the interval are
/// dropped, not queued. Bursty input (cursor moves, scroll, resize) turns
/// into a steady trickle with no trailing delivery.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use emitter_rust::Throttle;
///
/// let mut count = 0;
/// let mut moves = Throttle::new(Duration::from_secs(60), |_pos: (i32, i32)| {
///     count += 1;
/// });
///
/// assert!(moves.call((0, 0)));  // leading edge fires
/// assert!(!moves.call((1, 1))); // inside the interval, dropped
///
/// drop(moves);
/// assert_eq!(count, 1);
/// ```
pub struct Throttle<T, F: FnMut(T)> {
    func: F,
    interval: Duration,
    last_fired: Option<Instant>,
    _input: PhantomData<fn(T)>,
}

impl<T, F: FnMut(T)> Throttle<T, F> {
    pub fn new(interval: Duration, func: F) -> Self {
        Throttle {
            func,
            interval,
            last_fired: None,
            _input: PhantomData,
        }
    }

    /// Invoke the callback with `arg` unless a previous call fired less
    /// than one interval ago. Returns whether the callback ran.
    ///
    /// Dropped calls do not extend the window; only a firing call starts a
    /// new interval.
    pub fn call(&mut self, arg: T) -> bool {
        if !self.ready() {
            return false;
        }
        self.last_fired = Some(Instant::now());
        (self.func)(arg);
        true
    }

    /// Whether a call right now would fire.
    pub fn ready(&self) -> bool {
        match self.last_fired {
            Some(at) => at.elapsed() >= self.interval,
            None => true,
        }
    }

    /// Time left until the throttle reopens. Zero when ready.
    pub fn remaining(&self) -> Duration {
        match self.last_fired {
            Some(at) => self.interval.saturating_sub(at.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Forget the last firing so the next call passes through.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

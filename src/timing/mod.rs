//! Call-rate shaping for bursty inputs.
//!
//! [`Debounce`] holds a call back until its input goes quiet; [`Throttle`]
//! lets calls through at most once per interval. Both are plain values
//! driven entirely by their caller. There are no timers, channels, or
//! background threads, so the host decides when time is checked (see
//! [`Debounce::poll`]) and behavior stays deterministic under test.

mod debounce;
mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;

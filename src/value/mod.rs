//! Structural helpers for loosely typed JSON values.
//!
//! [`deep_merge`] layers one `serde_json::Value` over another, recursing
//! through objects and arrays; [`ValueKind`] names what a value is so
//! callers can match instead of chaining `is_*` probes. Both operate on
//! plain values and never touch the emitter.

mod kind;
mod merge;

pub use kind::ValueKind;
pub use merge::{deep_merge, merge_into, shallow_merge};

//! Core traits defined in `bloodlink-core` and implemented by other crates.

pub mod event_sink;

pub use event_sink::{EventSink, NullEventSink};

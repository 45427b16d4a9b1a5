//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements | Connects to       |
//! |------------|------------|-------------------|
//! | `log_sink` | EventSink  | Serial log output |
//!
//! The sensor side of the boundary lives in [`crate::sensors`].

pub mod log_sink;

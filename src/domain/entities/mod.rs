//! Core domain entities.
//!
//! Entities are plain data structures. Creation input lives in a separate
//! struct ([`NewLink`]) so store-assigned fields (`id`, `created_at`,
//! counters) never have to be invented by callers.

pub mod link;

pub use link::{Link, NewLink};

//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or on a particular database.
//! Implementations of the repository traits live in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;

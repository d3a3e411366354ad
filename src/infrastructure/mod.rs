//! Infrastructure layer for external integrations.
//!
//! Implements the store contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory link stores

pub mod persistence;

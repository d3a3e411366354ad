//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Field rules are enforced by the
//! services.

pub mod health;
pub mod link;

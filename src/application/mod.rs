//! Application layer services implementing business logic.
//!
//! Services consume the repository traits and give HTTP handlers a small,
//! validated API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Code allocation, lookup, listing and deletion
//! - [`services::redirect_service::RedirectService`] - Redirect resolution with click accounting

pub mod services;

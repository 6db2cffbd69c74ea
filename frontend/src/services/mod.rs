//! Data-access services.
//!
//! # Services
//!
//! - [`hero`] - hero list retrieval ([`HeroService`] and its implementations)

pub mod hero;

pub use hero::*;

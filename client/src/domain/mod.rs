//! Domain layer
//!
//! Contains pure data and the traits the core depends on.
//! - `entities`: Posts, portfolios and profiles
//! - `ports`: Trait definitions for external collaborators

pub mod entities;
pub mod ports;

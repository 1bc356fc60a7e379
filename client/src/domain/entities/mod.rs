//! Domain entities
//!
//! Strict records the rest of the crate works with. The HTTP adapter maps
//! API payloads into these before anything else sees them.

pub mod portfolio;
pub mod post;
pub mod profile;

pub use portfolio::{Portfolio, PortfolioProject, PortfolioSection, PortfolioSectionItem};
pub use post::{Post, PostId};
pub use profile::{ContactKind, ContactLine, Profile, EMPTY_CONTACT};

//! Domain ports (traits)
//!
//! Port traits define the collaborators the core needs.
//! Adapters provide concrete implementations of these traits.

pub mod posts;
pub mod profiles;
pub mod scroll;

pub use posts::{FeedQuery, PostSource, SearchKind};
pub use profiles::PortfolioSource;
pub use scroll::{ScrollBehavior, ScrollSurface};

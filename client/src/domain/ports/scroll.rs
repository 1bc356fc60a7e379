//! Scroll surface port
//!
//! The rendering surface that owns the scroll container. Offsets and section
//! boundaries are pushed into the tracker by the caller; the only thing the
//! tracker asks of the surface is to scroll.

/// How a programmatic scroll is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the offset
    Instant,
    /// Animate to the offset
    Smooth,
}

/// A scrollable container
pub trait ScrollSurface {
    /// Scroll the container so its vertical offset becomes `offset`
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);
}

//! Terminal scroll surface
//!
//! A terminal has no scroll container; the portfolio is printed page by
//! page, so a scroll only moves the recorded offset.

use pickgit_client::domain::ports::{ScrollBehavior, ScrollSurface};

#[derive(Debug, Default)]
pub struct TerminalSurface {
    offset: f64,
}

impl TerminalSurface {
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl ScrollSurface for TerminalSurface {
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        tracing::debug!(offset, ?behavior, "Scrolling");
        self.offset = offset;
    }
}

use crate::constants::SLIDE_TRANSITION_MS;
use crate::error::{CoreError, Result};

/// Cyclic slide selector. The index is always in `0..len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Build a carousel over `len` slides opened at `start`. A `start` past
    /// the end opens at the first slide.
    pub fn new(len: usize, start: usize) -> Result<Self> {
        if len == 0 {
            return Err(CoreError::EmptyCarousel);
        }
        let index = if start < len { start } else { 0 };
        Ok(Self { index, len })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Jump to slide `i`. Out-of-range targets are ignored and reported as
    /// `false`; the current slide stays selected.
    pub fn goto(&mut self, i: usize) -> bool {
        if i < self.len {
            self.index = i;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_active(&self, i: usize) -> bool {
        i == self.index
    }

    /// CSS transform that brings the current slide into view.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}

/// CSS transition applied to the slide track.
pub fn track_transition() -> String {
    format!("transform {}ms ease-out", SLIDE_TRANSITION_MS)
}

use crate::constants::SWIPE_THRESHOLD_PX;

/// Carousel transition requested by a completed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled left: show the next slide.
    Next,
    /// Finger travelled right: show the previous slide.
    Prev,
}

/// Single-pointer horizontal swipe tracker.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
    current_x: Option<f64>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
            current_x: None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// Start a new sample. A second touch-start while dragging restarts it.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
        self.current_x = Some(x);
    }

    /// Record the latest pointer X. Ignored unless a sample is open.
    pub fn update(&mut self, x: f64) {
        if self.start_x.is_some() {
            self.current_x = Some(x);
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.current_x = None;
    }

    /// Close the sample and classify it. A touch-end without a matching
    /// touch-start yields nothing.
    pub fn end(&mut self) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let end = self.current_x.take().unwrap_or(start);
        classify_swipe(start - end, self.threshold)
    }
}

/// `distance` is `start_x - end_x`; only travel strictly beyond the
/// threshold counts.
#[inline]
pub fn classify_swipe(distance: f64, threshold: f64) -> Option<SwipeDirection> {
    if distance > threshold {
        Some(SwipeDirection::Next)
    } else if distance < -threshold {
        Some(SwipeDirection::Prev)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_without_begin_is_ignored() {
        let mut t = SwipeTracker::default();
        t.update(10.0);
        assert_eq!(t.end(), None);
    }

    #[test]
    fn tap_without_move_is_not_a_swipe() {
        let mut t = SwipeTracker::default();
        t.begin(200.0);
        assert_eq!(t.end(), None);
        assert!(!t.is_dragging());
    }

    #[test]
    fn threshold_boundary_is_exclusive() {
        let mut t = SwipeTracker::new(50.0);
        t.begin(200.0);
        t.update(150.0);
        assert_eq!(t.end(), None);

        t.begin(200.0);
        t.update(149.0);
        assert_eq!(t.end(), Some(SwipeDirection::Next));

        t.begin(100.0);
        t.update(150.0);
        assert_eq!(t.end(), None);

        t.begin(100.0);
        t.update(151.0);
        assert_eq!(t.end(), Some(SwipeDirection::Prev));
    }

    #[test]
    fn restart_discards_previous_sample() {
        let mut t = SwipeTracker::default();
        t.begin(300.0);
        t.update(100.0);
        t.begin(100.0);
        assert_eq!(t.end(), None);
    }

    #[test]
    fn cancel_drops_sample() {
        let mut t = SwipeTracker::default();
        t.begin(300.0);
        t.update(0.0);
        t.cancel();
        assert_eq!(t.end(), None);
    }
}

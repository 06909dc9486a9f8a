//! Input adapters: keyboard, swipe and the unified event type.

/// Navigation keys recognised by the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a navigation key.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            _ => None,
        }
    }
}

/// Direction of a completed swipe gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left; shows the next item
    Left,
    /// Finger moved right; shows the previous item
    Right,
}

/// Tracks a single touch gesture from start to end.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px: threshold_px.max(0.0),
            start_x: None,
        }
    }

    /// Record the horizontal position where a touch began.
    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture at horizontal position `x`.
    ///
    /// Returns a direction only if the travel strictly exceeds the
    /// threshold. A touch-end without a matching start is ignored.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use media_carousel::{SwipeDirection, SwipeTracker};
    ///
    /// let mut swipe = SwipeTracker::new(50.0);
    /// swipe.touch_start(200.0);
    /// assert_eq!(swipe.touch_end(149.0), Some(SwipeDirection::Left));
    ///
    /// swipe.touch_start(200.0);
    /// assert_eq!(swipe.touch_end(249.0), None);
    /// ```
    pub fn touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= self.threshold_px {
            return None;
        }
        if diff > 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}

/// Every external input the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    /// Previous control clicked
    Previous,
    /// Next control clicked
    Next,
    /// Indicator dot clicked
    Dot(usize),
    Key(Key),
    TouchStart(f64),
    TouchEnd(f64),
    /// Pointer entered the carousel container
    PointerEnter,
    /// Pointer left the carousel container
    PointerLeave,
    /// Auto-advance timer period elapsed
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_key_name("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_key_name("ArrowUp"), None);
        assert_eq!(Key::from_key_name("arrowleft"), None);
    }

    #[test]
    fn swipe_threshold() {
        let mut swipe = SwipeTracker::new(50.0);

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(51.0), None); // 49px

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(50.0), None); // exactly 50px

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(49.0), Some(SwipeDirection::Left)); // 51px left

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(151.0), Some(SwipeDirection::Right)); // 51px right
    }

    #[test]
    fn end_without_start() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.touch_end(0.0), None);

        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(0.0), Some(SwipeDirection::Left));
        // the gesture is consumed by its end
        assert_eq!(swipe.touch_end(0.0), None);
    }
}

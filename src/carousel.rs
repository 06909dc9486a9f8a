//! Slide controller: current index, auto-advance and input handling.

use crate::input::{CarouselEvent, Key, SwipeDirection, SwipeTracker};
use crate::render::CarouselView;
use crate::slide::{wrap_index, ItemSet, ItemState};
use crate::tilt::{ItemRect, ItemTransform, TiltEffect};
use crate::timer::{AutoAdvance, TickOutcome, TimerState};
use crate::CarouselConfig;

/// Platform-agnostic carousel controller.
///
/// Owns the current index, the auto-advance timer and the tilt handler
/// for the active item. It does not touch the DOM or any clock: the
/// caller feeds it [`CarouselEvent`]s (including timer ticks every
/// `interval_ms()`) and renders the resulting [`CarouselView`].
///
/// With zero items every operation is a no-op.
///
/// ## Example
///
/// ```rust
/// use media_carousel::{Carousel, CarouselConfig};
///
/// let mut carousel = Carousel::new(5, CarouselConfig::default());
/// assert!(carousel.view().prev_disabled);
///
/// for _ in 0..3 {
///     carousel.next();
/// }
/// assert_eq!(carousel.current_index(), 3);
/// assert!(!carousel.view().prev_disabled);
/// assert!(!carousel.view().next_disabled);
///
/// carousel.next();
/// carousel.next();
/// assert_eq!(carousel.current_index(), 0);
/// assert!(carousel.view().prev_disabled);
/// ```
#[derive(Clone, Debug)]
pub struct Carousel {
    count: usize,
    current: usize,
    config: CarouselConfig,
    timer: AutoAdvance,
    tilt: TiltEffect,
    swipe: SwipeTracker,
    /// Pointer is over the carousel container
    hovering: bool,
}

impl Carousel {
    /// Create a controller for `count` items, showing the first one with
    /// the auto-advance timer running.
    pub fn new(count: usize, config: CarouselConfig) -> Self {
        let mut carousel = Self {
            count,
            current: 0,
            timer: AutoAdvance::new(&config),
            tilt: TiltEffect::new(config.tilt.clone()),
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            hovering: false,
            config,
        };
        if count > 0 {
            carousel.sync();
        }
        carousel
    }

    /// Create a controller sized to an item set.
    pub fn for_items<T>(items: &ItemSet<T>, config: CarouselConfig) -> Self {
        Self::new(items.len(), config)
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Progress of the auto-advance cycle (0 - 100).
    #[inline]
    pub fn progress(&self) -> f64 {
        self.timer.progress()
    }

    #[inline]
    pub fn is_auto_advancing(&self) -> bool {
        self.timer.state() == TimerState::Running
    }

    #[inline]
    pub fn timer(&self) -> &AutoAdvance {
        &self.timer
    }

    #[inline]
    pub fn tilt(&self) -> &TiltEffect {
        &self.tilt
    }

    /// Get the tick interval in milliseconds.
    ///
    /// Use this to configure your timer.
    #[inline]
    pub fn interval_ms(&self) -> u32 {
        self.timer.interval_ms()
    }

    /// Show the item at `index`.
    ///
    /// Out-of-range indices are ignored. Returns true if a transition happened.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.count == 0 {
            return false;
        }
        if index >= self.count {
            log::warn!("ignoring go_to({}) with {} items", index, self.count);
            return false;
        }
        self.current = index;
        self.sync();
        true
    }

    /// Show the next item, wrapping past the end.
    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    /// Show the previous item, wrapping past the start.
    pub fn previous(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> bool {
        match wrap_index(self.current as isize + delta, self.count) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    /// Resync after the index changed: restart the timer and move the
    /// tilt handler to the new active item.
    fn sync(&mut self) {
        let handle = self.timer.restart();
        self.tilt.bind(self.current);
        log::debug!(
            "carousel at {}/{} (timer {})",
            self.current + 1,
            self.count,
            handle.id()
        );
    }

    /// Advance the auto-advance timer by one period.
    ///
    /// Returns true if the progress or the active item changed.
    pub fn tick(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        match self.timer.tick() {
            TickOutcome::Idle => false,
            TickOutcome::Progressed(_) => true,
            TickOutcome::Completed => self.next(),
        }
    }

    /// Pointer entered the carousel: pause auto-advance.
    pub fn pointer_enter(&mut self) -> bool {
        self.hovering = true;
        if self.count == 0 || !self.timer.is_running() {
            return false;
        }
        self.timer.suspend();
        true
    }

    /// Pointer left the carousel: restart auto-advance from zero.
    pub fn pointer_leave(&mut self) -> bool {
        self.hovering = false;
        if self.count == 0 {
            return false;
        }
        self.timer.restart();
        true
    }

    /// A touch began at horizontal position `x`.
    ///
    /// Progress resets and auto-advance pauses until the touch ends.
    pub fn touch_start(&mut self, x: f64) -> bool {
        if self.count == 0 {
            return false;
        }
        self.swipe.touch_start(x);
        self.timer.suspend();
        true
    }

    /// A touch ended at horizontal position `x`.
    ///
    /// A swipe past the threshold navigates; anything shorter only
    /// resumes auto-advance (unless the pointer is over the carousel).
    pub fn touch_end(&mut self, x: f64) -> bool {
        if self.count == 0 {
            return false;
        }
        match self.swipe.touch_end(x) {
            Some(SwipeDirection::Left) => self.next(),
            Some(SwipeDirection::Right) => self.previous(),
            None if !self.hovering && !self.timer.is_running() => {
                self.timer.restart();
                true
            }
            None => false,
        }
    }

    /// Handle an arrow key press.
    pub fn key(&mut self, key: Key) -> bool {
        match key {
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
        }
    }

    /// Dispatch any external input.
    ///
    /// Returns true if the visual state changed and should be re-rendered.
    pub fn handle(&mut self, event: CarouselEvent) -> bool {
        match event {
            CarouselEvent::Previous => self.previous(),
            CarouselEvent::Next => self.next(),
            CarouselEvent::Dot(index) => self.go_to(index),
            CarouselEvent::Key(key) => self.key(key),
            CarouselEvent::TouchStart(x) => self.touch_start(x),
            CarouselEvent::TouchEnd(x) => self.touch_end(x),
            CarouselEvent::PointerEnter => self.pointer_enter(),
            CarouselEvent::PointerLeave => self.pointer_leave(),
            CarouselEvent::Tick => self.tick(),
        }
    }

    /// Pointer entered item `index`. Only the active item reacts.
    pub fn item_pointer_enter(&mut self, index: usize) -> bool {
        self.tilt.pointer_enter(index)
    }

    /// Pointer moved over item `index` whose on-screen bounds are `rect`.
    pub fn item_pointer_move(&mut self, index: usize, rect: &ItemRect, x: f64, y: f64) -> Option<ItemTransform> {
        self.tilt.pointer_move(index, rect, x, y)
    }

    /// Pointer left item `index`.
    pub fn item_pointer_leave(&mut self, index: usize) -> Option<ItemTransform> {
        self.tilt.pointer_leave(index)
    }

    /// Previous control is disabled on the first item.
    ///
    /// This is deliberately not circular even though `previous()` wraps.
    #[inline]
    pub fn prev_disabled(&self) -> bool {
        self.current == 0
    }

    /// Next control is disabled on the last item.
    #[inline]
    pub fn next_disabled(&self) -> bool {
        self.current + 1 >= self.count
    }

    /// Display state of item `index`.
    #[inline]
    pub fn item_state(&self, index: usize) -> ItemState {
        ItemState::for_index(index, self.current, self.count)
    }

    /// Snapshot of everything a renderer needs to draw.
    pub fn view(&self) -> CarouselView {
        CarouselView {
            items: (0..self.count).map(|i| self.item_state(i)).collect(),
            dots: (0..self.count).map(|i| i == self.current).collect(),
            prev_disabled: self.prev_disabled(),
            next_disabled: self.next_disabled(),
            progress: self.progress(),
            tilting: self.tilt.is_tilting(),
            transform: self.tilt.transform(),
        }
    }
}

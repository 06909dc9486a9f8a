//! Auto-advance timer for the progress indicator.

use crate::CarouselConfig;

/// Identifier of a scheduled auto-advance timer.
///
/// A new handle is issued every time the timer restarts, so a handle held
/// by a stale callback never matches the live one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[inline]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Whether the auto-advance timer is counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerState {
    /// Ticks advance progress
    Running,
    /// Ticks are ignored
    Suspended,
}

/// Result of a single timer tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Timer is suspended; nothing changed
    Idle,
    /// Progress advanced to the given percentage
    Progressed(f64),
    /// Progress was full; the carousel should advance
    Completed,
}

/// Platform-agnostic auto-advance timer.
///
/// This timer does not handle timing directly. The caller drives it by
/// calling `tick()` every `interval_ms()` milliseconds.
///
/// ## Example
///
/// ```rust
/// use media_carousel::{AutoAdvance, CarouselConfig, TickOutcome};
///
/// let mut timer = AutoAdvance::new(&CarouselConfig::default());
/// timer.restart();
///
/// for _ in 0..100 {
///     timer.tick();
/// }
/// assert_eq!(timer.progress(), 100.0);
/// assert_eq!(timer.tick(), TickOutcome::Completed);
/// ```
#[derive(Clone, Debug)]
pub struct AutoAdvance {
    /// Milliseconds elapsed in the current cycle
    elapsed_ms: u32,
    interval_ms: u32,
    duration_ms: u32,
    state: TimerState,
    /// Live timer, if any
    handle: Option<TimerHandle>,
    next_id: u64,
}

impl AutoAdvance {
    /// Create a suspended timer using the config's periods.
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            elapsed_ms: 0,
            interval_ms: config.tick_interval(),
            duration_ms: config.advance_duration(),
            state: TimerState::Suspended,
            handle: None,
            next_id: 0,
        }
    }

    /// Get the tick interval in milliseconds.
    #[inline]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Cancel any live timer, reset progress and start a new one.
    ///
    /// Returns the handle of the new timer.
    pub fn restart(&mut self) -> TimerHandle {
        self.cancel();
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.handle = Some(handle);
        self.state = TimerState::Running;
        handle
    }

    /// Cancel the live timer and reset progress without starting a new one.
    pub fn suspend(&mut self) {
        self.cancel();
        self.state = TimerState::Suspended;
    }

    fn cancel(&mut self) {
        self.handle = None;
        self.elapsed_ms = 0;
    }

    /// Advance the timer by one interval.
    ///
    /// A tick that finds progress already full completes the cycle and
    /// cancels the timer; the caller is expected to transition, which
    /// restarts it.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != TimerState::Running {
            return TickOutcome::Idle;
        }
        if self.elapsed_ms >= self.duration_ms {
            self.cancel();
            self.state = TimerState::Suspended;
            return TickOutcome::Completed;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(self.interval_ms);
        TickOutcome::Progressed(self.progress())
    }

    /// Progress through the current cycle as a percentage (0 - 100).
    pub fn progress(&self) -> f64 {
        (self.elapsed_ms as f64 * 100.0 / self.duration_ms as f64).min(100.0)
    }

    #[inline]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// The live timer handle. At most one exists at any time.
    #[inline]
    pub fn active_handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    /// Check whether `handle` still refers to the live timer.
    #[inline]
    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.handle == Some(handle)
    }
}

/// Change needed to bring a scheduled platform interval in line with the
/// live timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reschedule<I> {
    /// Interval to clear first
    pub cancel: Option<I>,
    /// Timer to schedule a new interval for afterwards
    pub start: Option<TimerHandle>,
}

/// Decide how to reconcile the interval scheduled for `scheduled` with the
/// `live` timer handle.
///
/// Returns `None` when they already match. Otherwise the old interval is
/// always cancelled before a new one starts, so at most one interval is
/// ever scheduled.
///
/// ## Example
///
/// ```rust
/// use media_carousel::{reschedule, AutoAdvance, CarouselConfig};
///
/// let mut timer = AutoAdvance::new(&CarouselConfig::default());
/// let first = timer.restart();
/// assert_eq!(reschedule(Some((first, 7)), timer.active_handle()), None);
///
/// let second = timer.restart();
/// let plan = reschedule(Some((first, 7)), timer.active_handle()).unwrap();
/// assert_eq!(plan.cancel, Some(7));
/// assert_eq!(plan.start, Some(second));
/// ```
pub fn reschedule<I: Copy>(scheduled: Option<(TimerHandle, I)>, live: Option<TimerHandle>) -> Option<Reschedule<I>> {
    if scheduled.map(|(handle, _)| handle) == live {
        return None;
    }
    Some(Reschedule {
        cancel: scheduled.map(|(_, id)| id),
        start: live,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> AutoAdvance {
        AutoAdvance::new(&CarouselConfig::default())
    }

    #[test]
    fn starts_suspended() {
        let mut t = timer();
        assert_eq!(t.state(), TimerState::Suspended);
        assert_eq!(t.tick(), TickOutcome::Idle);
        assert_eq!(t.active_handle(), None);
    }

    #[test]
    fn completes_after_full_cycle() {
        let mut t = timer();
        t.restart();
        for i in 1..=100 {
            assert_eq!(t.tick(), TickOutcome::Progressed(i as f64));
        }
        assert_eq!(t.tick(), TickOutcome::Completed);
        assert_eq!(t.progress(), 0.0);
        assert!(!t.is_running());
        assert_eq!(t.tick(), TickOutcome::Idle);
    }

    #[test]
    fn restart_replaces_handle() {
        let mut t = timer();
        let first = t.restart();
        t.tick();
        let second = t.restart();
        assert_ne!(first, second);
        assert!(!t.is_current(first));
        assert!(t.is_current(second));
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn suspend_clears_progress() {
        let mut t = timer();
        t.restart();
        t.tick();
        t.tick();
        t.suspend();
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.active_handle(), None);
        assert_eq!(t.tick(), TickOutcome::Idle);
    }

    #[test]
    fn uneven_increment_caps_at_100() {
        let config = CarouselConfig {
            tick_interval_ms: 30,
            advance_duration_ms: 100,
            ..Default::default()
        };
        let mut t = AutoAdvance::new(&config);
        t.restart();
        for _ in 0..4 {
            t.tick();
        }
        assert_eq!(t.progress(), 100.0);
        assert_eq!(t.tick(), TickOutcome::Completed);
    }

    #[test]
    fn reschedule_keeps_single_interval() {
        let mut t = timer();
        let mut scheduled: Option<(TimerHandle, i32)> = None;
        let mut next_id = 0;
        let mut cancelled = Vec::new();

        // rapid restarts, a suspend, then a fresh start
        for step in 0..6 {
            match step {
                4 => t.suspend(),
                _ => {
                    t.restart();
                }
            }
            if let Some(plan) = reschedule(scheduled, t.active_handle()) {
                if let Some(id) = plan.cancel {
                    cancelled.push(id);
                    scheduled = None;
                }
                if let Some(handle) = plan.start {
                    // cancel happened first: nothing may still be scheduled
                    assert_eq!(scheduled, None);
                    next_id += 1;
                    scheduled = Some((handle, next_id));
                }
            }
            assert_eq!(scheduled.map(|(h, _)| h), t.active_handle());
        }
        assert_eq!(cancelled, vec![1, 2, 3, 4]);
        assert_eq!(scheduled, Some((TimerHandle(5), 5)));
    }

    #[test]
    fn reschedule_noop_when_matching() {
        assert_eq!(reschedule::<i32>(None, None), None);
        let plan = reschedule::<i32>(None, Some(TimerHandle(1))).unwrap();
        assert_eq!(plan, Reschedule { cancel: None, start: Some(TimerHandle(1)) });
        let plan = reschedule(Some((TimerHandle(1), 9)), None).unwrap();
        assert_eq!(plan, Reschedule { cancel: Some(9), start: None });
    }
}

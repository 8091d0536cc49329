//! Rotation state for the featured-items carousel
//!
//! The state owns the autoplay deadline: every navigation, manual or
//! automatic, re-arms it, so at most one auto-advance is ever pending.
//! Time is passed in explicitly, which keeps the transitions testable
//! without a real clock.

use std::time::{Duration, Instant};

/// Default interval between automatic slide advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(15);

/// Carousel rotation state over the featured subset.
#[derive(Debug)]
pub struct CarouselState {
    current: usize,
    total: usize,
    interval: Duration,
    deadline: Option<Instant>,
}

impl CarouselState {
    /// Create the state, starting at slide 0 with autoplay armed.
    ///
    /// Returns `None` when there is nothing to rotate over; the caller keeps
    /// the carousel section hidden in that case.
    pub fn new(total: usize, interval: Duration, now: Instant) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let mut state = Self {
            current: 0,
            total,
            interval,
            deadline: None,
        };
        state.rearm(now);
        Some(state)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Jump to a slide. Indices are normalized into `[0, total)`, so `-1`
    /// wraps to the last slide and `total` wraps back to the first.
    /// Restarts the autoplay timer.
    pub fn go_to(&mut self, index: isize, now: Instant) {
        self.current = index.rem_euclid(self.total as isize) as usize;
        self.rearm(now);
    }

    pub fn next(&mut self, now: Instant) {
        self.go_to(self.current as isize + 1, now);
    }

    pub fn prev(&mut self, now: Instant) {
        self.go_to(self.current as isize - 1, now);
    }

    /// Advance one slide if the autoplay deadline has passed.
    /// Returns whether a slide change happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.next(now);
                true
            }
            _ => false,
        }
    }

    /// Fraction of the autoplay interval elapsed, for the progress gauge.
    /// Always 0.0 while autoplay is off (single slide).
    pub fn progress(&self, now: Instant) -> f64 {
        match self.deadline {
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(now).as_secs_f64();
                (1.0 - remaining / self.interval.as_secs_f64()).clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }

    pub fn autoplay_armed(&self) -> bool {
        self.deadline.is_some()
    }

    // A single slide never rotates.
    fn rearm(&mut self, now: Instant) {
        self.deadline = (self.total > 1).then(|| now + self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total: usize, now: Instant) -> CarouselState {
        CarouselState::new(total, AUTOPLAY_INTERVAL, now).expect("non-empty carousel")
    }

    #[test]
    fn test_zero_slides_creates_no_state() {
        assert!(CarouselState::new(0, AUTOPLAY_INTERVAL, Instant::now()).is_none());
    }

    #[test]
    fn test_negative_index_wraps_to_last() {
        let now = Instant::now();
        let mut carousel = state(3, now);
        carousel.go_to(-1, now);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_overflow_index_wraps_to_first() {
        let now = Instant::now();
        let mut carousel = state(3, now);
        carousel.go_to(3, now);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_next_wraps_around() {
        let now = Instant::now();
        let mut carousel = state(3, now);
        carousel.go_to(2, now);
        carousel.next(now);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_prev_from_first_goes_to_last() {
        let now = Instant::now();
        let mut carousel = state(3, now);
        carousel.prev(now);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_autoplay_advances_after_interval() {
        let now = Instant::now();
        let mut carousel = state(3, now);

        assert!(!carousel.tick(now + AUTOPLAY_INTERVAL / 2));
        assert_eq!(carousel.current(), 0);

        assert!(carousel.tick(now + AUTOPLAY_INTERVAL));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_navigation_restarts_autoplay() {
        let start = Instant::now();
        let mut carousel = state(3, start);

        // Navigate just before the deadline; the old advance must be dead.
        let nav_time = start + AUTOPLAY_INTERVAL - Duration::from_secs(1);
        carousel.go_to(2, nav_time);

        assert!(!carousel.tick(start + AUTOPLAY_INTERVAL));
        assert_eq!(carousel.current(), 2);

        // The fresh interval counts from the navigation, not from start.
        assert!(carousel.tick(nav_time + AUTOPLAY_INTERVAL));
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_no_double_advance_within_one_interval() {
        let start = Instant::now();
        let mut carousel = state(3, start);

        let fired = carousel.tick(start + AUTOPLAY_INTERVAL);
        assert!(fired);
        // Immediately after firing, a full new interval must elapse first.
        assert!(!carousel.tick(start + AUTOPLAY_INTERVAL + Duration::from_millis(100)));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_single_slide_never_arms_autoplay() {
        let now = Instant::now();
        let mut carousel = state(1, now);
        assert!(!carousel.autoplay_armed());
        assert!(!carousel.tick(now + AUTOPLAY_INTERVAL * 2));
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.progress(now + AUTOPLAY_INTERVAL), 0.0);
    }

    #[test]
    fn test_progress_grows_and_resets() {
        let start = Instant::now();
        let mut carousel = state(2, start);

        let early = carousel.progress(start + Duration::from_secs(3));
        let late = carousel.progress(start + Duration::from_secs(12));
        assert!(early < late);
        assert!(late <= 1.0);

        let nav_time = start + Duration::from_secs(12);
        carousel.next(nav_time);
        assert_eq!(carousel.progress(nav_time), 0.0);
    }
}

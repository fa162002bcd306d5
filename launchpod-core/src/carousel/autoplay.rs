//! Timed auto-advance for an [`IndexCarousel`].

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::state::{IndexCarousel, IndexChange};

/// Autoplay tuning, usually read from the site configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayParams {
    /// Whether the carousel advances on its own at all.
    pub enabled: bool,
    /// Delay between automatic advances, in milliseconds.
    pub interval_ms: u64,
    /// Hold the current card while the pointer is over the carousel.
    pub pause_on_hover: bool,
}

impl Default for AutoplayParams {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 5_000,
            pause_on_hover: true,
        }
    }
}

impl AutoplayParams {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Advances a carousel every `interval` while running.
///
/// Paused while hovered (if configured) or while the carousel is off screen.
/// Manual navigation calls [`Autoplay::restart`] so the user always gets a
/// full interval on the card they picked. Missed intervals never stack: one
/// tick advances at most one card.
#[derive(Debug, Clone)]
pub struct Autoplay {
    params: AutoplayParams,
    next_due: Option<Instant>,
    hovered: bool,
    visible: bool,
}

impl Autoplay {
    pub fn new(params: AutoplayParams) -> Self {
        Self {
            params,
            next_due: None,
            hovered: false,
            visible: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.params.enabled
            && self.visible
            && !(self.params.pause_on_hover && self.hovered)
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    fn reschedule(&mut self, now: Instant) {
        self.next_due = self
            .is_running()
            .then(|| now + self.params.interval());
    }

    pub fn restart(&mut self, now: Instant) {
        self.reschedule(now);
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.reschedule(now);
        }
    }

    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if self.visible != visible {
            self.visible = visible;
            self.reschedule(now);
        }
    }

    /// Advance `carousel` if an interval has elapsed.
    pub fn tick(
        &mut self,
        now: Instant,
        carousel: &mut IndexCarousel,
    ) -> Option<IndexChange> {
        let due = self.next_due?;
        if now < due {
            return None;
        }
        self.next_due = Some(now + self.params.interval());
        carousel.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(now: Instant) -> Autoplay {
        let mut autoplay = Autoplay::new(AutoplayParams {
            enabled: true,
            interval_ms: 1_000,
            pause_on_hover: true,
        });
        autoplay.set_visible(true, now);
        autoplay
    }

    #[test]
    fn advances_once_per_interval() {
        let t0 = Instant::now();
        let mut carousel = IndexCarousel::new(3).unwrap();
        let mut autoplay = running(t0);

        assert!(autoplay.tick(t0 + Duration::from_millis(999), &mut carousel).is_none());
        assert!(autoplay.tick(t0 + Duration::from_millis(1_000), &mut carousel).is_some());
        assert_eq!(carousel.current(), 1);
        // A long stall only advances one card.
        autoplay.tick(t0 + Duration::from_millis(10_000), &mut carousel);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn manual_navigation_restarts_interval() {
        let t0 = Instant::now();
        let mut carousel = IndexCarousel::new(4).unwrap();
        let mut autoplay = running(t0);

        let t1 = t0 + Duration::from_millis(900);
        carousel.next();
        autoplay.restart(t1);

        assert!(autoplay.tick(t0 + Duration::from_millis(1_500), &mut carousel).is_none());
        assert!(autoplay.tick(t1 + Duration::from_millis(1_000), &mut carousel).is_some());
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn hover_and_offscreen_pause() {
        let t0 = Instant::now();
        let mut carousel = IndexCarousel::new(2).unwrap();
        let mut autoplay = running(t0);

        autoplay.set_hovered(true, t0);
        assert!(!autoplay.is_running());
        assert!(autoplay.tick(t0 + Duration::from_secs(5), &mut carousel).is_none());

        autoplay.set_hovered(false, t0 + Duration::from_secs(5));
        autoplay.set_visible(false, t0 + Duration::from_secs(5));
        assert!(autoplay.tick(t0 + Duration::from_secs(9), &mut carousel).is_none());
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn disabled_never_schedules() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(AutoplayParams {
            enabled: false,
            ..AutoplayParams::default()
        });
        autoplay.set_visible(true, t0);
        assert_eq!(autoplay.next_due(), None);
    }
}

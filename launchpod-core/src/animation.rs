//! Time-based tweens for smooth scrolling, carousel cross-fades and pill slides.
//!
//! Time is always passed in by the caller so a frame loop (or a test) decides
//! what "now" is.

use std::time::{Duration, Instant};

/// Easing function types for transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    EaseOutCubic,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Tween from one scalar to another over a fixed duration.
#[derive(Debug, Clone)]
pub struct Tween {
    active: bool,
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn idle(value: f32) -> Self {
        Self {
            active: false,
            from: value,
            to: value,
            started_at: Instant::now(),
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    pub fn start(
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) -> Self {
        Self {
            active: true,
            from,
            to,
            started_at: now,
            duration,
            easing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Value at `now`, without advancing state.
    pub fn sample(&self, now: Instant) -> f32 {
        if !self.active || self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Returns Some(next_value) while animating (the final frame included),
    /// or None when finished/inactive.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let value = self.sample(now);
        if now.saturating_duration_since(self.started_at) >= self.duration {
            self.active = false;
        }
        Some(value)
    }

    /// Restart towards a new target from wherever the tween currently is.
    pub fn retarget(&mut self, to: f32, duration: Duration, now: Instant) {
        let from = self.sample(now);
        *self = Self::start(from, to, duration, self.easing, now);
    }
}

/// Boolean flag that stays raised for a fixed duration after `trigger`.
#[derive(Debug, Clone, Default)]
pub struct Pulse {
    until: Option<Instant>,
}

impl Pulse {
    pub fn trigger(&mut self, now: Instant, duration: Duration) {
        self.until = Some(now + duration);
    }

    /// Clears the flag once expired; returns whether it is still raised.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.until {
            Some(until) if now >= until => {
                self.until = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    pub fn is_raised(&self) -> bool {
        self.until.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_functions() {
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);

        // EaseOut should ease out (slow down) at the end
        let mid = Easing::EaseOutCubic.apply(0.5);
        assert!(mid > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn tween_finishes_on_target() {
        let t0 = Instant::now();
        let mut tween =
            Tween::start(0.0, 100.0, Duration::from_millis(200), Easing::Linear, t0);

        let mid = tween.tick(t0 + Duration::from_millis(100)).unwrap();
        assert!((mid - 50.0).abs() < 0.5);
        assert_eq!(tween.tick(t0 + Duration::from_millis(250)), Some(100.0));
        assert!(!tween.is_active());
        assert_eq!(tween.tick(t0 + Duration::from_millis(300)), None);
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let t0 = Instant::now();
        let mut tween =
            Tween::start(0.0, 100.0, Duration::from_millis(100), Easing::Linear, t0);
        let half = t0 + Duration::from_millis(50);
        tween.retarget(0.0, Duration::from_millis(100), half);
        assert!((tween.sample(half) - 50.0).abs() < 0.5);
        assert_eq!(tween.target(), 0.0);
    }

    #[test]
    fn pulse_clears_after_duration() {
        let t0 = Instant::now();
        let mut pulse = Pulse::default();
        pulse.trigger(t0, Duration::from_millis(800));
        assert!(pulse.tick(t0 + Duration::from_millis(400)));
        assert!(!pulse.tick(t0 + Duration::from_millis(800)));
        assert!(!pulse.is_raised());
    }
}

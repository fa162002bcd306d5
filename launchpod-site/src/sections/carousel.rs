//! Event-card and testimonial carousels.

use std::time::{Duration, Instant};

use launchpod_core::CarouselError;
use launchpod_core::activation::{GateEvent, Observation};
use launchpod_core::animation::{Easing, Tween};
use launchpod_core::carousel::{Autoplay, AutoplayParams, Direction, IndexCarousel, IndexChange};
use launchpod_core::scroll::Region;

use crate::effect::Effect;
use crate::error::{SiteError, SiteResult};

const SLIDE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMessage {
    Next,
    Prev,
    /// Dot indicator click.
    JumpTo(usize),
    Hover(bool),
}

impl CarouselMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "Carousel::Next",
            Self::Prev => "Carousel::Prev",
            Self::JumpTo(_) => "Carousel::JumpTo",
            Self::Hover(_) => "Carousel::Hover",
        }
    }
}

/// A carousel over a fixed list plus its autoplay timer and slide tween.
///
/// Without an observation the carousel counts as always on screen.
#[derive(Debug)]
pub struct CarouselSection<T> {
    section: &'static str,
    items: Vec<T>,
    carousel: IndexCarousel,
    autoplay: Autoplay,
    observation: Option<Observation>,
    slide: Tween,
}

impl<T> CarouselSection<T> {
    pub fn new(
        section: &'static str,
        items: Vec<T>,
        params: AutoplayParams,
        observation: Option<Observation>,
        now: Instant,
    ) -> SiteResult<Self> {
        let carousel = IndexCarousel::new(items.len())
            .map_err(|source| SiteError::Carousel { section, source })?;
        let mut autoplay = Autoplay::new(params);
        let visible = observation.as_ref().is_none_or(Observation::is_active);
        autoplay.set_visible(visible, now);
        Ok(Self {
            section,
            items,
            carousel,
            autoplay,
            observation,
            slide: Tween::idle(0.0),
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current(&self) -> &T {
        &self.items[self.carousel.current()]
    }

    pub fn index(&self) -> usize {
        self.carousel.current()
    }

    pub fn carousel(&self) -> &IndexCarousel {
        &self.carousel
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn observation(&self) -> Option<&Observation> {
        self.observation.as_ref()
    }

    pub fn set_region(&self, region: Region) {
        if let Some(observation) = &self.observation {
            observation.set_region(region);
        }
    }

    /// Horizontal offset of the incoming card, in card widths.
    pub fn slide_offset(&self, now: Instant) -> f32 {
        self.slide.sample(now)
    }

    pub fn on_gate(&mut self, event: GateEvent, now: Instant) {
        self.autoplay
            .set_visible(matches!(event, GateEvent::Activated), now);
    }

    fn animate(&mut self, change: IndexChange, now: Instant) {
        let from = match change.direction {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        };
        self.slide = Tween::start(from, 0.0, SLIDE_DURATION, Easing::EaseOut, now);
    }

    pub fn update(
        &mut self,
        message: CarouselMessage,
        now: Instant,
    ) -> Result<Vec<Effect>, CarouselError> {
        let change = match message {
            CarouselMessage::Next => self.carousel.next(),
            CarouselMessage::Prev => self.carousel.prev(),
            CarouselMessage::JumpTo(index) => {
                let index = isize::try_from(index).unwrap_or(isize::MAX);
                self.carousel.jump_to(index)?
            }
            CarouselMessage::Hover(hovered) => {
                self.autoplay.set_hovered(hovered, now);
                return Ok(Vec::new());
            }
        };
        self.autoplay.restart(now);
        if let Some(change) = change {
            tracing::debug!(
                section = self.section,
                from = change.from,
                to = change.to,
                "carousel moved"
            );
            self.animate(change, now);
        }
        Ok(Vec::new())
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(change) = self.autoplay.tick(now, &mut self.carousel) {
            tracing::trace!(section = self.section, to = change.to, "carousel autoplay");
            self.animate(change, now);
        }
        self.slide.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(now: Instant) -> CarouselSection<&'static str> {
        CarouselSection::new(
            "event_cards",
            vec!["a", "b", "c"],
            AutoplayParams {
                enabled: true,
                interval_ms: 1_000,
                pause_on_hover: true,
            },
            None,
            now,
        )
        .unwrap()
    }

    #[test]
    fn empty_list_is_a_site_error() {
        let err = CarouselSection::<u8>::new(
            "testimonials",
            Vec::new(),
            AutoplayParams::default(),
            None,
            Instant::now(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SiteError::Carousel {
                section: "testimonials",
                source: CarouselError::Empty,
            }
        ));
    }

    #[test]
    fn manual_navigation_postpones_autoplay() {
        let t0 = Instant::now();
        let mut section = cards(t0);
        assert!(section.is_autoplaying());

        let t1 = t0 + Duration::from_millis(800);
        section.update(CarouselMessage::Prev, t1).unwrap();
        assert_eq!(*section.current(), "c");
        assert_eq!(section.slide_offset(t1), -1.0);

        section.tick(t0 + Duration::from_millis(1_200));
        assert_eq!(section.index(), 2);
        section.tick(t1 + Duration::from_millis(1_000));
        assert_eq!(section.index(), 0);
    }

    #[test]
    fn bad_jump_is_reported_and_ignored() {
        let mut section = cards(Instant::now());
        assert!(section.update(CarouselMessage::JumpTo(7), Instant::now()).is_err());
        assert_eq!(section.index(), 0);
    }

    #[test]
    fn hover_pauses() {
        let t0 = Instant::now();
        let mut section = cards(t0);
        section.update(CarouselMessage::Hover(true), t0).unwrap();
        section.tick(t0 + Duration::from_secs(3));
        assert_eq!(section.index(), 0);
    }
}

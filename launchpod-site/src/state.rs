//! Whole-page state.

use std::time::Instant;

use launchpod_config::SiteConfig;
use launchpod_core::activation::{GateEvent, ObservationId, ViewportObserver};
use launchpod_core::forms::FormKind;
use launchpod_core::scroll::Viewport;
use launchpod_core::showcase::LayoutMode;
use launchpod_model::{Catalog, EventCard, Stat, Testimonial};

use crate::effect::Effect;
use crate::error::SiteResult;
use crate::notifications::ToastManager;
use crate::page::{PageLayout, Section};
use crate::sections::{
    CarouselSection, FaqSection, FormSection, HeroState, NavState, PastEventsSection,
    ShowcaseSection,
};

/// Which section owns an activation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateOwner {
    HeroLine,
    Testimonials,
    Gallery,
    ShowcaseVideo,
}

#[derive(Debug)]
pub struct SiteState {
    pub viewport: Viewport,
    pub page: PageLayout,
    /// Heights came from the renderer rather than [`PageLayout::estimate`].
    page_measured: bool,
    observer: ViewportObserver,

    pub nav: NavState,
    pub event_cards: CarouselSection<EventCard>,
    pub hero: HeroState,
    pub showcase: ShowcaseSection,
    pub past_events: PastEventsSection,
    pub testimonials: CarouselSection<Testimonial>,
    pub stats: Vec<Stat>,
    pub faq: FaqSection,
    pub contact: FormSection,
    pub booking: FormSection,
    pub toasts: ToastManager,
}

impl SiteState {
    /// Build every section for `viewport`, then evaluate all gates once so
    /// sections already on screen start active.
    pub fn new(
        config: &SiteConfig,
        catalog: Catalog,
        viewport: Viewport,
        now: Instant,
    ) -> SiteResult<Self> {
        let observer = ViewportObserver::new();
        let Catalog {
            showcase,
            event_cards,
            testimonials,
            stats,
            faq,
            gallery,
            keywords,
        } = catalog;

        let stacked =
            LayoutMode::for_width(viewport.width, &config.layout) == LayoutMode::Stacked;
        let page = PageLayout::estimate(viewport, showcase.len(), stacked);
        let activation = &config.activation;

        let event_cards =
            CarouselSection::new("event_cards", event_cards, config.carousel.events, None, now)?;
        let hero = HeroState::new(
            &observer,
            page.region(Section::Hero),
            activation.hero_line,
            keywords,
            config.navigation.keyword_pulse(),
            now,
        );
        let showcase = ShowcaseSection::new(
            &observer,
            showcase,
            config.layout,
            activation.showcase_video,
            page.region(Section::Showcase).top,
            viewport,
        )?;
        let past_events = PastEventsSection::new(
            &observer,
            gallery,
            page.region(Section::PastEvents),
            activation.gallery,
        );
        let testimonials_gate =
            observer.observe(page.region(Section::Testimonials), activation.testimonials);
        let testimonials = CarouselSection::new(
            "testimonials",
            testimonials,
            config.carousel.testimonials,
            Some(testimonials_gate),
            now,
        )?;

        let mut state = Self {
            viewport,
            page,
            page_measured: false,
            observer,
            nav: NavState::new(config.navigation),
            event_cards,
            hero,
            showcase,
            past_events,
            testimonials,
            stats,
            faq: FaqSection::new(faq),
            contact: FormSection::newsletter(),
            booking: FormSection::booking(),
            toasts: ToastManager::default(),
        };
        state.apply_viewport(viewport, now);
        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            document_height = state.page.document_height(),
            observations = state.observer.len(),
            "page state initialised"
        );
        Ok(state)
    }

    pub fn observer(&self) -> &ViewportObserver {
        &self.observer
    }

    pub fn form(&self, kind: FormKind) -> &FormSection {
        match kind {
            FormKind::Newsletter => &self.contact,
            FormKind::Booking => &self.booking,
        }
    }

    fn gate_owner(&self, id: ObservationId) -> Option<GateOwner> {
        if self.hero.observation().id() == id {
            Some(GateOwner::HeroLine)
        } else if self.testimonials.observation().is_some_and(|o| o.id() == id) {
            Some(GateOwner::Testimonials)
        } else if self.past_events.observation().id() == id {
            Some(GateOwner::Gallery)
        } else if self.showcase.video_observation().id() == id {
            Some(GateOwner::ShowcaseVideo)
        } else {
            None
        }
    }

    fn route_gate(&mut self, id: ObservationId, event: GateEvent, now: Instant) -> Vec<Effect> {
        match self.gate_owner(id) {
            Some(GateOwner::HeroLine) => self.hero.on_gate(event, now),
            Some(GateOwner::Testimonials) => self.testimonials.on_gate(event, now),
            Some(GateOwner::Gallery) => self.past_events.on_gate(event),
            Some(GateOwner::ShowcaseVideo) => return self.showcase.on_gate(event),
            None => tracing::warn!(?id, ?event, "gate event without an owner"),
        }
        Vec::new()
    }

    /// Scroll or resize: re-estimate geometry if needed, then push the
    /// viewport through the showcase and every gate.
    pub fn apply_viewport(&mut self, viewport: Viewport, now: Instant) -> Vec<Effect> {
        let resized =
            viewport.width != self.viewport.width || viewport.height != self.viewport.height;
        self.viewport = viewport;
        if resized && !self.page_measured {
            let stacked = LayoutMode::for_width(viewport.width, self.showcase.layout().params())
                == LayoutMode::Stacked;
            let page = PageLayout::estimate(viewport, self.showcase.items().len(), stacked);
            self.relayout(page);
        }

        let mut effects = self.showcase.on_viewport(viewport);
        for (id, event) in self.observer.update(viewport) {
            effects.extend(self.route_gate(id, event, now));
        }
        effects
    }

    /// Adopt measured section heights.
    pub fn set_page(&mut self, page: PageLayout, now: Instant) -> Vec<Effect> {
        self.page_measured = true;
        self.relayout(page);
        self.apply_viewport(self.viewport, now)
    }

    fn relayout(&mut self, page: PageLayout) {
        self.showcase
            .relayout(page.region(Section::Showcase).top, self.viewport.height);
        self.hero.set_region(page.region(Section::Hero));
        self.past_events.set_region(page.region(Section::PastEvents));
        self.testimonials.set_region(page.region(Section::Testimonials));
        tracing::debug!(document_height = page.document_height(), "page relayout");
        self.page = page;
    }

    /// Animation frame: timers, tweens and toast expiry.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        self.event_cards.tick(now);
        self.testimonials.tick(now);
        self.hero.tick(now);
        self.toasts.expire(now);
        self.nav
            .tick(now)
            .map(Effect::ScrollTo)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(viewport: Viewport) -> SiteState {
        SiteState::new(
            &SiteConfig::default(),
            Catalog::launchpod_default(),
            viewport,
            Instant::now(),
        )
        .unwrap()
    }

    #[test]
    fn top_of_page_has_nothing_below_the_fold_active() {
        let state = state_at(Viewport::new(0.0, 1280.0, 800.0));
        assert!(!state.hero.is_revealed());
        assert!(!state.past_events.is_revealed());
        assert!(!state.testimonials.is_autoplaying());
        assert!(!state.showcase.video_started());
        assert_eq!(state.observer().len(), 4);
    }

    #[test]
    fn gallery_gate_is_released_after_reveal() {
        let mut state = state_at(Viewport::new(0.0, 1280.0, 800.0));
        let top = state.page.region(Section::PastEvents).top;
        // A fifth of the gallery is below the 30% threshold.
        state.apply_viewport(Viewport::new(top - 640.0, 1280.0, 800.0), Instant::now());
        assert!(!state.past_events.is_revealed());
        state.apply_viewport(Viewport::new(top - 400.0, 1280.0, 800.0), Instant::now());
        assert!(state.past_events.is_revealed());
        assert!(!state.past_events.observation().is_observing());

        state.apply_viewport(Viewport::new(0.0, 1280.0, 800.0), Instant::now());
        assert!(state.past_events.is_revealed());
    }

    #[test]
    fn narrow_resize_shrinks_the_estimated_page() {
        let mut state = state_at(Viewport::new(0.0, 1280.0, 800.0));
        let tall = state.page.document_height();
        state.apply_viewport(Viewport::new(0.0, 375.0, 800.0), Instant::now());
        assert!(!state.showcase.is_stacked());
        assert!(state.page.document_height() < tall);
    }

    #[test]
    fn measured_layout_wins_over_estimates() {
        let mut state = state_at(Viewport::new(0.0, 1280.0, 800.0));
        let page = PageLayout::from_heights(Section::ORDER.map(|s| (s, 500.0)));
        state.set_page(page.clone(), Instant::now());
        state.apply_viewport(Viewport::new(0.0, 1024.0, 700.0), Instant::now());
        assert_eq!(state.page, page);
    }
}

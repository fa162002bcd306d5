use std::time::Instant;

use launchpod_core::forms::FormKind;

use crate::effect::Effect;
use crate::message::Message;
use crate::sections::carousel::{CarouselMessage, CarouselSection};
use crate::sections::hero::update_hero;
use crate::sections::nav::update_nav;
use crate::state::SiteState;

pub fn update(state: &mut SiteState, message: Message, now: Instant) -> Vec<Effect> {
    let message_name = message.name();
    tracing::trace!(message = message_name, "update");

    match message {
        Message::Nav(msg) => update_nav(state, msg, now),
        Message::Hero(msg) => update_hero(state, msg, now),
        Message::EventCards(msg) => update_carousel(&mut state.event_cards, msg, now),
        Message::Testimonials(msg) => update_carousel(&mut state.testimonials, msg, now),
        Message::Showcase(msg) => state.showcase.update(msg),
        Message::Faq(msg) => {
            state.faq.update(msg);
            Vec::new()
        }
        Message::Contact(msg) => state.contact.update(msg, &mut state.toasts, now),
        Message::Booking(msg) => state.booking.update(msg, &mut state.toasts, now),
        Message::DismissToast(id) => {
            state.toasts.dismiss(id);
            Vec::new()
        }
        Message::ViewportChanged(viewport) => state.apply_viewport(viewport, now),
        Message::LayoutMeasured(page) => state.set_page(page, now),
        Message::Tick => state.tick(now),
        Message::SubmissionFinished { kind, outcome } => {
            match kind {
                FormKind::Newsletter => state.contact.finish(outcome, &mut state.toasts, now),
                FormKind::Booking => state.booking.finish(outcome, &mut state.toasts, now),
            }
            Vec::new()
        }
    }
}

fn update_carousel<T>(
    section: &mut CarouselSection<T>,
    message: CarouselMessage,
    now: Instant,
) -> Vec<Effect> {
    section.update(message, now).unwrap_or_else(|err| {
        tracing::warn!(message = message.name(), %err, "carousel navigation ignored");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{FaqMessage, FormMessage, NavMessage};
    use launchpod_config::SiteConfig;
    use launchpod_core::scroll::Viewport;
    use launchpod_model::{Anchor, Catalog};
    use std::time::Duration;

    fn site(now: Instant) -> SiteState {
        SiteState::new(
            &SiteConfig::default(),
            Catalog::launchpod_default(),
            Viewport::new(0.0, 1280.0, 800.0),
            now,
        )
        .unwrap()
    }

    #[test]
    fn nav_click_scrolls_to_section_below_header() {
        let t0 = Instant::now();
        let mut state = site(t0);
        update(&mut state, Message::Nav(NavMessage::ToggleMenu), t0);
        assert!(state.nav.is_menu_open());

        update(&mut state, NavMessage::Clicked("Past Events".into()).into(), t0);
        assert!(!state.nav.is_menu_open());
        assert_eq!(state.nav.active(), Some(Anchor::PastEvents));

        let target = state.page.anchor_top(Anchor::PastEvents) - 80.0;
        let effects = update(&mut state, Message::Tick, t0 + Duration::from_millis(600));
        assert_eq!(effects, vec![Effect::ScrollTo(target)]);
        assert!(update(&mut state, Message::Tick, t0 + Duration::from_millis(700)).is_empty());
    }

    #[test]
    fn second_click_continues_running_scroll() {
        let t0 = Instant::now();
        let mut state = site(t0);
        update(&mut state, NavMessage::Clicked("Testimonials".into()).into(), t0);
        let t1 = t0 + Duration::from_millis(200);
        update(&mut state, NavMessage::Clicked("About".into()).into(), t1);
        assert_eq!(state.nav.active(), Some(Anchor::About));

        // Viewport is still at 0; the new scroll starts where the old one was.
        let effects = update(&mut state, Message::Tick, t1);
        assert!(matches!(effects.as_slice(), [Effect::ScrollTo(y)] if *y > 0.0));

        let target = state
            .nav
            .target_for(state.page.anchor_top(Anchor::About), state.page.max_scroll(800.0));
        let effects = update(&mut state, Message::Tick, t1 + Duration::from_millis(600));
        assert_eq!(effects, vec![Effect::ScrollTo(target)]);
    }

    #[test]
    fn unknown_label_only_notifies() {
        let t0 = Instant::now();
        let mut state = site(t0);
        update(&mut state, NavMessage::Clicked("Pricing".into()).into(), t0);
        assert!(!state.nav.is_scrolling());
        assert_eq!(state.nav.active(), None);
        assert_eq!(
            state.toasts.latest().map(|t| t.message.as_str()),
            Some("Navigating to Pricing")
        );
    }

    #[test]
    fn book_now_opens_booking_and_closes_menu() {
        let t0 = Instant::now();
        let mut state = site(t0);
        update(&mut state, NavMessage::ToggleMenu.into(), t0);
        update(&mut state, NavMessage::BookNow.into(), t0);
        assert!(state.booking.modal.is_open());
        assert!(!state.nav.is_menu_open());
    }

    #[test]
    fn outside_pointer_closes_menu() {
        let t0 = Instant::now();
        let mut state = site(t0);
        update(&mut state, NavMessage::ToggleMenu.into(), t0);
        update(&mut state, NavMessage::PointerDownOutside.into(), t0);
        assert!(!state.nav.is_menu_open());
    }

    #[test]
    fn faq_and_carousels_route_to_their_sections() {
        let t0 = Instant::now();
        let mut state = site(t0);
        let id = state.faq.entries()[0].id.clone();
        update(&mut state, FaqMessage::Toggle(id.clone()).into(), t0);
        assert!(state.faq.is_expanded(&id));

        update(&mut state, Message::Testimonials(CarouselMessage::Prev), t0);
        assert_eq!(state.testimonials.index(), state.testimonials.items().len() - 1);

        update(&mut state, Message::EventCards(CarouselMessage::JumpTo(99)), t0);
        assert_eq!(state.event_cards.index(), 0);
    }

    #[test]
    fn booking_round_trip_through_effects() {
        let t0 = Instant::now();
        let mut state = site(t0);
        update(&mut state, Message::Booking(FormMessage::Open), t0);
        for (name, value) in [
            ("name", "Grace"),
            ("email", "grace@example.com"),
            ("phone", "+91 98765 43210"),
        ] {
            update(&mut state, Message::Booking(FormMessage::field(name, value)), t0);
        }
        let effects = update(&mut state, Message::Booking(FormMessage::Submit), t0);
        assert!(matches!(effects.as_slice(), [Effect::Submit { kind: FormKind::Booking, .. }]));

        update(
            &mut state,
            Message::SubmissionFinished {
                kind: FormKind::Booking,
                outcome: Ok(()),
            },
            t0,
        );
        assert!(!state.booking.modal.is_open());
        assert_eq!(
            state.toasts.latest().map(|t| t.message.as_str()),
            Some("Booking request submitted successfully!")
        );
    }
}

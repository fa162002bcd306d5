use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use launchpod_config::SiteConfig;
use launchpod_core::TransportError;
use launchpod_core::forms::{FormDraft, FormRelay, SubmissionState};
use launchpod_core::scroll::Viewport;
use launchpod_model::{Anchor, Catalog};
use launchpod_site::page::Section;
use launchpod_site::runtime::HoverTarget;
use launchpod_site::sections::{
    CarouselMessage, FormMessage, HeroMessage, NavMessage, ShowcaseMessage,
};
use launchpod_site::{Effect, EventLoop, Message, PlatformEvent, Relays};

/// Records every draft it receives and succeeds.
#[derive(Default)]
struct Recording {
    drafts: Mutex<Vec<FormDraft>>,
}

#[async_trait]
impl FormRelay for Recording {
    async fn submit(&self, draft: &FormDraft) -> Result<(), TransportError> {
        self.drafts.lock().unwrap().push(draft.clone());
        Ok(())
    }
}

fn desktop(now: Instant) -> EventLoop {
    desktop_with(&SiteConfig::default(), now)
}

fn desktop_with(config: &SiteConfig, now: Instant) -> EventLoop {
    EventLoop::from_config(
        config,
        Catalog::launchpod_default(),
        Viewport::new(0.0, 1280.0, 800.0),
        now,
    )
    .unwrap()
}

fn ui(message: impl Into<Message>) -> PlatformEvent {
    PlatformEvent::Ui(message.into())
}

/// Feed `ScrollTo` effects back as scroll events, as a browser would.
fn run_frames(events: &mut EventLoop, start: Instant, frames: u32) -> Instant {
    let mut now = start;
    for _ in 0..frames {
        now += Duration::from_millis(16);
        for effect in events.dispatch(PlatformEvent::Tick, now) {
            if let Effect::ScrollTo(y) = effect {
                events.dispatch(PlatformEvent::Scroll(y), now);
            }
        }
    }
    now
}

#[test]
fn nav_click_smooth_scrolls_and_activates_testimonials() {
    let t0 = Instant::now();
    let mut events = desktop(t0);
    let gate_active = |events: &EventLoop| {
        events
            .state()
            .testimonials
            .observation()
            .is_some_and(|o| o.is_active())
    };
    assert!(!gate_active(&events));

    events.dispatch(ui(NavMessage::Clicked("Testimonials".into())), t0);
    assert!(events.state().nav.is_scrolling());
    run_frames(&mut events, t0, 60);

    let state = events.state();
    let expected = state.page.anchor_top(Anchor::Testimonials) - 80.0;
    assert_eq!(state.viewport.scroll_y, expected);
    assert!(!state.nav.is_scrolling());
    assert!(gate_active(&events));
}

#[test]
fn hovering_testimonials_pauses_autoplay() {
    let t0 = Instant::now();
    let mut config = SiteConfig::default();
    config.carousel.testimonials.enabled = true;
    let mut events = desktop_with(&config, t0);
    let top = events.state().page.region(Section::Testimonials).top;
    events.dispatch(PlatformEvent::Scroll(top - 100.0), t0);
    assert!(events.state().testimonials.is_autoplaying());

    events.dispatch(
        PlatformEvent::Hover {
            target: HoverTarget::Testimonials,
            hovered: true,
        },
        t0,
    );
    assert!(!events.state().testimonials.is_autoplaying());
    events.dispatch(PlatformEvent::Tick, t0 + Duration::from_secs(30));
    assert_eq!(events.state().testimonials.index(), 0);
}

#[test]
fn event_cards_autoplay_on_first_screen() {
    let t0 = Instant::now();
    let mut events = desktop(t0);
    events.dispatch(PlatformEvent::Tick, t0 + Duration::from_millis(5_000));
    assert_eq!(events.state().event_cards.index(), 1);

    events.dispatch(
        ui(Message::EventCards(CarouselMessage::Prev)),
        t0 + Duration::from_millis(6_000),
    );
    assert_eq!(events.state().event_cards.index(), 0);
    events.dispatch(PlatformEvent::Tick, t0 + Duration::from_millis(10_000));
    assert_eq!(events.state().event_cards.index(), 0);
}

#[test]
fn keyword_and_register_produce_notifications_and_links() {
    let t0 = Instant::now();
    let mut events = desktop(t0);
    events.dispatch(ui(HeroMessage::KeywordClicked("Launch your Idea".into())), t0);
    assert!(events.state().hero.is_sliding());
    assert_eq!(
        events.state().toasts.latest().map(|t| t.message.as_str()),
        Some("Searching for: Launch your Idea")
    );

    let effects = events.dispatch(ui(ShowcaseMessage::Register(0)), t0);
    assert!(matches!(effects.as_slice(), [Effect::OpenLink(_)]));
}

#[tokio::test]
async fn booking_goes_through_the_relay_and_clears() {
    let t0 = Instant::now();
    let mut events = desktop(t0);
    let relay = Arc::new(Recording::default());
    let relays = Relays {
        newsletter: None,
        booking: Some(relay.clone()),
    };

    events.dispatch(ui(NavMessage::BookNow), t0);
    for (name, value) in [
        ("name", "Asha"),
        ("email", "asha@example.com"),
        ("phone", "+91 98450 12345"),
        ("eventType", "Workshop"),
    ] {
        events.dispatch(ui(Message::Booking(FormMessage::field(name, value))), t0);
    }
    let effects = events.dispatch(ui(Message::Booking(FormMessage::Submit)), t0);
    assert!(events.state().booking.modal.is_locked());

    // Close is refused while the request is in flight.
    events.dispatch(ui(Message::Booking(FormMessage::Close)), t0);
    assert!(events.state().booking.modal.is_open());

    events.perform(&relays, effects).await;

    let drafts = relay.drafts.lock().unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].get("eventType"), "Workshop");
    assert_eq!(drafts[0].get("message"), "");

    let booking = &events.state().booking;
    assert_eq!(*booking.state(), SubmissionState::Succeeded);
    assert!(!booking.modal.is_open());
    assert!(booking.form().draft().is_blank());
}

#[tokio::test]
async fn invalid_newsletter_never_reaches_the_relay() {
    let t0 = Instant::now();
    let mut events = desktop(t0);
    let relay = Arc::new(Recording::default());
    let relays = Relays {
        newsletter: Some(relay.clone()),
        booking: None,
    };

    events.dispatch(ui(Message::Contact(FormMessage::Open)), t0);
    events.dispatch(ui(Message::Contact(FormMessage::field("name", "Asha"))), t0);
    events.dispatch(ui(Message::Contact(FormMessage::field("email", "asha@"))), t0);
    let effects = events.dispatch(ui(Message::Contact(FormMessage::Submit)), t0);
    assert!(effects.is_empty());
    events.perform(&relays, effects).await;

    assert!(relay.drafts.lock().unwrap().is_empty());
    assert_eq!(
        events.state().toasts.latest().map(|t| t.message.as_str()),
        Some("Please enter a valid email address")
    );
    assert!(events.state().contact.modal.is_open());
}

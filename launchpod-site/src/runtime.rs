//! Single-threaded event loop and the async relay edge.
//!
//! Platform callbacks (scroll, resize, pointer, frame) arrive as
//! [`PlatformEvent`]s and are turned into [`Message`]s for [`update`]. The
//! only async work is form delivery: [`EventLoop::perform`] sends drafts
//! through [`Relays`] and feeds the outcome back as a message.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use launchpod_config::{RelayConfig, SiteConfig};
use launchpod_core::TransportError;
use launchpod_core::forms::{EmailRelay, FormDraft, FormKind, FormRelay, SheetRelay};
use launchpod_core::scroll::Viewport;
use launchpod_model::Catalog;

use crate::effect::Effect;
use crate::error::SiteResult;
use crate::message::Message;
use crate::sections::{CarouselMessage, NavMessage};
use crate::state::SiteState;
use crate::update::update;

/// Carousels that react to pointer hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    EventCards,
    Testimonials,
}

/// Raw input from the embedding platform.
#[derive(Debug)]
pub enum PlatformEvent {
    Scroll(f32),
    Resize { width: f32, height: f32 },
    PointerDown { inside_header: bool },
    Hover { target: HoverTarget, hovered: bool },
    /// Animation frame.
    Tick,
    /// A widget interaction already expressed as a message.
    Ui(Message),
}

impl PlatformEvent {
    fn into_message(self, viewport: Viewport) -> Option<Message> {
        match self {
            PlatformEvent::Scroll(y) => Some(Message::ViewportChanged(viewport.with_scroll(y))),
            PlatformEvent::Resize { width, height } => {
                Some(Message::ViewportChanged(viewport.with_size(width, height)))
            }
            PlatformEvent::PointerDown { inside_header: true } => None,
            PlatformEvent::PointerDown { inside_header: false } => {
                Some(NavMessage::PointerDownOutside.into())
            }
            PlatformEvent::Hover { target, hovered } => {
                let msg = CarouselMessage::Hover(hovered);
                Some(match target {
                    HoverTarget::EventCards => Message::EventCards(msg),
                    HoverTarget::Testimonials => Message::Testimonials(msg),
                })
            }
            PlatformEvent::Tick => Some(Message::Tick),
            PlatformEvent::Ui(message) => Some(message),
        }
    }
}

/// Configured relays. A missing relay fails its submissions with
/// [`TransportError::NotConfigured`].
#[derive(Clone, Default)]
pub struct Relays {
    pub newsletter: Option<Arc<dyn FormRelay>>,
    pub booking: Option<Arc<dyn FormRelay>>,
}

impl fmt::Debug for Relays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relays")
            .field("newsletter", &self.newsletter.is_some())
            .field("booking", &self.booking.is_some())
            .finish()
    }
}

impl Relays {
    /// The booking relay is only built when the email template is complete.
    pub fn from_config(config: &RelayConfig) -> Result<Self, TransportError> {
        let timeout = config.timeout();
        let newsletter: Arc<dyn FormRelay> =
            Arc::new(SheetRelay::new(&config.newsletter_url, timeout)?);
        let booking = match config.email.template() {
            Some(template) => {
                let relay: Arc<dyn FormRelay> =
                    Arc::new(EmailRelay::new(&config.email.endpoint, template, timeout)?);
                Some(relay)
            }
            None => {
                tracing::warn!("booking relay disabled: email public key missing");
                None
            }
        };
        Ok(Self {
            newsletter: Some(newsletter),
            booking,
        })
    }

    pub fn get(&self, kind: FormKind) -> Option<&Arc<dyn FormRelay>> {
        match kind {
            FormKind::Newsletter => self.newsletter.as_ref(),
            FormKind::Booking => self.booking.as_ref(),
        }
    }

    /// Send `draft` and wrap the outcome for [`update`].
    pub async fn deliver(&self, kind: FormKind, draft: FormDraft) -> Message {
        let outcome = match self.get(kind) {
            Some(relay) => relay.submit(&draft).await,
            None => Err(TransportError::NotConfigured(format!("{kind} relay"))),
        };
        Message::SubmissionFinished { kind, outcome }
    }
}

/// Owns the page state and dispatches events to it in arrival order.
#[derive(Debug)]
pub struct EventLoop {
    state: SiteState,
}

impl EventLoop {
    pub fn new(state: SiteState) -> Self {
        Self { state }
    }

    pub fn from_config(
        config: &SiteConfig,
        catalog: Catalog,
        viewport: Viewport,
        now: Instant,
    ) -> SiteResult<Self> {
        Ok(Self::new(SiteState::new(config, catalog, viewport, now)?))
    }

    pub fn state(&self) -> &SiteState {
        &self.state
    }

    pub fn dispatch(&mut self, event: PlatformEvent, now: Instant) -> Vec<Effect> {
        match event.into_message(self.state.viewport) {
            Some(message) => update(&mut self.state, message, now),
            None => Vec::new(),
        }
    }

    /// Run submit effects to completion and feed their outcomes back; every
    /// other effect is returned for the platform.
    pub async fn perform(&mut self, relays: &Relays, effects: Vec<Effect>) -> Vec<Effect> {
        let mut pending = Vec::new();
        for effect in effects {
            match effect {
                Effect::Submit { kind, draft } => {
                    let message = relays.deliver(kind, draft).await;
                    let follow_up = update(&mut self.state, message, Instant::now());
                    pending.extend(follow_up);
                }
                other => pending.push(other),
            }
        }
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use launchpod_core::forms::SubmissionState;

    use crate::sections::FormMessage;

    struct Refusing;

    #[async_trait]
    impl FormRelay for Refusing {
        async fn submit(&self, _draft: &FormDraft) -> Result<(), TransportError> {
            Err(TransportError::Status {
                status: 429,
                body: "slow down".into(),
            })
        }
    }

    fn event_loop() -> EventLoop {
        EventLoop::from_config(
            &SiteConfig::default(),
            Catalog::launchpod_default(),
            Viewport::new(0.0, 1280.0, 800.0),
            Instant::now(),
        )
        .unwrap()
    }

    #[test]
    fn pointer_inside_header_keeps_menu() {
        let mut events = event_loop();
        let now = Instant::now();
        events.dispatch(PlatformEvent::Ui(NavMessage::ToggleMenu.into()), now);
        events.dispatch(PlatformEvent::PointerDown { inside_header: true }, now);
        assert!(events.state().nav.is_menu_open());
        events.dispatch(PlatformEvent::PointerDown { inside_header: false }, now);
        assert!(!events.state().nav.is_menu_open());
    }

    #[test]
    fn scroll_and_resize_update_viewport() {
        let mut events = event_loop();
        let now = Instant::now();
        events.dispatch(PlatformEvent::Scroll(640.0), now);
        events.dispatch(PlatformEvent::Resize { width: 390.0, height: 844.0 }, now);
        assert_eq!(events.state().viewport, Viewport::new(640.0, 390.0, 844.0));
    }

    #[tokio::test]
    async fn missing_relay_fails_the_submission() {
        let mut events = event_loop();
        let now = Instant::now();
        for (name, value) in [
            ("name", "Lin"),
            ("email", "lin@example.com"),
            ("phone", "9876543210"),
        ] {
            let field = FormMessage::field(name, value);
            events.dispatch(PlatformEvent::Ui(Message::Booking(field)), now);
        }
        let submit = PlatformEvent::Ui(Message::Booking(FormMessage::Submit));
        let effects = events.dispatch(submit, now);
        let rest = events.perform(&Relays::default(), effects).await;
        assert!(rest.is_empty());
        assert!(matches!(events.state().booking.state(), SubmissionState::Failed(_)));
    }

    #[tokio::test]
    async fn relay_errors_reach_the_form() {
        let mut events = event_loop();
        let relays = Relays {
            newsletter: Some(Arc::new(Refusing)),
            booking: None,
        };
        let now = Instant::now();
        events.dispatch(
            PlatformEvent::Ui(Message::Contact(FormMessage::field("name", "Lin"))),
            now,
        );
        events.dispatch(
            PlatformEvent::Ui(Message::Contact(FormMessage::field("email", "lin@example.com"))),
            now,
        );
        let submit = PlatformEvent::Ui(Message::Contact(FormMessage::Submit));
        let effects = events.dispatch(submit, now);
        events.perform(&relays, effects).await;
        assert_eq!(events.state().contact.form().draft().get("name"), "Lin");
        assert_eq!(
            events.state().toasts.latest().map(|t| t.message.as_str()),
            Some("Something went wrong. Please try again.")
        );
    }
}

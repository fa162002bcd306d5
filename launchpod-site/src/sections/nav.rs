//! Header navigation, mobile menu and smooth anchor scrolling.

use std::time::Instant;

use launchpod_config::NavigationConfig;
use launchpod_core::animation::Tween;
use launchpod_model::Anchor;

use crate::effect::Effect;
use crate::message::Message;
use crate::state::SiteState;

#[derive(Clone, PartialEq, Eq)]
pub enum NavMessage {
    /// A header or footer link, by its label ("Past Events") or id.
    Clicked(String),
    BookNow,
    ToggleMenu,
    /// Pointer pressed somewhere outside the header and its menu button.
    PointerDownOutside,
}

impl From<NavMessage> for Message {
    fn from(msg: NavMessage) -> Self {
        Message::Nav(msg)
    }
}

impl NavMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clicked(_) => "Nav::Clicked",
            Self::BookNow => "Nav::BookNow",
            Self::ToggleMenu => "Nav::ToggleMenu",
            Self::PointerDownOutside => "Nav::PointerDownOutside",
        }
    }
}

impl std::fmt::Debug for NavMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clicked(label) => write!(f, "Nav::Clicked({label})"),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavState {
    params: NavigationConfig,
    active: Option<Anchor>,
    menu_open: bool,
    scroll: Tween,
}

impl NavState {
    pub fn new(params: NavigationConfig) -> Self {
        Self {
            params,
            active: None,
            menu_open: false,
            scroll: Tween::idle(0.0),
        }
    }

    pub fn active(&self) -> Option<Anchor> {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_active()
    }

    /// Scroll target of `anchor`: its section top minus the sticky header.
    pub fn target_for(&self, anchor_top: f32, max_scroll: f32) -> f32 {
        (anchor_top - self.params.header_offset_px).clamp(0.0, max_scroll)
    }

    /// A click during a running scroll continues from the animated position.
    fn scroll_to(&mut self, from: f32, to: f32, now: Instant) {
        let duration = self.params.smooth_scroll();
        if self.scroll.is_active() {
            self.scroll.retarget(to, duration, now);
        } else {
            self.scroll = Tween::start(from, to, duration, self.params.easing, now);
        }
    }

    /// Next scroll position while a smooth scroll runs.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.scroll.tick(now)
    }
}

pub fn update_nav(state: &mut SiteState, message: NavMessage, now: Instant) -> Vec<Effect> {
    match message {
        NavMessage::Clicked(label) => {
            state.nav.menu_open = false;
            let anchor = match label.parse::<Anchor>() {
                Ok(anchor) => anchor,
                Err(err) => {
                    tracing::warn!(%label, %err, "navigation target not found");
                    state.toasts.info(format!("Navigating to {label}"), now);
                    return Vec::new();
                }
            };
            state.nav.active = Some(anchor);

            let to = state.nav.target_for(
                state.page.anchor_top(anchor),
                state.page.max_scroll(state.viewport.height),
            );
            let from = state.viewport.scroll_y;
            tracing::debug!(anchor = anchor.id(), from, to, "smooth scroll");
            state.nav.scroll_to(from, to, now);
            Vec::new()
        }
        NavMessage::BookNow => {
            state.nav.menu_open = false;
            state.booking.modal.open();
            state.toasts.success("Booking form opened!", now);
            Vec::new()
        }
        NavMessage::ToggleMenu => {
            state.nav.menu_open = !state.nav.menu_open;
            Vec::new()
        }
        NavMessage::PointerDownOutside => {
            if state.nav.menu_open {
                state.nav.menu_open = false;
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_clamps_to_document() {
        let nav = NavState::new(NavigationConfig::default());
        assert_eq!(nav.target_for(40.0, 5000.0), 0.0);
        assert_eq!(nav.target_for(1080.0, 5000.0), 1000.0);
        assert_eq!(nav.target_for(9000.0, 5000.0), 5000.0);
    }
}

//! Hero headline reveal and keyword pills.

use std::time::{Duration, Instant};

use launchpod_core::activation::{GateEvent, GateParams, Observation, ViewportObserver};
use launchpod_core::animation::{Easing, Pulse};
use launchpod_core::scroll::Region;

use crate::effect::Effect;
use crate::message::Message;
use crate::state::SiteState;

const WORD_STAGGER: Duration = Duration::from_millis(80);
const WORD_DURATION: Duration = Duration::from_millis(450);
/// Words start this far below their resting line, in px.
const WORD_RISE_PX: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroWord {
    pub text: &'static str,
    pub bold: bool,
    pub suffix: &'static str,
}

const fn word(text: &'static str) -> HeroWord {
    HeroWord {
        text,
        bold: false,
        suffix: "",
    }
}

const fn bold(text: &'static str, suffix: &'static str) -> HeroWord {
    HeroWord {
        text,
        bold: true,
        suffix,
    }
}

pub const HERO_LINE: [HeroWord; 18] = [
    word("A"),
    word("space"),
    word("that"),
    word("can"),
    word("be"),
    word("filled"),
    word("with"),
    word("people,"),
    word("their"),
    word("ideas,"),
    word("their"),
    word("aspirations,"),
    word("their"),
    bold("work", ","),
    word("their"),
    bold("craft", ","),
    word("their"),
    bold("impact", "."),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroMessage {
    KeywordClicked(String),
}

impl From<HeroMessage> for Message {
    fn from(msg: HeroMessage) -> Self {
        Message::Hero(msg)
    }
}

/// Opacity and vertical offset of one headline word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordFrame {
    pub opacity: f32,
    pub offset_y: f32,
}

impl WordFrame {
    const HIDDEN: WordFrame = WordFrame {
        opacity: 0.0,
        offset_y: WORD_RISE_PX,
    };
}

#[derive(Debug)]
pub struct HeroState {
    line: Observation,
    revealed_at: Option<Instant>,
    pulse: Pulse,
    pulse_duration: Duration,
    keywords: Vec<String>,
    last_keyword: Option<String>,
}

impl HeroState {
    pub fn new(
        observer: &ViewportObserver,
        region: Region,
        gate: GateParams,
        keywords: Vec<String>,
        pulse_duration: Duration,
        now: Instant,
    ) -> Self {
        let line = observer.observe(region, gate);
        Self {
            revealed_at: line.is_active().then_some(now),
            line,
            pulse: Pulse::default(),
            pulse_duration,
            keywords,
            last_keyword: None,
        }
    }

    pub fn observation(&self) -> &Observation {
        &self.line
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Whether the keyword pill is mid-slide.
    pub fn is_sliding(&self) -> bool {
        self.pulse.is_raised()
    }

    pub fn last_keyword(&self) -> Option<&str> {
        self.last_keyword.as_deref()
    }

    pub fn set_region(&self, region: Region) {
        self.line.set_region(region);
    }

    pub fn on_gate(&mut self, event: GateEvent, now: Instant) {
        match event {
            GateEvent::Activated => {
                self.revealed_at = Some(now);
                tracing::debug!(words = HERO_LINE.len(), "hero line revealed");
            }
            GateEvent::Deactivated => self.revealed_at = None,
        }
    }

    /// Frame of word `index`; words fade up one after another.
    pub fn word_frame(&self, index: usize, now: Instant) -> WordFrame {
        let Some(start) = self.revealed_at else {
            return WordFrame::HIDDEN;
        };
        let delay = WORD_STAGGER * index as u32;
        let elapsed = now.saturating_duration_since(start);
        let Some(local) = elapsed.checked_sub(delay) else {
            return WordFrame::HIDDEN;
        };
        let t = Easing::EaseOutCubic
            .apply(local.as_secs_f32() / WORD_DURATION.as_secs_f32());
        WordFrame {
            opacity: t,
            offset_y: WORD_RISE_PX * (1.0 - t),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.pulse.tick(now);
    }
}

pub fn update_hero(state: &mut SiteState, message: HeroMessage, now: Instant) -> Vec<Effect> {
    match message {
        HeroMessage::KeywordClicked(keyword) => {
            let hero = &mut state.hero;
            hero.pulse.trigger(now, hero.pulse_duration);
            tracing::info!(%keyword, "keyword search");
            state.toasts.info(format!("Searching for: {keyword}"), now);
            hero.last_keyword = Some(keyword);
            Vec::new()
        }
    }
}

//! Stacked event showcase (`#events`).

use launchpod_core::activation::{GateEvent, GateParams, Observation, ViewportObserver};
use launchpod_core::scroll::Viewport;
use launchpod_core::showcase::{CardFrame, LayoutMode, StackedLayout, StackingParams};
use launchpod_model::{EventContent, ShowcaseItem};

use crate::effect::Effect;
use crate::error::SiteResult;
use crate::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseMessage {
    /// "Register" button on card `index`.
    Register(usize),
}

impl From<ShowcaseMessage> for Message {
    fn from(msg: ShowcaseMessage) -> Self {
        Message::Showcase(msg)
    }
}

#[derive(Debug)]
pub struct ShowcaseSection {
    layout: StackedLayout,
    video: Observation,
    /// The video gate fired; playback waits for the stacked layout.
    video_requested: bool,
    video_started: bool,
    frames: Vec<CardFrame>,
}

impl ShowcaseSection {
    pub fn new(
        observer: &ViewportObserver,
        contents: Vec<EventContent>,
        params: StackingParams,
        video_gate: GateParams,
        container_top: f32,
        viewport: Viewport,
    ) -> SiteResult<Self> {
        let layout = StackedLayout::new(contents, params, container_top, viewport)?;
        let video = observer.observe(layout.region(), video_gate);
        let frames = layout.frames();
        Ok(Self {
            video_requested: video.is_active(),
            layout,
            video,
            video_started: false,
            frames,
        })
    }

    pub fn layout(&self) -> &StackedLayout {
        &self.layout
    }

    pub fn items(&self) -> &[ShowcaseItem] {
        self.layout.items()
    }

    pub fn frames(&self) -> &[CardFrame] {
        &self.frames
    }

    pub fn is_stacked(&self) -> bool {
        self.layout.mode() == LayoutMode::Stacked
    }

    pub fn video_started(&self) -> bool {
        self.video_started
    }

    pub fn video_observation(&self) -> &Observation {
        &self.video
    }

    pub fn relayout(&mut self, container_top: f32, viewport_height: f32) {
        self.layout.relayout(container_top, viewport_height);
        self.video.set_region(self.layout.region());
    }

    /// Recompute frames; may start the video if it was waiting for width.
    pub fn on_viewport(&mut self, viewport: Viewport) -> Vec<Effect> {
        self.frames = self.layout.update(viewport);
        self.video.set_region(self.layout.region());
        self.maybe_play()
    }

    pub fn on_gate(&mut self, event: GateEvent) -> Vec<Effect> {
        if event == GateEvent::Activated {
            self.video_requested = true;
        }
        self.maybe_play()
    }

    fn maybe_play(&mut self) -> Vec<Effect> {
        if self.video_requested && !self.video_started && self.layout.plays_background_video() {
            self.video_started = true;
            tracing::debug!("showcase video started");
            vec![Effect::PlayVideo]
        } else {
            Vec::new()
        }
    }

    pub fn update(&mut self, message: ShowcaseMessage) -> Vec<Effect> {
        match message {
            ShowcaseMessage::Register(index) => {
                match self.items().get(index).and_then(|item| item.content.link.clone()) {
                    Some(link) => vec![Effect::OpenLink(link)],
                    None => {
                        tracing::debug!(index, "showcase card has no registration link");
                        Vec::new()
                    }
                }
            }
        }
    }
}

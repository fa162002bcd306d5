use launchpod_core::widgets::Accordion;
use launchpod_model::FaqEntry;

use crate::message::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaqMessage {
    /// Question header clicked, by entry id.
    Toggle(String),
}

impl From<FaqMessage> for Message {
    fn from(msg: FaqMessage) -> Self {
        Message::Faq(msg)
    }
}

#[derive(Debug, Clone)]
pub struct FaqSection {
    entries: Vec<FaqEntry>,
    accordion: Accordion<String>,
}

impl FaqSection {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self {
            entries,
            accordion: Accordion::new(),
        }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn expanded(&self) -> Option<&FaqEntry> {
        let id = self.accordion.expanded()?;
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.accordion.expanded().is_some_and(|open| open == id)
    }

    pub fn update(&mut self, message: FaqMessage) {
        match message {
            FaqMessage::Toggle(id) => {
                if !self.entries.iter().any(|entry| entry.id == id) {
                    tracing::warn!(%id, "unknown faq entry");
                    return;
                }
                self.accordion.toggle(id);
            }
        }
    }
}

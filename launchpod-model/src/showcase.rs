use crate::range::ScrollRange;

/// Static copy and media for one upcoming event in the stacked showcase.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventContent {
    pub title: String,
    pub description: String,
    /// Renderable media reference (bundled path or URL).
    pub src: String,
    /// External registration link; the "Register Now" action is hidden when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Option<String>,
    pub color: String,
    pub tag: String,
    pub date: String,
    pub time: String,
    pub capacity: String,
}

/// One entry of the stacked showcase.
///
/// Built once from the catalog when the showcase mounts and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseItem {
    pub index: usize,
    pub range: ScrollRange,
    /// Scale reached at the end of `range`.
    pub target_scale: f32,
    pub content: EventContent,
}

impl ShowcaseItem {
    pub fn new(
        index: usize,
        range: ScrollRange,
        target_scale: f32,
        content: EventContent,
    ) -> Self {
        Self {
            index,
            range,
            target_scale,
            content,
        }
    }

    pub fn has_link(&self) -> bool {
        self.content
            .link
            .as_deref()
            .is_some_and(|link| !link.trim().is_empty())
    }
}

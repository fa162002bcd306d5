use launchpod_core::forms::{FormDraft, FormKind};

/// Side effects requested by [`update`](crate::update::update); the embedding
/// platform (or [`runtime`](crate::runtime)) performs them.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send a validated draft through the matching relay, then feed
    /// `Message::SubmissionFinished` back.
    Submit { kind: FormKind, draft: FormDraft },
    /// Set the document scroll position for this frame.
    ScrollTo(f32),
    /// Open an external link in a new tab.
    OpenLink(String),
    /// Start the showcase background video.
    PlayVideo,
}

use launchpod_core::TransportError;
use launchpod_core::forms::FormKind;
use launchpod_core::scroll::Viewport;

use crate::notifications::ToastId;
use crate::page::PageLayout;
use crate::sections::carousel::CarouselMessage;
use crate::sections::faq::FaqMessage;
use crate::sections::forms::FormMessage;
use crate::sections::hero::HeroMessage;
use crate::sections::nav::NavMessage;
use crate::sections::showcase::ShowcaseMessage;

/// Everything that can happen to the page.
#[derive(Debug)]
pub enum Message {
    Nav(NavMessage),
    Hero(HeroMessage),
    EventCards(CarouselMessage),
    Showcase(ShowcaseMessage),
    Testimonials(CarouselMessage),
    Faq(FaqMessage),
    Contact(FormMessage),
    Booking(FormMessage),
    DismissToast(ToastId),
    /// Scroll or resize.
    ViewportChanged(Viewport),
    /// The renderer measured new section heights.
    LayoutMeasured(PageLayout),
    /// Animation frame.
    Tick,
    SubmissionFinished {
        kind: FormKind,
        outcome: Result<(), TransportError>,
    },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nav(msg) => msg.name(),
            Self::Hero(_) => "Hero::KeywordClicked",
            Self::EventCards(msg) | Self::Testimonials(msg) => msg.name(),
            Self::Showcase(_) => "Showcase::Register",
            Self::Faq(_) => "Faq::Toggle",
            Self::Contact(msg) | Self::Booking(msg) => msg.name(),
            Self::DismissToast(_) => "Toast::Dismiss",
            Self::ViewportChanged(_) => "Page::ViewportChanged",
            Self::LayoutMeasured(_) => "Page::LayoutMeasured",
            Self::Tick => "Page::Tick",
            Self::SubmissionFinished { .. } => "Forms::SubmissionFinished",
        }
    }
}

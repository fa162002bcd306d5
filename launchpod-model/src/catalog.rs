//! Default site content.
//!
//! Everything here is replaceable copy. The engine only relies on the shape
//! of the data (counts, optional links), never on the wording.

use crate::{
    cards::EventCard,
    faq::FaqEntry,
    gallery::GalleryImage,
    showcase::EventContent,
    testimonial::{Stat, Testimonial},
};

/// Bundle of all content rendered by the page sections.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Catalog {
    /// Upcoming events for the stacked showcase, in stacking order.
    pub showcase: Vec<EventContent>,
    /// Cards for the auto-rotating event carousel.
    pub event_cards: Vec<EventCard>,
    pub testimonials: Vec<Testimonial>,
    pub stats: Vec<Stat>,
    pub faq: Vec<FaqEntry>,
    pub gallery: Vec<GalleryImage>,
    /// Rotating hero/banner keywords.
    pub keywords: Vec<String>,
}

impl Catalog {
    pub fn launchpod_default() -> Self {
        Self {
            showcase: default_showcase(),
            event_cards: default_event_cards(),
            testimonials: default_testimonials(),
            stats: vec![
                stat("100", "Events hosted"),
                stat("40", "Guests per session"),
                stat("5", "Venue layouts"),
            ],
            faq: default_faq(),
            gallery: (1..=6)
                .map(|i| GalleryImage {
                    image: format!("/gallery/past-event-{i}.jpg"),
                    text: format!("Highlight {i}"),
                })
                .collect(),
            keywords: [
                "Company Meetups",
                "Product Launch Rooms",
                "Modern Conference Areas",
                "Casual Connects",
                "Workshops",
                "Private Company Meetups",
                "Startup Pitch Sessions",
                "Modern Elegance",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

fn stat(number: &str, label: &str) -> Stat {
    Stat {
        number: number.into(),
        label: label.into(),
    }
}

fn default_showcase() -> Vec<EventContent> {
    vec![EventContent {
        title: "Startup to Scaleup Series: Financial Readiness".into(),
        description: "Learn how to structure your business, value it \
            realistically, and build investor trust. This session covers \
            financial structuring, realistic valuation strategies, and \
            managing investor expectations. Limited to 30 founders and \
            professionals."
            .into(),
        src: "/event1.jpeg".into(),
        link: Some("https://pages.razorpay.com/thelaunchpod".into()),
        color: "#E8E9E8".into(),
        tag: "Startup Workshop".into(),
        date: "13th December 2025".into(),
        time: "10:00 AM – 1:00 PM".into(),
        capacity: "30 Builders".into(),
    }]
}

#[allow(clippy::too_many_arguments)]
fn event_card(
    id: u32,
    image_url: &str,
    title: &str,
    date: &str,
    time: &str,
    capacity: u32,
    description: &str,
    tag: &str,
) -> EventCard {
    EventCard {
        id,
        image_url: image_url.into(),
        title: title.into(),
        date: date.into(),
        time: time.into(),
        capacity,
        description: description.into(),
        tag: tag.into(),
    }
}

fn default_event_cards() -> Vec<EventCard> {
    vec![
        event_card(
            1,
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800",
            "Business Network",
            "Nov 15, 2025",
            "10:00 AM",
            50,
            "An exclusive networking evening connecting professionals across industries.",
            "Networking",
        ),
        event_card(
            2,
            "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=800",
            "Tech Conference",
            "Nov 20, 2025",
            "2:00 PM",
            100,
            "Speakers, panels and hands-on workshops on current technology trends.",
            "Technology",
        ),
        event_card(
            3,
            "https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=800",
            "Startup Meetup",
            "Nov 25, 2025",
            "6:00 PM",
            30,
            "Founders, investors and mentors sharing startup journeys.",
            "Startup",
        ),
        event_card(
            4,
            "https://images.unsplash.com/photo-1551818255-e6e10975bc17?w=800",
            "Design Workshop",
            "Dec 1, 2025",
            "11:00 AM",
            25,
            "UI/UX principles, prototyping techniques and modern design tools.",
            "Design",
        ),
        event_card(
            5,
            "https://images.unsplash.com/photo-1511578314322-379afb476865?w=800",
            "Marketing Summit",
            "Dec 5, 2025",
            "9:00 AM",
            75,
            "Growth, content and data-driven marketing from practitioners.",
            "Marketing",
        ),
        event_card(
            6,
            "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?w=800",
            "Team Building",
            "Dec 10, 2025",
            "3:00 PM",
            40,
            "Collaborative challenges that build trust and communication.",
            "Team Event",
        ),
    ]
}

fn testimonial(id: u32, text: &str, name: &str, role: &str) -> Testimonial {
    Testimonial {
        id,
        text: text.into(),
        name: name.into(),
        role: role.into(),
        avatar: "https://via.placeholder.com/48".into(),
    }
}

fn default_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            1,
            "The Launchpod completely redefined what hosting an event feels like.",
            "Deepika Rajagopalan",
            "Vice President of Data Science & AI, Ideassion Technology Solutions",
        ),
        testimonial(
            2,
            "From the lighting to the layout! It was an experience.",
            "Yousuf",
            "AI & Cybersecurity",
        ),
        testimonial(
            3,
            "We wanted to break away from the typical conference vibe, and The Launchpod delivered.",
            "Dinesh Kumar",
            "Head of Creatives, Crux Creations",
        ),
        testimonial(
            4,
            "The space pulls you in! I left with new ideas and new connections.",
            "Sarah Sheriff",
            "Meet & Greet: Healthcare meets Healthtech",
        ),
        testimonial(
            5,
            "Hosting at The Launchpod set a new standard for us.",
            "Gugapriya O",
            "Managing Director, IITT",
        ),
    ]
}

fn faq(id: &str, question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        id: id.into(),
        question: question.into(),
        answer: answer.into(),
    }
}

fn default_faq() -> Vec<FaqEntry> {
    vec![
        faq(
            "1",
            "What is THE LAUNCHPOD, and what professional spaces do we offer on Mount Road, Chennai?",
            "Flexible spots on Mount Road for events and company meetups, built with startups and professionals in mind.",
        ),
        faq(
            "2",
            "What types of event venues does THE LAUNCHPOD offer?",
            "Conference areas, compact seminar zones, product launch rooms and flexible setups for meetups and workshops.",
        ),
        faq(
            "3",
            "How can I book an event hall for corporate gatherings or product launches?",
            "Use the booking form on this site or contact the team directly for custom options and availability.",
        ),
        faq(
            "4",
            "What flexible event spaces are available?",
            "Setups for team huddles, pitch sessions, private meetups and workshops for up to 40 people.",
        ),
        faq(
            "5",
            "How do I reserve a conference hall, seminar room, or training space?",
            "Reach out through the website or the support team to discuss timing, requirements and plans.",
        ),
        faq(
            "6",
            "What makes THE LAUNCHPOD a good choice for workshops and networking events?",
            "Ready-to-use spaces, smart setups and smooth planning from start to finish.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_populated() {
        let catalog = Catalog::launchpod_default();
        assert_eq!(catalog.showcase.len(), 1);
        assert_eq!(catalog.event_cards.len(), 6);
        assert_eq!(catalog.testimonials.len(), 5);
        assert_eq!(catalog.faq.len(), 6);
        assert!(catalog.showcase.iter().all(|event| event.link.is_some()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn catalog_deserializes_with_missing_sections() {
        let catalog: Catalog =
            serde_json::from_str(r#"{"keywords": ["Workshops"]}"#).unwrap();
        assert_eq!(catalog.keywords, vec!["Workshops".to_string()]);
        assert!(catalog.showcase.is_empty());
    }
}

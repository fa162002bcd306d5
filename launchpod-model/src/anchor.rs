use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// In-page navigation targets linked from the header and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Anchor {
    About,
    Events,
    PastEvents,
    Testimonials,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::About,
        Anchor::Events,
        Anchor::PastEvents,
        Anchor::Testimonials,
        Anchor::Contact,
    ];

    /// Element id the section registers under.
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::About => "about",
            Anchor::Events => "events",
            Anchor::PastEvents => "past-events",
            Anchor::Testimonials => "testimonials",
            Anchor::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub const fn label(self) -> &'static str {
        match self {
            Anchor::About => "About",
            Anchor::Events => "Events",
            Anchor::PastEvents => "Past Events",
            Anchor::Testimonials => "Testimonials",
            Anchor::Contact => "Contact",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Anchor {
    type Err = ModelError;

    /// Accepts either the element id or the navigation label, ignoring case
    /// and treating spaces as dashes ("Past Events" → `past-events`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "-");
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.id() == normalized)
            .ok_or_else(|| ModelError::UnknownAnchor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_ids() {
        assert_eq!("Past Events".parse::<Anchor>().unwrap(), Anchor::PastEvents);
        assert_eq!("past-events".parse::<Anchor>().unwrap(), Anchor::PastEvents);
        assert_eq!(" ABOUT ".parse::<Anchor>().unwrap(), Anchor::About);
        assert_eq!(
            "pricing".parse::<Anchor>(),
            Err(ModelError::UnknownAnchor("pricing".into()))
        );
    }

    #[test]
    fn ids_round_trip_through_display() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.to_string().parse::<Anchor>().unwrap(), anchor);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Testimonial {
    pub id: u32,
    pub text: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

/// Headline figure displayed beside the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    pub number: String,
    pub label: String,
}

/// Card shown in the auto-rotating event carousel near the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventCard {
    pub id: u32,
    pub image_url: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub capacity: u32,
    pub description: String,
    pub tag: String,
}

impl EventCard {
    pub fn capacity_label(&self) -> String {
        format!("{} seats", self.capacity)
    }
}

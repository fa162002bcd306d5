#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

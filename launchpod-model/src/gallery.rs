/// Image in the circular past-events gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryImage {
    pub image: String,
    pub text: String,
}

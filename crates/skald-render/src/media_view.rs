//! Shared media view fragment.

use skald_core::model::Media;

/// An image resolved for display: always has alt text, falling back to the
/// surrounding context (post title or profile handle) when the API carried
/// none.
#[derive(Debug)]
pub(crate) struct MediaView {
    pub(crate) url: String,
    pub(crate) alt: String,
}

impl MediaView {
    pub(crate) fn from_media(media: &Media, fallback_alt: &str) -> Self {
        let alt = media
            .alt
            .as_deref()
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
            .unwrap_or(fallback_alt)
            .to_string();
        Self {
            url: media.url.clone(),
            alt,
        }
    }
}

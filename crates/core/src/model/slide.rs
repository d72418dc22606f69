use thiserror::Error;
use url::Url;

use crate::model::SlideId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageSourceError {
    #[error("image source cannot be empty")]
    Empty,

    #[error("not a data URL")]
    NotDataUrl,
}

/// Where a slide's image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Path of an image bundled with the application.
    Asset(String),
    /// Inline `data:` URL produced from an uploaded file.
    DataUrl(Url),
}

impl ImageSource {
    pub fn asset(path: impl Into<String>) -> Result<Self, ImageSourceError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(ImageSourceError::Empty);
        }
        Ok(Self::Asset(path))
    }

    pub fn data_url(raw: impl AsRef<str>) -> Result<Self, ImageSourceError> {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            return Err(ImageSourceError::Empty);
        }
        let url = Url::parse(raw).map_err(|_| ImageSourceError::NotDataUrl)?;
        if url.scheme() != "data" {
            return Err(ImageSourceError::NotDataUrl);
        }
        Ok(Self::DataUrl(url))
    }

    /// Value suitable for an `<img src>` attribute.
    #[must_use]
    pub fn as_src(&self) -> &str {
        match self {
            ImageSource::Asset(path) => path,
            ImageSource::DataUrl(url) => url.as_str(),
        }
    }

    #[must_use]
    pub fn is_upload(&self) -> bool {
        matches!(self, ImageSource::DataUrl(_))
    }
}

/// One image with its caption.
///
/// Temporary slides live in the upload staging list and are never shown in
/// the slideshow itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    id: SlideId,
    source: ImageSource,
    caption: String,
    temporary: bool,
}

impl Slide {
    #[must_use]
    pub fn new(id: SlideId, source: ImageSource, caption: impl Into<String>) -> Self {
        Self {
            id,
            source,
            caption: caption.into(),
            temporary: false,
        }
    }

    /// A freshly uploaded slide waiting for its caption.
    #[must_use]
    pub fn staged(id: SlideId, source: ImageSource) -> Self {
        Self {
            id,
            source,
            caption: String::new(),
            temporary: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> SlideId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    pub(crate) fn into_committed(mut self) -> Self {
        self.temporary = false;
        self
    }
}

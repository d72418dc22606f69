//! Turning uploaded files into displayable image sources.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use futures::future::join_all;
use tracing::warn;
use woodland_core::model::ImageSource;

use crate::error::DecodeError;

/// Uploads larger than this are refused by `DataUrlDecoder::default()`.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Raw file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Outcome of decoding one file, tagged with its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedUpload {
    pub file_name: String,
    pub result: Result<ImageSource, DecodeError>,
}

impl DecodedUpload {
    /// A file whose bytes never reached the decoder.
    pub fn unreadable(file_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            result: Err(DecodeError::Unreadable(reason.into())),
        }
    }
}

#[async_trait]
pub trait FileDecoder: Send + Sync {
    async fn decode(&self, file: &UploadFile) -> Result<ImageSource, DecodeError>;
}

/// Encodes recognised image files as `data:` URLs.
#[derive(Debug, Clone, Copy)]
pub struct DataUrlDecoder {
    max_bytes: usize,
}

impl Default for DataUrlDecoder {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl DataUrlDecoder {
    #[must_use]
    pub fn with_max_bytes(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    #[must_use]
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }
}

#[async_trait]
impl FileDecoder for DataUrlDecoder {
    async fn decode(&self, file: &UploadFile) -> Result<ImageSource, DecodeError> {
        if file.bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        if file.bytes.len() > self.max_bytes {
            return Err(DecodeError::TooLarge {
                size: file.bytes.len(),
                max: self.max_bytes,
            });
        }
        let mime = sniff_mime(&file.name, &file.bytes).ok_or(DecodeError::UnsupportedFormat)?;
        let encoded = STANDARD.encode(&file.bytes);
        Ok(ImageSource::data_url(format!("data:{mime};base64,{encoded}"))?)
    }
}

fn sniff_mime(name: &str, bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        [b'B', b'M', ..] => Some("image/bmp"),
        _ if name.to_ascii_lowercase().ends_with(".svg") => Some("image/svg+xml"),
        _ => None,
    }
}

/// One entry of a file selection: its bytes, or why they could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedFile {
    Read(UploadFile),
    Unreadable { name: String, reason: String },
}

async fn decode_one(decoder: &dyn FileDecoder, file: &UploadFile) -> DecodedUpload {
    let result = decoder.decode(file).await;
    if let Err(err) = &result {
        warn!(file = %file.name, error = %err, "upload decode failed");
    }
    DecodedUpload {
        file_name: file.name.clone(),
        result,
    }
}

/// Decode every file concurrently.
///
/// Results come back in the order the files were given, regardless of which
/// decode finishes first.
pub async fn decode_uploads(decoder: &dyn FileDecoder, files: Vec<UploadFile>) -> Vec<DecodedUpload> {
    join_all(files.iter().map(|file| decode_one(decoder, file))).await
}

/// Like `decode_uploads`, with unreadable entries kept in their slot.
pub async fn decode_selection(
    decoder: &dyn FileDecoder,
    files: Vec<SelectedFile>,
) -> Vec<DecodedUpload> {
    let decodes = files.iter().map(|file| async move {
        match file {
            SelectedFile::Read(file) => decode_one(decoder, file).await,
            SelectedFile::Unreadable { name, reason } => {
                DecodedUpload::unreadable(name.clone(), reason.clone())
            }
        }
    });
    join_all(decodes).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn png_becomes_base64_data_url() {
        let decoder = DataUrlDecoder::default();
        let source = decoder
            .decode(&UploadFile::new("fern.png", PNG_HEADER))
            .await
            .unwrap();

        assert_eq!(source.as_src(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[tokio::test]
    async fn svg_is_recognised_by_name() {
        let decoder = DataUrlDecoder::default();
        let source = decoder
            .decode(&UploadFile::new("Leaf.SVG", "<svg/>"))
            .await
            .unwrap();
        assert!(source.as_src().starts_with("data:image/svg+xml;base64,"));
    }

    #[tokio::test]
    async fn rejects_empty_oversized_and_unknown_files() {
        let decoder = DataUrlDecoder::with_max_bytes(8);

        assert_eq!(
            decoder.decode(&UploadFile::new("a.png", Vec::<u8>::new())).await,
            Err(DecodeError::Empty)
        );
        assert_eq!(
            decoder
                .decode(&UploadFile::new("b.png", vec![0x89_u8; 9]))
                .await,
            Err(DecodeError::TooLarge { size: 9, max: 8 })
        );
        assert_eq!(
            decoder.decode(&UploadFile::new("notes.txt", "hello")).await,
            Err(DecodeError::UnsupportedFormat)
        );
    }

    #[test]
    fn sniffs_common_image_headers() {
        assert_eq!(sniff_mime("x", &[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(sniff_mime("x", b"GIF89a"), Some("image/gif"));
        assert_eq!(sniff_mime("x", b"RIFF\0\0\0\0WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_mime("x", b"BM\0\0"), Some("image/bmp"));
        assert_eq!(sniff_mime("photo.jpg", b"plain text"), None);
    }
}

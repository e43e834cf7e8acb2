//! Uploaded and generated image payloads.
//!
//! Uploads are kept as raw bytes plus a MIME type sniffed from the file
//! contents; the browser-reported type is not trusted.  Both uploads and
//! generation results can be turned into `data:` URLs for `<img src>`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

/// Extensions the image picker offers.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Value for the picker's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = "image/png, image/jpeg, image/webp";

/// Errors that can occur when reading an image payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageFileError {
    /// The file contained no bytes.
    #[error("image file is empty")]
    Empty,

    /// The file contents are not PNG, JPEG, or WebP.
    #[error("unsupported image type: {0}")]
    Unsupported(String),

    /// A base64 payload could not be decoded.
    #[error("invalid base64 image data: {0}")]
    InvalidBase64(String),
}

/// An image the user picked, ready to send to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    bytes: Vec<u8>,
    mime_type: &'static str,
    name: String,
}

impl ImageFile {
    /// Build an image file from uploaded bytes and the original filename.
    ///
    /// # Errors
    ///
    /// Returns [`ImageFileError::Empty`] for an empty upload and
    /// [`ImageFileError::Unsupported`] when the contents are not PNG,
    /// JPEG, or WebP.
    pub fn from_upload(bytes: Vec<u8>, name: impl Into<String>) -> Result<Self, ImageFileError> {
        let name = name.into();
        if bytes.is_empty() {
            return Err(ImageFileError::Empty);
        }
        let mime_type = sniff_mime_type(&bytes).ok_or_else(|| ImageFileError::Unsupported(name.clone()))?;
        Ok(Self {
            bytes,
            mime_type,
            name,
        })
    }

    /// Whether `name` ends in one of [`ALLOWED_EXTENSIONS`].
    #[must_use]
    pub fn has_allowed_extension(name: &str) -> bool {
        name.rsplit_once('.').is_some_and(|(_, ext)| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|a| a.eq_ignore_ascii_case(ext))
        })
    }

    /// Raw file bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type sniffed from the contents.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Original filename.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base64 (standard alphabet, padded) encoding of the bytes.
    #[must_use]
    pub fn base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// `data:` URL for displaying the upload.
    #[must_use]
    pub fn data_url(&self) -> String {
        data_url(self.mime_type, &self.bytes)
    }
}

/// An image returned by the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    bytes: Vec<u8>,
    mime_type: String,
}

impl GeneratedImage {
    /// Decode an inline base64 payload.
    ///
    /// An empty MIME type falls back to `image/png`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageFileError::InvalidBase64`] if `data` is not valid
    /// base64, or [`ImageFileError::Empty`] if it decodes to nothing.
    pub fn from_inline(mime_type: &str, data: &str) -> Result<Self, ImageFileError> {
        let bytes = STANDARD
            .decode(data.trim())
            .map_err(|e| ImageFileError::InvalidBase64(e.to_string()))?;
        if bytes.is_empty() {
            return Err(ImageFileError::Empty);
        }
        let mime_type = if mime_type.is_empty() {
            "image/png".to_owned()
        } else {
            mime_type.to_owned()
        };
        Ok(Self { bytes, mime_type })
    }

    /// Decoded image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type reported by the service.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// `data:` URL for displaying the result.
    #[must_use]
    pub fn data_url(&self) -> String {
        data_url(&self.mime_type, &self.bytes)
    }
}

fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Detect PNG, JPEG, or WebP from magic bytes.
fn sniff_mime_type(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::WebP) => {
            Some(format.to_mime_type())
        }
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_MAGIC: &[u8] = b"\xff\xd8\xff\xe0\0\x10JFIF\0";
    const WEBP_MAGIC: &[u8] = b"RIFF\x24\0\0\0WEBPVP8 ";
    const GIF_MAGIC: &[u8] = b"GIF89a\x01\0\x01\0";

    #[test]
    fn sniffs_supported_formats() {
        let png = ImageFile::from_upload(PNG_MAGIC.to_vec(), "a.png").unwrap();
        assert_eq!(png.mime_type(), "image/png");
        let jpeg = ImageFile::from_upload(JPEG_MAGIC.to_vec(), "b.jpg").unwrap();
        assert_eq!(jpeg.mime_type(), "image/jpeg");
        let webp = ImageFile::from_upload(WEBP_MAGIC.to_vec(), "c.webp").unwrap();
        assert_eq!(webp.mime_type(), "image/webp");
    }

    #[test]
    fn contents_win_over_extension() {
        let file = ImageFile::from_upload(PNG_MAGIC.to_vec(), "mislabeled.jpg").unwrap();
        assert_eq!(file.mime_type(), "image/png");
        assert_eq!(file.name(), "mislabeled.jpg");
    }

    #[test]
    fn rejects_empty_and_unsupported() {
        assert_eq!(
            ImageFile::from_upload(Vec::new(), "empty.png"),
            Err(ImageFileError::Empty)
        );
        assert_eq!(
            ImageFile::from_upload(GIF_MAGIC.to_vec(), "anim.gif"),
            Err(ImageFileError::Unsupported("anim.gif".into()))
        );
        assert_eq!(
            ImageFile::from_upload(b"hello world".to_vec(), "notes.png"),
            Err(ImageFileError::Unsupported("notes.png".into()))
        );
    }

    #[test]
    fn allowed_extensions() {
        assert!(ImageFile::has_allowed_extension("photo.JPG"));
        assert!(ImageFile::has_allowed_extension("photo.webp"));
        assert!(!ImageFile::has_allowed_extension("photo.gif"));
        assert!(!ImageFile::has_allowed_extension("photo"));
    }

    #[test]
    fn upload_data_url() {
        let file = ImageFile::from_upload(PNG_MAGIC.to_vec(), "a.png").unwrap();
        let url = file.data_url();
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(url.trim_start_matches("data:image/png;base64,"), file.base64());
    }

    #[test]
    fn generated_image_decodes_inline_payload() {
        let image = GeneratedImage::from_inline("image/jpeg", "aGVsbG8=").unwrap();
        assert_eq!(image.bytes(), b"hello");
        assert_eq!(image.data_url(), "data:image/jpeg;base64,aGVsbG8=");
    }

    #[test]
    fn generated_image_defaults_to_png() {
        let image = GeneratedImage::from_inline("", "aGVsbG8=").unwrap();
        assert_eq!(image.mime_type(), "image/png");
    }

    #[test]
    fn generated_image_rejects_bad_payloads() {
        assert!(matches!(
            GeneratedImage::from_inline("image/png", "not base64!"),
            Err(ImageFileError::InvalidBase64(_))
        ));
        assert_eq!(
            GeneratedImage::from_inline("image/png", ""),
            Err(ImageFileError::Empty)
        );
    }
}

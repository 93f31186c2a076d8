//! Binary attachments sent alongside a prompt

use crate::config::timeouts;
use crate::error::{BriefError, BriefResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

/// Attachment formats recognised from their magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Pdf,
}

impl AttachmentFormat {
    /// Detect the format from the file header
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, 0x50, 0x4e, 0x47]) {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF8") {
            Some(Self::Gif)
        } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            Some(Self::WebP)
        } else if bytes.starts_with(b"%PDF-") {
            Some(Self::Pdf)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
            Self::Pdf => "application/pdf",
        }
    }

    pub fn is_image(&self) -> bool {
        !matches!(self, Self::Pdf)
    }
}

/// A file read into memory, ready to be encoded for a vendor
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    bytes: Vec<u8>,
    format: AttachmentFormat,
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Attachment {
    /// Wrap in-memory bytes, detecting their format
    pub fn from_bytes(bytes: Vec<u8>) -> BriefResult<Self> {
        let format = AttachmentFormat::detect(&bytes).ok_or_else(|| {
            BriefError::invalid_input_field("Unsupported attachment format", "attachment")
        })?;
        Ok(Self { bytes, format })
    }

    /// Read and validate an attachment from disk
    pub async fn from_path(path: &Path) -> BriefResult<Self> {
        Self::from_path_with_limit(path, timeouts::attachment::MAX_BYTES).await
    }

    pub async fn from_path_with_limit(path: &Path, max_bytes: u64) -> BriefResult<Self> {
        let display = path.display().to_string();
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| BriefError::io_with_path(e.to_string(), display.clone()))?;

        if metadata.len() > max_bytes {
            return Err(BriefError::invalid_input_field(
                format!(
                    "Attachment is {} bytes, limit is {} bytes",
                    metadata.len(),
                    max_bytes
                ),
                "attachment",
            ));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| BriefError::io_with_path(e.to_string(), display))?;
        Self::from_bytes(bytes)
    }

    pub fn format(&self) -> AttachmentFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Sniff a file's format without keeping its contents
pub async fn detect_file_format(path: &Path) -> BriefResult<Option<AttachmentFormat>> {
    use tokio::io::AsyncReadExt;

    let mut file = tokio::fs::File::open(path)
        .await
        .map_err(|e| BriefError::io_with_path(e.to_string(), path.display().to_string()))?;
    let mut header = [0u8; 12];
    let mut filled = 0;
    while filled < header.len() {
        let read = file.read(&mut header[filled..]).await?;
        if read == 0 {
            break;
        }
        filled += read;
    }
    Ok(AttachmentFormat::detect(&header[..filled]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

    #[test]
    fn test_detect_formats() {
        assert_eq!(
            AttachmentFormat::detect(PNG_HEADER),
            Some(AttachmentFormat::Png)
        );
        assert_eq!(
            AttachmentFormat::detect(&[0xff, 0xd8, 0xff, 0xe0]),
            Some(AttachmentFormat::Jpeg)
        );
        assert_eq!(
            AttachmentFormat::detect(b"GIF89a"),
            Some(AttachmentFormat::Gif)
        );
        assert_eq!(
            AttachmentFormat::detect(b"RIFF\0\0\0\0WEBPVP8 "),
            Some(AttachmentFormat::WebP)
        );
        assert_eq!(
            AttachmentFormat::detect(b"%PDF-1.7"),
            Some(AttachmentFormat::Pdf)
        );
        assert_eq!(AttachmentFormat::detect(b"hello"), None);
    }

    #[test]
    fn test_pdf_is_not_an_image() {
        assert!(!AttachmentFormat::Pdf.is_image());
        assert!(AttachmentFormat::Png.is_image());
    }

    #[test]
    fn test_from_bytes_rejects_unknown() {
        let err = Attachment::from_bytes(b"plain text".to_vec()).unwrap_err();
        assert!(matches!(err, BriefError::InvalidInput { .. }));
    }

    #[test]
    fn test_base64_encoding() {
        let attachment = Attachment::from_bytes(b"GIF89a".to_vec()).unwrap();
        assert_eq!(attachment.to_base64(), "R0lGODlh");
        assert_eq!(attachment.mime_type(), "image/gif");
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PNG_HEADER).unwrap();

        let attachment = Attachment::from_path(file.path()).await.unwrap();
        assert_eq!(attachment.format(), AttachmentFormat::Png);
        assert_eq!(attachment.len(), PNG_HEADER.len());
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let err = Attachment::from_path(Path::new("/nonexistent/letter.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, BriefError::Io { path: Some(_), .. }));
    }

    #[tokio::test]
    async fn test_from_path_enforces_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PNG_HEADER).unwrap();

        let err = Attachment::from_path_with_limit(file.path(), 4)
            .await
            .unwrap_err();
        assert!(matches!(err, BriefError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_detect_file_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4 rest").unwrap();
        assert_eq!(
            detect_file_format(file.path()).await.unwrap(),
            Some(AttachmentFormat::Pdf)
        );
    }
}

//! Conversions between image files and `data:` URLs.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use jerseyswap_core::error::{Result, SwapError};
use jerseyswap_core::studio::ImageRef;

/// Encodes raw bytes as a base64 `data:` URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> ImageRef {
    ImageRef::new(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Reads an image file into a data URL, guessing the MIME type from the
/// extension.
pub async fn read_image_file(path: &Path) -> Result<ImageRef> {
    let bytes = tokio::fs::read(path).await?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(SwapError::config(format!(
            "'{}' does not look like an image ({})",
            path.display(),
            mime
        )));
    }
    Ok(encode_data_url(mime.essence_str(), &bytes))
}

/// Decodes a base64 data URL back into bytes.
pub fn decode_data_url(image: &ImageRef) -> Result<Vec<u8>> {
    let payload = image
        .as_str()
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or_else(|| SwapError::config("Image is not a base64 data URL"))?;
    STANDARD.decode(payload).map_err(|e| SwapError::Serialization {
        format: "base64".to_string(),
        message: e.to_string(),
    })
}

/// File extension matching the data URL's MIME type.
pub fn extension_for(image: &ImageRef) -> &'static str {
    match image.mime_type() {
        Some("image/jpeg") => "jpg",
        Some("image/webp") => "webp",
        Some("image/gif") => "gif",
        _ => "png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_image_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("athlete.png");
        tokio::fs::write(&path, [0x89, b'P', b'N', b'G']).await.unwrap();

        let image = read_image_file(&path).await.unwrap();
        assert_eq!(image.mime_type(), Some("image/png"));
        assert_eq!(decode_data_url(&image).unwrap(), vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_rejects_non_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        tokio::fs::write(&path, "hello").await.unwrap();
        assert!(read_image_file(&path).await.is_err());
    }

    #[test]
    fn test_decode_rejects_remote_url() {
        assert!(decode_data_url(&ImageRef::new("https://x.io/a.png")).is_err());
    }

    #[test]
    fn test_extension_for() {
        assert_eq!(extension_for(&encode_data_url("image/jpeg", b"x")), "jpg");
        assert_eq!(extension_for(&ImageRef::new("https://x.io/a")), "png");
    }
}

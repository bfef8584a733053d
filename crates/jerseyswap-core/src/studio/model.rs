//! Studio request and response models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reference to an image: a `data:` URL or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_data_url(&self) -> bool {
        self.0.starts_with("data:")
    }

    /// MIME type of a data URL, e.g. `image/png`.
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let end = rest.find([';', ','])?;
        Some(&rest[..end])
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Data URLs can be megabytes long.
        if self.is_data_url() {
            write!(
                f,
                "data:{};<{} bytes>",
                self.mime_type().unwrap_or("unknown"),
                self.0.len()
            )
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Input for a jersey swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub image: ImageRef,
    pub team_name: String,
    pub number: String,
    pub remove_background: bool,
}

/// Stat payload rendered on the player card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub background: String,
    pub highlights: Vec<String>,
    pub stats: BTreeMap<String, u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type() {
        let image = ImageRef::new("data:image/png;base64,iVBORw0KGgo=");
        assert!(image.is_data_url());
        assert_eq!(image.mime_type(), Some("image/png"));
        assert_eq!(ImageRef::new("https://x.io/a.png").mime_type(), None);
    }

    #[test]
    fn test_display_truncates_data_url() {
        let image = ImageRef::new("data:image/jpeg;base64,AAAA");
        assert_eq!(image.to_string(), "data:image/jpeg;<27 bytes>");
    }
}

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Result, StylistError};

/// Media types the upload surface advertises. Hinting only, not enforced.
pub const ACCEPTED_MEDIA_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// Suggested upload ceiling shown in UI copy.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// An uploaded clothing item, held in memory for the duration of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Base64-encoded image content, without any data-URI prefix.
    pub data: String,
    pub media_type: String,
}

impl Item {
    pub fn from_bytes(bytes: &[u8], media_type: impl Into<String>) -> Self {
        Item {
            data: STANDARD.encode(bytes),
            media_type: media_type.into(),
        }
    }

    /// Parses a `data:<media type>;base64,<payload>` string.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| StylistError::DecodeError("missing data: prefix".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| StylistError::DecodeError("missing data-URI payload".into()))?;
        let media_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| StylistError::DecodeError("data URI is not base64 encoded".into()))?;

        STANDARD
            .decode(payload)
            .map_err(|e| StylistError::DecodeError(format!("invalid base64 payload: {}", e)))?;

        Ok(Item {
            data: payload.to_string(),
            media_type: media_type.to_string(),
        })
    }

    pub fn to_data_uri(&self) -> String {
        to_data_uri(&self.media_type, &self.data)
    }
}

pub fn to_data_uri(media_type: &str, base64_data: &str) -> String {
    format!("data:{};base64,{}", media_type, base64_data)
}

/// Returns the raw base64 payload, stripping a data-URI prefix if present.
pub fn strip_data_uri(image: &str) -> &str {
    match image.split_once(',') {
        Some((_, payload)) => payload,
        None => image,
    }
}

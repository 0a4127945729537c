//! Logo intake: checks an uploaded file and turns it into an inline `data:` URL
//! the composer can embed without any external fetch.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use thiserror::Error;

const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogoError {
    #[error("Please select a valid image file")]
    NotAnImage,

    #[error("File size must be less than {}MB", megabytes(.limit_bytes))]
    TooLarge { limit_bytes: usize },
}

/// An accepted logo, ready for `RenderOptions::logo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoUpload {
    pub data_url: String,
    pub content_type: String,
    pub bytes: usize,
}

fn megabytes(bytes: &usize) -> String {
    let bytes = *bytes;
    if bytes % BYTES_PER_MB == 0 {
        (bytes / BYTES_PER_MB).to_string()
    } else {
        format!("{:.1}", bytes as f64 / BYTES_PER_MB as f64)
    }
}

/// Accepts any `image/*` content type up to `max_bytes`.
pub fn accept_logo(
    content_type: Option<&str>,
    data: &[u8],
    max_bytes: usize,
) -> Result<LogoUpload, LogoError> {
    let mime = content_type
        .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase())
        .filter(|ct| ct.starts_with("image/") && ct.len() > "image/".len())
        .ok_or(LogoError::NotAnImage)?;

    if data.is_empty() {
        return Err(LogoError::NotAnImage);
    }
    if data.len() > max_bytes {
        return Err(LogoError::TooLarge {
            limit_bytes: max_bytes,
        });
    }

    Ok(LogoUpload {
        data_url: format!("data:{mime};base64,{}", STANDARD.encode(data)),
        content_type: mime,
        bytes: data.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 2 * 1024 * 1024;

    #[test]
    fn test_png_becomes_data_url() {
        let logo = accept_logo(Some("image/png"), b"\x89PNG", LIMIT).unwrap();
        assert_eq!(logo.data_url, "data:image/png;base64,iVBORw==");
        assert_eq!(logo.content_type, "image/png");
        assert_eq!(logo.bytes, 4);
    }

    #[test]
    fn test_content_type_parameters_are_dropped() {
        let logo = accept_logo(Some("Image/SVG+XML; charset=utf-8"), b"<svg/>", LIMIT).unwrap();
        assert!(logo.data_url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_non_image_is_rejected() {
        assert_eq!(
            accept_logo(Some("application/pdf"), b"%PDF", LIMIT),
            Err(LogoError::NotAnImage)
        );
        assert_eq!(accept_logo(None, b"data", LIMIT), Err(LogoError::NotAnImage));
        assert_eq!(accept_logo(Some("image/"), b"data", LIMIT), Err(LogoError::NotAnImage));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        assert_eq!(accept_logo(Some("image/png"), b"", LIMIT), Err(LogoError::NotAnImage));
    }

    #[test]
    fn test_oversized_file_is_rejected_with_limit_in_mb() {
        let data = vec![0u8; LIMIT + 1];
        let err = accept_logo(Some("image/jpeg"), &data, LIMIT).unwrap_err();
        assert_eq!(err.to_string(), "File size must be less than 2MB");
    }

    #[test]
    fn test_limit_exactly_is_accepted() {
        let data = vec![0u8; LIMIT];
        assert!(accept_logo(Some("image/jpeg"), &data, LIMIT).is_ok());
    }

    #[test]
    fn test_fractional_limit_message() {
        let err = LogoError::TooLarge {
            limit_bytes: 1_572_864,
        };
        assert_eq!(err.to_string(), "File size must be less than 1.5MB");
    }
}

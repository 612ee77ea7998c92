//! Upload admission checks

use crate::report::format_file_size;
use crate::AppConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a file was refused before entering the queue
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("unsupported file type: {mime_type}")]
    UnsupportedType { mime_type: String },

    #[error("file too large: {size_bytes} bytes (limit {limit_bytes})")]
    TooLarge { size_bytes: u64, limit_bytes: u64 },
}

impl Rejection {
    pub fn title(&self) -> &'static str {
        match self {
            Rejection::UnsupportedType { .. } => "Invalid file type",
            Rejection::TooLarge { .. } => "File too large",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Rejection::UnsupportedType { .. } => {
                "Please upload only images, videos, or audio files".to_string()
            }
            // "50 MB" is shown as "50MB"
            Rejection::TooLarge { limit_bytes, .. } => format!(
                "Please upload files smaller than {}",
                format_file_size(*limit_bytes).replace(' ', "")
            ),
        }
    }
}

/// Check type first, then size. Exactly the limit is accepted.
pub fn validate(mime_type: &str, size_bytes: u64, config: &AppConfig) -> Result<(), Rejection> {
    let accepted = config
        .accepted_mime_prefixes
        .iter()
        .any(|prefix| mime_type.starts_with(prefix.as_str()));

    if !accepted {
        return Err(Rejection::UnsupportedType {
            mime_type: mime_type.to_string(),
        });
    }

    if size_bytes > config.max_upload_bytes {
        return Err(Rejection::TooLarge {
            size_bytes,
            limit_bytes: config.max_upload_bytes,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn test_accepts_media() {
        let config = AppConfig::default();
        assert!(validate("image/jpeg", 10, &config).is_ok());
        assert!(validate("video/mp4", 10, &config).is_ok());
        assert!(validate("audio/wav", 10, &config).is_ok());
        assert!(validate("image/png", config.max_upload_bytes, &config).is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        let config = AppConfig::default();
        let err = validate("application/pdf", 10, &config).unwrap_err();
        assert_eq!(err.title(), "Invalid file type");
        assert!(validate("", 10, &config).is_err());
        assert!(validate("text/image/png", 10, &config).is_err());
    }

    #[test]
    fn test_rejects_oversized() {
        let mut config = AppConfig::default();
        config.max_upload_bytes = 50 * MB;

        let err = validate("image/png", 60 * MB, &config).unwrap_err();
        assert_eq!(
            err,
            Rejection::TooLarge {
                size_bytes: 60 * MB,
                limit_bytes: 50 * MB
            }
        );
        assert_eq!(err.description(), "Please upload files smaller than 50MB");
        assert!(validate("image/png", 50 * MB + 1, &config).is_err());
    }

    #[test]
    fn test_small_limit_description() {
        let mut config = AppConfig::default();
        config.max_upload_bytes = 512 * 1024;

        let err = validate("audio/ogg", MB, &config).unwrap_err();
        assert_eq!(err.description(), "Please upload files smaller than 512KB");

        config.max_upload_bytes = 1536 * 1024;
        let err = validate("audio/ogg", 2 * MB, &config).unwrap_err();
        assert_eq!(err.description(), "Please upload files smaller than 1.5MB");
    }

    #[test]
    fn test_type_checked_before_size() {
        let config = AppConfig::default();
        let err = validate("application/zip", 100 * MB, &config).unwrap_err();
        assert!(matches!(err, Rejection::UnsupportedType { .. }));
    }
}

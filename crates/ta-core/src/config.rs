//! Application configuration

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default upload limit: 50MB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Local storage key holding the logged-in user
pub const SESSION_KEY: &str = "user";

/// Local storage key holding the upload queue
pub const UPLOADS_KEY: &str = "digital-guardian-uploads";

/// Configuration shared by the session store and the upload simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Largest accepted upload (bytes, inclusive)
    pub max_upload_bytes: u64,

    /// MIME type prefixes accepted for upload
    pub accepted_mime_prefixes: Vec<String>,

    /// Time spent in `uploading` when no content reader is attached
    pub upload_delay_ms: u64,

    /// Time spent in `processing` before a verdict is drawn
    pub analysis_delay_ms: u64,

    /// Artificial latency of login and register
    pub auth_delay_ms: u64,

    /// Probability that a drawn verdict is authentic
    pub authentic_probability: f64,

    /// Write every queue mutation through to storage
    pub persist_uploads: bool,

    pub session_key: String,
    pub uploads_key: String,

    /// Directory used by the native file store
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: env_parse("TRUSTAUTH_MAX_UPLOAD_BYTES")
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            accepted_mime_prefixes: vec![
                "image/".to_string(),
                "video/".to_string(),
                "audio/".to_string(),
            ],
            upload_delay_ms: env_parse("TRUSTAUTH_UPLOAD_DELAY_MS").unwrap_or(1000),
            analysis_delay_ms: env_parse("TRUSTAUTH_ANALYSIS_DELAY_MS").unwrap_or(3000),
            auth_delay_ms: env_parse("TRUSTAUTH_AUTH_DELAY_MS").unwrap_or(1000),
            authentic_probability: 0.7,
            persist_uploads: env_parse("TRUSTAUTH_PERSIST_UPLOADS").unwrap_or(true),
            session_key: SESSION_KEY.to_string(),
            uploads_key: UPLOADS_KEY.to_string(),
            data_dir: std::env::var("TRUSTAUTH_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/trustauth")),
        }
    }
}

impl AppConfig {
    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    /// Zero every artificial delay
    pub fn without_delays(mut self) -> Self {
        self.upload_delay_ms = 0;
        self.analysis_delay_ms = 0;
        self.auth_delay_ms = 0;
        self
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.authentic_probability) {
            return Err(CoreError::Config(format!(
                "authentic_probability must be within [0, 1], got {}",
                self.authentic_probability
            )));
        }
        if self.accepted_mime_prefixes.is_empty() {
            return Err(CoreError::Config(
                "at least one accepted MIME prefix is required".to_string(),
            ));
        }
        if self.max_upload_bytes == 0 {
            return Err(CoreError::Config("max_upload_bytes must be positive".to_string()));
        }
        if self.session_key == self.uploads_key {
            return Err(CoreError::Config(format!(
                "session and upload storage keys collide: {}",
                self.session_key
            )));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session_key, "user");
        assert_eq!(config.uploads_key, "digital-guardian-uploads");
        assert_eq!(config.accepted_mime_prefixes.len(), 3);
        assert!((config.authentic_probability - 0.7).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.authentic_probability = 1.5;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        let mut config = AppConfig::default();
        config.accepted_mime_prefixes.clear();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.uploads_key = config.session_key.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_without_delays() {
        let config = AppConfig::default().without_delays();
        assert_eq!(config.upload_delay(), Duration::ZERO);
        assert_eq!(config.analysis_delay(), Duration::ZERO);
        assert_eq!(config.auth_delay(), Duration::ZERO);
    }
}

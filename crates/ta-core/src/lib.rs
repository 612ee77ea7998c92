//! TrustAuth core
//!
//! This crate holds everything the TrustAuth front-ends share: the data model,
//! the mock session store, the upload queue and the simulated analysis that
//! drives each uploaded file from `uploading` to `completed`.
//!
//! Nothing here talks to a network. Verdicts are drawn at random and the only
//! durable state lives in a [`storage::KeyValueStore`], which is browser local
//! storage on the web and a directory of JSON files natively.

pub mod config;
pub mod model;
pub mod queue;
pub mod report;
pub mod runtime;
pub mod session;
pub mod simulator;
pub mod storage;
pub mod validation;
pub mod verdict;

use thiserror::Error;

pub use config::AppConfig;
pub use model::{AnalysisResult, FileId, RiskLevel, UploadStatus, UploadedFile, User};
pub use queue::{QueueStats, UploadQueue};
pub use runtime::{Runtime, TaskRegistry};
pub use session::SessionStore;
pub use simulator::{ContentReader, Notice, NoticeVariant, QueueEvent, UploadRequest, UploadService};
pub use storage::{KeyValueStore, MemoryStore};
pub use validation::Rejection;
pub use verdict::VerdictGenerator;

#[cfg(not(target_arch = "wasm32"))]
pub use runtime::TokioRuntime;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upload not found: {0}")]
    NotFound(FileId),

    #[error("Invalid transition for {id}: {from} -> {to}")]
    InvalidTransition {
        id: FileId,
        from: UploadStatus,
        to: UploadStatus,
    },

    #[error("Upload rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("File read error: {0}")]
    FileRead(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidTransition {
            id: FileId::from("abc"),
            from: UploadStatus::Completed,
            to: UploadStatus::Processing,
        };
        assert_eq!(
            err.to_string(),
            "Invalid transition for abc: completed -> processing"
        );

        let err: CoreError = Rejection::UnsupportedType {
            mime_type: "text/plain".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Upload rejected"));
    }
}

//! Data model shared by the session store, the queue and the front-ends

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The client-side record of a logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Identifier of a queued upload
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of an upload. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    Processing,
    Completed,
}

impl UploadStatus {
    /// The only status this one may move to
    pub fn next(self) -> Option<UploadStatus> {
        match self {
            UploadStatus::Uploading => Some(UploadStatus::Processing),
            UploadStatus::Processing => Some(UploadStatus::Completed),
            UploadStatus::Completed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Progress bar value shown while the file moves through the lifecycle
    pub fn progress(self) -> u8 {
        match self {
            UploadStatus::Uploading => 33,
            UploadStatus::Processing => 66,
            UploadStatus::Completed => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadStatus::Uploading => "Uploading...",
            UploadStatus::Processing => "Analyzing...",
            UploadStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Uploading => write!(f, "uploading"),
            UploadStatus::Processing => write!(f, "processing"),
            UploadStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Coarse bucket derived from confidence alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence > 90 {
            RiskLevel::Low
        } else if confidence > 75 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict attached to a completed upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_authentic: bool,
    pub confidence: u8,
    pub risk_level: RiskLevel,
    pub details: Vec<String>,
    pub report: String,
}

impl AnalysisResult {
    pub fn verdict_label(&self) -> &'static str {
        if self.is_authentic {
            "Authentic"
        } else {
            "Suspicious"
        }
    }
}

/// One entry of the upload queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: FileId,
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    pub status: UploadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: FileId::generate(),
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            status: UploadStatus::Uploading,
            result: None,
            sha256: None,
            added_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == UploadStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_moves_forward() {
        assert_eq!(UploadStatus::Uploading.next(), Some(UploadStatus::Processing));
        assert_eq!(UploadStatus::Processing.next(), Some(UploadStatus::Completed));
        assert_eq!(UploadStatus::Completed.next(), None);
        assert!(UploadStatus::Uploading < UploadStatus::Completed);
    }

    #[test]
    fn test_risk_boundaries() {
        assert_eq!(RiskLevel::from_confidence(99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_confidence(91), RiskLevel::Low);
        assert_eq!(RiskLevel::from_confidence(90), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_confidence(76), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_confidence(75), RiskLevel::High);
        assert_eq!(RiskLevel::from_confidence(70), RiskLevel::High);
    }

    #[test]
    fn test_uploaded_file_json_shape() {
        let mut file = UploadedFile::new("cat.png", "image/png", 2048);
        file.id = FileId::from("f1");

        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["id"], "f1");
        assert_eq!(value["type"], "image/png");
        assert_eq!(value["size"], 2048);
        assert_eq!(value["status"], "uploading");
        assert!(value.get("result").is_none());
        assert!(value.get("addedAt").is_some());
    }

    #[test]
    fn test_browser_record_without_timestamp_loads() {
        let json = r#"{
            "id": "1700000000000abc",
            "name": "clip.mp4",
            "type": "video/mp4",
            "size": 10,
            "status": "completed",
            "result": {
                "isAuthentic": false,
                "confidence": 80,
                "riskLevel": "medium",
                "details": ["Metadata inconsistencies found"],
                "report": "r"
            }
        }"#;
        let file: UploadedFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.status, UploadStatus::Completed);
        let result = file.result.unwrap();
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.verdict_label(), "Suspicious");
    }
}

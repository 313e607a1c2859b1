//! Feedback Records
//!
//! A user-submitted feedback record is either a draft (not stored yet) or a
//! persisted record carrying the storage-assigned id and timestamp. On the
//! wire both share one flat JSON shape where `id` and `created_at` are optional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{require_text, DomainError, DomainResult, Entity};

/// Kind of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Bug,
    Feature,
    #[default]
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// One captured log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLogEntry")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Older producers send plain strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLogEntry {
    Text(String),
    Structured {
        #[serde(default)]
        level: LogLevel,
        message: String,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
    },
}

impl From<RawLogEntry> for LogEntry {
    fn from(raw: RawLogEntry) -> Self {
        match raw {
            RawLogEntry::Text(message) => LogEntry::new(LogLevel::Info, message),
            RawLogEntry::Structured {
                level,
                message,
                timestamp,
            } => LogEntry {
                level,
                message,
                timestamp,
            },
        }
    }
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: None,
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Diagnostic context captured from the browser, all fields optional
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_logs: Vec<LogEntry>,
}

/// Feedback that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FeedbackRecord", into = "FeedbackRecord")]
pub struct FeedbackDraft {
    pub user_id: String,
    pub content: String,
    pub feedback_type: Option<FeedbackType>,
    pub browser_info: Option<BrowserInfo>,
}

impl FeedbackDraft {
    /// Create a draft; only the submitter and the body are required.
    pub fn new(user_id: impl Into<String>, content: impl Into<String>) -> DomainResult<Self> {
        let user_id = user_id.into();
        let content = content.into();
        require_text("user_id", &user_id)?;
        require_text("content", &content)?;
        Ok(Self {
            user_id,
            content,
            feedback_type: None,
            browser_info: None,
        })
    }

    pub fn with_type(mut self, feedback_type: FeedbackType) -> Self {
        self.feedback_type = Some(feedback_type);
        self
    }

    pub fn with_browser_info(mut self, browser_info: BrowserInfo) -> Self {
        self.browser_info = Some(browser_info);
        self
    }

    /// The declared type, or [`FeedbackType::General`] when absent.
    pub fn effective_type(&self) -> FeedbackType {
        self.feedback_type.unwrap_or_default()
    }

    /// Attach the identity and timestamp assigned by a storage layer.
    pub fn into_persisted(
        self,
        id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<PersistedFeedback> {
        let id = id.into();
        require_text("feedback id", &id)?;
        Ok(PersistedFeedback {
            id,
            created_at,
            draft: self,
        })
    }
}

/// Feedback that a storage layer has accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedFeedback {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub draft: FeedbackDraft,
}

impl Entity for PersistedFeedback {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A feedback record in either lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FeedbackRecord", into = "FeedbackRecord")]
pub enum Feedback {
    Draft(FeedbackDraft),
    Persisted(PersistedFeedback),
}

impl Feedback {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Feedback::Persisted(_))
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Feedback::Draft(_) => None,
            Feedback::Persisted(p) => Some(&p.id),
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Feedback::Draft(_) => None,
            Feedback::Persisted(p) => Some(p.created_at),
        }
    }

    pub fn draft(&self) -> &FeedbackDraft {
        match self {
            Feedback::Draft(d) => d,
            Feedback::Persisted(p) => &p.draft,
        }
    }
}

impl From<FeedbackDraft> for Feedback {
    fn from(draft: FeedbackDraft) -> Self {
        Feedback::Draft(draft)
    }
}

impl From<PersistedFeedback> for Feedback {
    fn from(persisted: PersistedFeedback) -> Self {
        Feedback::Persisted(persisted)
    }
}

// ========================
// Wire shape
// ========================

#[derive(Serialize, Deserialize)]
struct FeedbackRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    user_id: String,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feedback_type: Option<FeedbackType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    browser_info: Option<BrowserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl FeedbackRecord {
    fn from_draft(draft: FeedbackDraft) -> Self {
        Self {
            id: None,
            user_id: draft.user_id,
            content: draft.content,
            feedback_type: draft.feedback_type,
            browser_info: draft.browser_info,
            created_at: None,
        }
    }

    fn draft(&self) -> DomainResult<FeedbackDraft> {
        let mut draft = FeedbackDraft::new(self.user_id.clone(), self.content.clone())?;
        draft.feedback_type = self.feedback_type;
        draft.browser_info = self.browser_info.clone();
        Ok(draft)
    }
}

impl TryFrom<FeedbackRecord> for Feedback {
    type Error = DomainError;

    fn try_from(record: FeedbackRecord) -> DomainResult<Self> {
        let draft = record.draft()?;
        match (record.id, record.created_at) {
            (None, None) => Ok(Feedback::Draft(draft)),
            (Some(id), Some(created_at)) => Ok(Feedback::Persisted(draft.into_persisted(id, created_at)?)),
            _ => Err(DomainError::InvalidInput(
                "id and created_at must be set together".to_string(),
            )),
        }
    }
}

impl From<Feedback> for FeedbackRecord {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Draft(draft) => FeedbackRecord::from_draft(draft),
            Feedback::Persisted(p) => FeedbackRecord {
                id: Some(p.id),
                created_at: Some(p.created_at),
                ..FeedbackRecord::from_draft(p.draft)
            },
        }
    }
}

impl TryFrom<FeedbackRecord> for FeedbackDraft {
    type Error = DomainError;

    fn try_from(record: FeedbackRecord) -> DomainResult<Self> {
        if record.id.is_some() || record.created_at.is_some() {
            return Err(DomainError::InvalidInput(
                "a draft must not carry id or created_at".to_string(),
            ));
        }
        record.draft()
    }
}

impl From<FeedbackDraft> for FeedbackRecord {
    fn from(draft: FeedbackDraft) -> Self {
        FeedbackRecord::from_draft(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_minimal_feedback_is_valid() {
        let feedback: Feedback =
            serde_json::from_str(r#"{"user_id": "u-1", "content": "Love the streaks page"}"#).unwrap();
        assert!(!feedback.is_persisted());
        assert_eq!(feedback.id(), None);
        assert_eq!(feedback.draft().feedback_type, None);
        assert_eq!(feedback.draft().effective_type(), FeedbackType::General);

        assert!(FeedbackDraft::new("u-1", "Love the streaks page").is_ok());
    }

    #[test]
    fn test_required_fields() {
        assert!(FeedbackDraft::new("", "body").is_err());
        assert!(FeedbackDraft::new("u-1", "  ").is_err());
        let missing: Result<Feedback, _> = serde_json::from_str(r#"{"user_id": "u-1"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_persisted_record() {
        let feedback: Feedback = serde_json::from_str(
            r#"{
                "id": "fb-42",
                "user_id": "u-1",
                "content": "Spinner never stops",
                "feedback_type": "bug",
                "created_at": "2026-10-01T08:30:00Z"
            }"#,
        )
        .unwrap();

        assert!(feedback.is_persisted());
        assert_eq!(feedback.id(), Some("fb-42"));
        assert_eq!(
            feedback.created_at(),
            Some(Utc.with_ymd_and_hms(2026, 10, 1, 8, 30, 0).unwrap())
        );
        assert_eq!(feedback.draft().effective_type(), FeedbackType::Bug);
    }

    #[test]
    fn test_half_persisted_rejected() {
        let only_id: Result<Feedback, _> =
            serde_json::from_str(r#"{"id": "fb-1", "user_id": "u-1", "content": "x"}"#);
        assert!(only_id.is_err());

        let only_ts: Result<Feedback, _> = serde_json::from_str(
            r#"{"user_id": "u-1", "content": "x", "created_at": "2026-10-01T08:30:00Z"}"#,
        );
        assert!(only_ts.is_err());
    }

    #[test]
    fn test_draft_rejects_storage_fields() {
        let result: Result<FeedbackDraft, _> = serde_json::from_str(
            r#"{"id": "fb-1", "user_id": "u-1", "content": "x", "created_at": "2026-10-01T08:30:00Z"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_feedback_type_rejected() {
        let result: Result<Feedback, _> =
            serde_json::from_str(r#"{"user_id": "u-1", "content": "x", "feedback_type": "praise"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_browser_info_logs() {
        let info: BrowserInfo = serde_json::from_str(
            r#"{
                "userAgent": "Mozilla/5.0",
                "recentLogs": [
                    "feed loaded",
                    {"level": "error", "message": "fetch failed", "timestamp": "2026-10-01T08:30:00Z"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(info.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(info.url, None);
        assert_eq!(info.recent_logs[0], LogEntry::new(LogLevel::Info, "feed loaded"));
        assert_eq!(
            info.recent_logs[1],
            LogEntry::new(LogLevel::Error, "fetch failed")
                .at(Utc.with_ymd_and_hms(2026, 10, 1, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_empty_browser_info() {
        let info: BrowserInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info, BrowserInfo::default());
        assert_eq!(serde_json::to_string(&info).unwrap(), "{}");
    }

    #[test]
    fn test_serialize_persisted_is_flat() {
        let created_at = Utc.with_ymd_and_hms(2026, 10, 1, 8, 30, 0).unwrap();
        let persisted = FeedbackDraft::new("u-1", "Add dark mode")
            .unwrap()
            .with_type(FeedbackType::Feature)
            .into_persisted("fb-7", created_at)
            .unwrap();

        let value = serde_json::to_value(Feedback::from(persisted)).unwrap();
        assert_eq!(value["id"], "fb-7");
        assert_eq!(value["user_id"], "u-1");
        assert_eq!(value["feedback_type"], "feature");
        assert_eq!(value["created_at"], "2026-10-01T08:30:00Z");
        assert!(value.get("browser_info").is_none());
    }

    #[test]
    fn test_into_persisted_requires_id() {
        let draft = FeedbackDraft::new("u-1", "x").unwrap();
        assert!(draft.into_persisted("", Utc::now()).is_err());
    }
}

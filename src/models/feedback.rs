use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
    Warning,
    Info,
}

/// User-visible notification queued by a service for the presentation layer
/// to display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub id: u64,
    pub message: String,
    pub kind: FeedbackKind,
}

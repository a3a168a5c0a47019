use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One structured event in an assembly trace. Serialized as a JSONL line
/// by `TraceLogger`.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    /// Pipeline stage that produced the event (registry, resolve, emit)
    pub stage: String,

    pub screen: Option<String>,
    pub target: Option<String>,
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(stage: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            stage: stage.to_string(),
            screen: None,
            target: None,
            detail: None,
        }
    }

    pub fn with_screen(mut self, screen: impl ToString) -> Self {
        self.screen = Some(screen.to_string());
        self
    }

    pub fn with_target(mut self, target: impl ToString) -> Self {
        self.target = Some(target.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}

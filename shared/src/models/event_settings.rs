//! Event Settings Model

use serde::{Deserialize, Serialize};

pub const DEFAULT_EVENT_NAME: &str = "Our Special Day";
pub const DEFAULT_HOME_PAGE_TEXT: &str = "Welcome to our wedding! Please find your table below.";

/// Event-wide settings shown on the guest portal (singleton)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSettings {
    pub event_name: String,
    pub home_page_text: String,
    /// Whether the public seat lookup is open
    pub search_enabled: bool,
    pub updated_at: i64,
}

impl EventSettings {
    pub fn with_defaults(now: i64) -> Self {
        Self {
            event_name: DEFAULT_EVENT_NAME.to_string(),
            home_page_text: DEFAULT_HOME_PAGE_TEXT.to_string(),
            search_enabled: true,
            updated_at: now,
        }
    }
}

/// Update event settings payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventSettingsUpdate {
    pub event_name: Option<String>,
    pub home_page_text: Option<String>,
    pub search_enabled: Option<bool>,
}

impl EventSettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.event_name.is_none() && self.home_page_text.is_none() && self.search_enabled.is_none()
    }
}

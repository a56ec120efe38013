//! Item record and validated item text

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Item text, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemText(String);

impl ItemText {
    /// Create item text from raw input.
    ///
    /// Surrounding whitespace is stripped; input that is empty afterwards
    /// is rejected.
    ///
    /// # Example
    /// ```
    /// use tasklist_server::models::ItemText;
    ///
    /// assert_eq!(ItemText::new("  buy milk  ").unwrap().as_str(), "buy milk");
    /// assert!(ItemText::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required { field: "text" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// One task record as stored on disk and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Build a fresh, not-yet-completed item.
    pub fn new(id: String, text: ItemText, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into_string(),
            completed: false,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_is_trimmed() {
        let text = ItemText::new("\t buy milk \n").unwrap();
        assert_eq!(text.as_str(), "buy milk");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(
            ItemText::new(""),
            Err(ValidationError::Required { field: "text" })
        );
        assert!(ItemText::new(" \t\n").is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let created_at = "2024-05-01T12:30:00Z".parse().unwrap();
        let item = Item::new("1-abc".into(), ItemText::new("walk dog").unwrap(), created_at);

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1-abc",
                "text": "walk dog",
                "completed": false,
                "createdAt": "2024-05-01T12:30:00Z"
            })
        );
    }

    #[test]
    fn reads_millisecond_timestamps() {
        let raw = r#"{"id":"x","text":"t","completed":true,"createdAt":"2024-05-01T12:30:00.123Z"}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert!(item.completed);
        assert_eq!(item.created_at.timestamp_subsec_millis(), 123);
    }
}

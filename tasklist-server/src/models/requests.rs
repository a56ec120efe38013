//! Request and response bodies for the item API
//!
//! Fields of the wrong JSON type are dropped instead of failing the whole
//! body: a numeric `text` on create reads as "no text", a string `completed`
//! on update is simply not applied.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{Item, ItemText, ValidationError};

fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn bool_only<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    })
}

/// POST /items body
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default, deserialize_with = "string_only")]
    pub text: Option<String>,
}

impl CreateItemRequest {
    /// Validate the text of a new item.
    pub fn text(&self) -> Result<ItemText, ValidationError> {
        match &self.text {
            Some(raw) => ItemText::new(raw),
            None => Err(ValidationError::Required { field: "text" }),
        }
    }
}

/// PATCH /items/{id} body
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default, deserialize_with = "string_only")]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "bool_only")]
    pub completed: Option<bool>,
}

impl UpdateItemRequest {
    /// Validate into a patch. A present but blank `text` is rejected.
    pub fn into_patch(self) -> Result<ItemPatch, ValidationError> {
        let text = self.text.as_deref().map(ItemText::new).transpose()?;
        Ok(ItemPatch {
            text,
            completed: self.completed,
        })
    }
}

/// Validated partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub text: Option<ItemText>,
    pub completed: Option<bool>,
}

impl ItemPatch {
    /// Apply only the fields that are present.
    pub fn apply(&self, item: &mut Item) {
        if let Some(text) = &self.text {
            item.text = text.as_str().to_owned();
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
    }
}

/// DELETE /items response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCompletedResponse {
    pub removed: usize,
}

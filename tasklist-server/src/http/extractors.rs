//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON request body that must be an object.
///
/// An empty body reads as `{}` and no content type is required. Malformed
/// JSON or a non-object body is a 400 with a JSON error body, not axum's
/// plain-text rejection.
pub struct JsonBody<T>(pub T);

fn invalid(reason: impl Into<String>) -> ApiError {
    ApiError::Validation(ValidationError::InvalidBody {
        reason: reason.into(),
    })
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| invalid(e.body_text()))?;

        let value = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(&bytes).map_err(|e| invalid(e.to_string()))?
        };

        if !value.is_object() {
            return Err(invalid("expected a JSON object"));
        }

        let parsed = serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;
        Ok(Self(parsed))
    }
}

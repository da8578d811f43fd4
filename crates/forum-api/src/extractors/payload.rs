//! Loose JSON body extractor
//!
//! Request bodies are handed to the use cases as untyped JSON so that the
//! entities decide which fields are missing or mistyped. A body that is
//! absent or not JSON reads as an empty object. Failures reading the body
//! itself, such as the size limit, are passed through.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde_json::{Map, Value};

/// The request body as a JSON value
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPayload(pub Value);

impl JsonPayload {
    /// A top-level field of the body, `null` when absent
    #[must_use]
    pub fn field(&self, name: &str) -> Value {
        self.0.get(name).cloned().unwrap_or(Value::Null)
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(
                rejection @ (JsonRejection::MissingJsonContentType(_)
                | JsonRejection::JsonSyntaxError(_)
                | JsonRejection::JsonDataError(_)),
            ) => {
                tracing::debug!(error = %rejection.body_text(), "Unreadable request body");
                Ok(Self(Value::Object(Map::new())))
            }
            Err(rejection) => Err(rejection),
        }
    }
}

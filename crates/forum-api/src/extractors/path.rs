//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::response::ApiError;

/// Path extractor that rejects with an [`ApiError`]
#[derive(Debug, Clone)]
pub struct ForumPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ForumPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(ForumPath(inner))
    }
}

/// Path parameters with thread_id
#[derive(Debug, Deserialize)]
pub struct ThreadPath {
    pub thread_id: String,
}

/// Path parameters with thread_id and comment_id
#[derive(Debug, Deserialize)]
pub struct CommentPath {
    pub thread_id: String,
    pub comment_id: String,
}

//! Body extractor that validates before the handler runs.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use service::validation::ValidateBody;
use tracing::debug;

use crate::errors::ApiError;

/// Like `Json<T>`, but every rejection is a 400 in the shared error shape and
/// the DTO's own constraints are checked against the raw body first.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateBody,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(error = %rejection.body_text(), "malformed request body");
                ApiError::bad_request(vec![rejection.body_text()])
            })?;

        let violations = T::constraint_violations(&body);
        if !violations.is_empty() {
            debug!(?violations, "request body failed validation");
            return Err(ApiError::bad_request(violations));
        }

        let value = serde_json::from_value(body)
            .map_err(|e| ApiError::bad_request(vec![e.to_string()]))?;
        Ok(ValidatedJson(value))
    }
}

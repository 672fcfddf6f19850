//! Signup body extractor - parses and validates in one step.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use common::AppError;
use domain::{SignupError, SignupPayload, SignupRequest};

/// Extracts a validated, normalized [`SignupRequest`] from a JSON body.
///
/// The body is parsed as JSON whatever the `content-type` header says. Any
/// body that is not a JSON object with correctly typed fields is rejected as
/// malformed before the field rules run.
pub struct ValidatedSignup(pub SignupRequest);

#[async_trait]
impl<S> FromRequest<S> for ValidatedSignup
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| SignupError::MalformedInput(e.body_text()))?;

        let value: Value = serde_json::from_slice(&body)
            .map_err(|e| SignupError::MalformedInput(e.to_string()))?;

        if !value.is_object() {
            return Err(SignupError::MalformedInput("expected a JSON object".to_string()).into());
        }

        let payload: SignupPayload = serde_json::from_value(value)
            .map_err(|e| SignupError::MalformedInput(e.to_string()))?;

        Ok(ValidatedSignup(payload.validate()?))
    }
}

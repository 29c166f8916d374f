// Session token pass-through
// The session service is external; the caller's bearer token is forwarded
// to the analysis backend unchanged and never validated here

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;

/// Bearer token from the incoming `Authorization` header, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedToken(pub Option<String>);

impl ForwardedToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for ForwardedToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from);

        Ok(ForwardedToken(token))
    }
}

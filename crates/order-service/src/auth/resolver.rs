//! Bearer header → [`Principal`].

use super::{AuthError, Principal, VerificationError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Claims the issuer vouched for.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedToken {
    pub uid: String,
    pub claims: Map<String, Value>,
}

/// Signature and expiry checks, done by whoever issued the token.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, VerificationError>;
}

/// Splits `"<scheme> <token>"` on the first space. Only a non-blank bearer token passes.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return None;
    }
    Some(token)
}

impl From<VerifiedToken> for Principal {
    fn from(token: VerifiedToken) -> Self {
        let email = token
            .claims
            .get("email")
            .and_then(Value::as_str)
            .map(str::to_string);
        let roles = token
            .claims
            .get("roles")
            .and_then(Value::as_array)
            .map(|roles| roles.iter().filter_map(Value::as_str).collect::<Vec<_>>())
            .unwrap_or_default();
        Principal::new(token.uid, email, roles)
    }
}

/// Turns the raw `Authorization` header into a verified [`Principal`].
#[derive(Clone)]
pub struct PrincipalResolver {
    verifier: Arc<dyn TokenVerifier>,
}

impl PrincipalResolver {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// A missing or empty header is rejected before the verifier is called, and so is
    /// any header that is not `Bearer <token>`.
    #[instrument(skip_all)]
    pub async fn resolve(&self, header: Option<&str>) -> Result<Principal, AuthError> {
        let header = match header {
            Some(h) if !h.is_empty() => h,
            _ => return Err(AuthError::MissingCredential),
        };
        let token = bearer_token(header).ok_or(AuthError::InvalidCredential)?;

        let verified = self.verifier.verify(token).await.map_err(|e| {
            debug!(error = %e, "Token rejected");
            AuthError::InvalidCredential
        })?;

        let principal = Principal::from(verified);
        debug!(principal = %principal.id, roles = ?principal.roles, "Principal resolved");
        Ok(principal)
    }
}

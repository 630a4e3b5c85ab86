use super::{TokenVerifier, VerificationError, VerifiedToken};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// In-memory token table for the demo binary and tests.
///
/// ```rust
/// use order_service::auth::{PrincipalResolver, StaticTokenVerifier};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// # #[tokio::main] async fn main() {
/// let verifier = StaticTokenVerifier::default()
///     .with_token("t-ada", "uid-ada", json!({ "email": "ada@example.com", "roles": ["customer"] }));
/// let resolver = PrincipalResolver::new(Arc::new(verifier));
///
/// let ada = resolver.resolve(Some("Bearer t-ada")).await.unwrap();
/// assert!(ada.has_role("customer"));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, VerifiedToken>,
}

impl StaticTokenVerifier {
    /// Registers `token` for `uid`. Non-object `claims` register no claims.
    pub fn with_token(mut self, token: impl Into<String>, uid: impl Into<String>, claims: Value) -> Self {
        let claims = match claims {
            Value::Object(map) => map,
            _ => Default::default(),
        };
        self.tokens.insert(
            token.into(),
            VerifiedToken {
                uid: uid.into(),
                claims,
            },
        );
        self
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, VerificationError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| VerificationError("unknown token".into()))
    }
}

use crate::rpc::code::RpcError;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::collections::HashSet;
use std::sync::Arc;

/// Header carrying the caller's token.
pub const TOKEN_HEADER: &str = "token-header";

/// Token whitelist for the ping service. Missing token is unauthenticated,
/// unknown token is permission denied.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub enabled: bool,
    pub tokens: HashSet<String>,
}

impl AuthConfig {
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            enabled: true,
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            tokens: HashSet::new(),
        }
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new([
            "super-secret".to_string(),
            "even-more-secret".to_string(),
        ])
    }
}

pub async fn require_token(
    State(auth): State<Arc<AuthConfig>>,
    request: Request,
    next: Next,
) -> Result<Response, RpcError> {
    if !auth.enabled {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if token.is_empty() {
        tracing::debug!("Rejected request without token");
        return Err(RpcError::unauthenticated("no token provided"));
    }
    if !auth.is_valid(token) {
        tracing::debug!("Rejected request with unknown token");
        return Err(RpcError::permission_denied("invalid token"));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens() {
        let auth = AuthConfig::default();
        assert!(auth.is_valid("super-secret"));
        assert!(auth.is_valid("even-more-secret"));
        assert!(!auth.is_valid("guessed"));
    }

    #[test]
    fn test_disabled_has_no_tokens() {
        let auth = AuthConfig::disabled();
        assert!(!auth.enabled);
        assert!(auth.tokens.is_empty());
    }
}

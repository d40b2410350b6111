//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// Admin authentication seam. Session management lives outside this service; the API only asks an
// injected authenticator to turn request headers into an explicit `AdminSession`.
//
// | Name                      | Description                                            |
// |---------------------------|--------------------------------------------------------|
// | AdminAuthenticator        | Trait resolving headers to an optional admin session   |
// | BearerTokenAuthenticator  | Accepts `Authorization: Bearer <configured token>`     |
// | OpenAuthenticator         | Treats every caller as an anonymous admin              |
//--------------------------------------------------------------------------------------------------

use axum::http::{HeaderMap, header};

use crate::domain::models::context::AdminSession;

/// Resolves the admin session, if any, carried by a request.
pub trait AdminAuthenticator: Send + Sync {
    fn authenticate(&self, headers: &HeaderMap) -> Option<AdminSession>;
}

/// Accepts requests bearing a single shared admin token.
pub struct BearerTokenAuthenticator {
    token: String,
    subject: String,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            subject: "admin".to_string(),
        }
    }
}

impl AdminAuthenticator for BearerTokenAuthenticator {
    fn authenticate(&self, headers: &HeaderMap) -> Option<AdminSession> {
        let presented = headers
            .get(header::AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")?
            .trim();

        let matches = !presented.is_empty()
            && constant_time_eq::constant_time_eq(presented.as_bytes(), self.token.as_bytes());

        matches.then(|| AdminSession::new(self.subject.clone()))
    }
}

/// Grants an anonymous admin session to every caller.
pub struct OpenAuthenticator;

impl AdminAuthenticator for OpenAuthenticator {
    fn authenticate(&self, _headers: &HeaderMap) -> Option<AdminSession> {
        Some(AdminSession::new("anonymous"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(auth: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(auth).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_accepts_matching_token() {
        let auth = BearerTokenAuthenticator::new("s3cret");
        let session = auth.authenticate(&headers_with("Bearer s3cret"));
        assert_eq!(session, Some(AdminSession::new("admin")));
    }

    #[test]
    fn test_bearer_token_rejects_everything_else() {
        let auth = BearerTokenAuthenticator::new("s3cret");
        assert!(auth.authenticate(&HeaderMap::new()).is_none());
        assert!(auth.authenticate(&headers_with("Bearer wrong")).is_none());
        assert!(auth.authenticate(&headers_with("Bearer ")).is_none());
        assert!(auth.authenticate(&headers_with("Basic s3cret")).is_none());
        assert!(auth.authenticate(&headers_with("s3cret")).is_none());
    }

    #[test]
    fn test_bearer_token_rejects_prefix_and_extension_of_token() {
        let auth = BearerTokenAuthenticator::new("s3cret");
        assert!(auth.authenticate(&headers_with("Bearer s3cre")).is_none());
        assert!(auth.authenticate(&headers_with("Bearer s3cret2")).is_none());
        assert!(auth.authenticate(&headers_with("Bearer S3CRET")).is_none());
    }

    #[test]
    fn test_open_authenticator_always_grants() {
        assert!(OpenAuthenticator.authenticate(&HeaderMap::new()).is_some());
    }
}

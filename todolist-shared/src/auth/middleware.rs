/// Request authentication context and header parsing
///
/// This module provides the pieces an HTTP layer needs to authenticate a
/// request: pulling the token out of the `Authorization` header, validating
/// it, and producing an [`AuthUser`] to attach to the request.
///
/// The wire format is deliberately loose: clients send the raw token in the
/// `Authorization` header, and a conventional `Bearer ` prefix is tolerated
/// and stripped. Either way the remaining string must be a valid signed
/// token.
///
/// # Example
///
/// ```
/// use todolist_shared::auth::jwt::{create_token, Claims};
/// use todolist_shared::auth::middleware::{authenticate, AuthUser};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = "test-secret-key-at-least-32-bytes-long";
/// let token = create_token(&Claims::new(5), secret)?;
///
/// let user = authenticate(Some(&token), secret)?;
/// assert_eq!(user.id, 5);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};

use super::jwt::{validate_token, JwtError};

/// Authentication context added to request extensions
///
/// Handlers extract it with Axum's `Extension` extractor once the auth
/// layer has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Authenticated user ID
    pub id: i32,
}

/// Error type for request authentication
///
/// The HTTP layer maps every variant to the same 401 response, so the
/// variants exist for logging, not for the client.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Missing or unreadable authorization header
    #[error("Missing credentials")]
    MissingCredentials,

    /// Token validation failed
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] JwtError),
}

/// Extracts the token from an `Authorization` header value
///
/// Accepts the raw token as-is, or a `Bearer `-prefixed one.
pub fn extract_token(header_value: &str) -> &str {
    header_value
        .strip_prefix("Bearer ")
        .unwrap_or(header_value)
        .trim()
}

/// Authenticates a request from its `Authorization` header value
///
/// `header_value` is the header as received, or None when absent.
///
/// # Errors
///
/// Returns `AuthError::MissingCredentials` when the header is absent or
/// empty, `AuthError::InvalidToken` when the token fails validation.
pub fn authenticate(header_value: Option<&str>, secret: &str) -> Result<AuthUser, AuthError> {
    let header_value = header_value.ok_or(AuthError::MissingCredentials)?;

    let token = extract_token(header_value);
    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    let claims = validate_token(token, secret)?;

    Ok(AuthUser { id: claims.sub })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::{create_token, Claims};

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_extract_token_raw() {
        assert_eq!(extract_token("abc.def.ghi"), "abc.def.ghi");
    }

    #[test]
    fn test_extract_token_bearer_prefix() {
        assert_eq!(extract_token("Bearer abc.def.ghi"), "abc.def.ghi");
    }

    #[test]
    fn test_authenticate_valid_token() {
        let token = create_token(&Claims::new(9), SECRET).unwrap();

        let user = authenticate(Some(&token), SECRET).expect("Should authenticate");
        assert_eq!(user, AuthUser { id: 9 });
    }

    #[test]
    fn test_authenticate_bearer_token() {
        let token = create_token(&Claims::new(9), SECRET).unwrap();
        let header = format!("Bearer {}", token);

        let user = authenticate(Some(&header), SECRET).expect("Should authenticate");
        assert_eq!(user.id, 9);
    }

    #[test]
    fn test_authenticate_missing_header() {
        let result = authenticate(None, SECRET);
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[test]
    fn test_authenticate_empty_header() {
        let result = authenticate(Some(""), SECRET);
        assert!(matches!(result, Err(AuthError::MissingCredentials)));

        let result = authenticate(Some("Bearer "), SECRET);
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[test]
    fn test_authenticate_garbage_token() {
        let result = authenticate(Some("not-a-token"), SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_authenticate_wrong_secret() {
        let token = create_token(&Claims::new(9), "some-other-secret").unwrap();
        let result = authenticate(Some(&token), SECRET);
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}

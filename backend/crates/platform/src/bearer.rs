//! Bearer Credential Extraction
//!
//! Parses the `Authorization: Bearer <token>` header used by the API.

use http::{HeaderMap, header};

/// Extract the bearer token from request headers
///
/// Returns `None` when the header is absent, not valid UTF-8, or does not
/// use the `Bearer` scheme. The scheme comparison is case-insensitive per
/// RFC 7235.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}

//! Identity token reader
//!
//! The backend hands out a `rustoj-token` cookie of the form
//! `<claims>.<signature>`, both segments base64url without padding. The claims
//! are read here for display purposes only; nothing is verified.

use base64::{
    Engine, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};
use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::TOKEN_COOKIE_NAME;
use crate::error::{ClientError, ClientResult};
use crate::models::User;
use crate::utils::time;

/// Standard alphabet, tolerant of non-zero trailing bits like browser `atob`
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Claims carried by the identity token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Address the token was issued to
    pub address: String,
    pub expires: DateTime<FixedOffset>,
    pub subject: User,
}

impl Token {
    /// Advisory expiry check against the local clock
    pub fn is_expired(&self) -> bool {
        time::is_past(&self.expires)
    }

    /// Time left before the claimed expiry, if any
    pub fn remaining(&self) -> Option<Duration> {
        time::time_until(&self.expires)
    }
}

/// Decode base64url text, restoring the padding the encoder stripped
pub fn urlsafe_base64_decode(s: &str) -> ClientResult<String> {
    let mut standard = s.replace('-', "+").replace('_', "/");
    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    let bytes = LENIENT
        .decode(standard.as_bytes())
        .map_err(|e| ClientError::InvalidToken(format!("Invalid base64: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| ClientError::InvalidToken(format!("Claims are not UTF-8: {}", e)))
}

/// Find a cookie's value in a `name=value; name=value` header string
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split("; ")
        .map(|part| part.split('='))
        .find_map(|mut kv| match kv.next() {
            Some(key) if key == name => Some(kv.next()),
            _ => None,
        })
        .flatten()
}

/// Read the token claims from a cookie header string.
///
/// Returns `Ok(None)` when the token cookie is absent or empty.
pub fn get_token(cookies: &str) -> ClientResult<Option<Token>> {
    let Some(value) = find_cookie(cookies, TOKEN_COOKIE_NAME).filter(|v| !v.is_empty()) else {
        debug!("No {} cookie present", TOKEN_COOKIE_NAME);
        return Ok(None);
    };

    let claims = value.split('.').next().unwrap_or_default();
    let json = urlsafe_base64_decode(claims)?;
    let token: Token = serde_json::from_str(&json)
        .map_err(|e| ClientError::InvalidToken(format!("Invalid claims: {}", e)))?;

    debug!(user_id = token.subject.id, expires = %token.expires, "Read identity token");
    Ok(Some(token))
}

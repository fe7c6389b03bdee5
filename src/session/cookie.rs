//! Signed cookie encoding, verification, and header construction.
//!
//! Token format: `base64url(payload) . hex(HMAC-SHA256(base64url(payload)))`.
//! The signature covers the encoded payload, so any tampering with either
//! part invalidates the token.

use super::config::{SessionConfig, SessionSecret};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Encodes and signs a raw payload into a cookie token.
pub fn encode_token(payload: &[u8], secret: &SessionSecret) -> String {
    let encoded = URL_SAFE_NO_PAD.encode(payload);
    let signature = compute_hmac(encoded.as_bytes(), secret.expose().as_bytes());
    format!("{encoded}.{}", hex::encode(signature))
}

/// Verifies a cookie token and returns the decoded payload.
///
/// Returns `None` for any malformed, tampered, or foreign-keyed token.
pub fn decode_token(token: &str, secret: &SessionSecret) -> Option<Vec<u8>> {
    let (encoded, signature_hex) = token.rsplit_once('.')?;

    let actual = hex::decode(signature_hex).ok()?;
    let expected = compute_hmac(encoded.as_bytes(), secret.expose().as_bytes());
    if !constant_time_eq(&expected, &actual) {
        tracing::warn!(
            target: "taskboard::session",
            prefix = %token.chars().take(8).collect::<String>(),
            "session cookie failed signature verification"
        );
        return None;
    }

    URL_SAFE_NO_PAD.decode(encoded).ok()
}

/// Extracts a named cookie value from a `Cookie` request header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Builds a `Set-Cookie` header value carrying the given token.
pub fn build_set_cookie(config: &SessionConfig, token: &str, max_age_secs: i64) -> String {
    let mut cookie = format!(
        "{}={token}; Path={}; Max-Age={max_age_secs}; SameSite={}",
        config.cookie_name,
        config.cookie_path,
        config.cookie_same_site.as_str(),
    );
    if config.cookie_http_only {
        cookie.push_str("; HttpOnly");
    }
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Builds a `Set-Cookie` header value that clears the session cookie.
pub fn build_clearing_cookie(config: &SessionConfig) -> String {
    build_set_cookie(config, "", 0)
}

/// Computes HMAC-SHA256.
///
/// # Panics
///
/// This function cannot panic: HMAC-SHA256 accepts keys of any length.
fn compute_hmac(message: &[u8], key: &[u8]) -> Vec<u8> {
    #[expect(clippy::expect_used, reason = "HMAC accepts keys of any size")]
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SessionSecret {
        SessionSecret::new("test-secret-key-that-is-long-enough!")
    }

    #[test]
    fn encode_and_decode_round_trip() {
        let token = encode_token(b"payload bytes", &secret());
        assert_eq!(decode_token(&token, &secret()), Some(b"payload bytes".to_vec()));
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let token = encode_token(b"payload", &secret());
        let Some((encoded, _)) = token.rsplit_once('.') else {
            panic!("token should contain a separator");
        };
        let tampered = format!("{encoded}.{}", "0".repeat(64));
        assert_eq!(decode_token(&tampered, &secret()), None);
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let token = encode_token(b"payload", &secret());
        let Some((_, signature)) = token.rsplit_once('.') else {
            panic!("token should contain a separator");
        };
        let other = URL_SAFE_NO_PAD.encode(b"other payload");
        let tampered = format!("{other}.{signature}");
        assert_eq!(decode_token(&tampered, &secret()), None);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = encode_token(b"payload", &secret());
        let other = SessionSecret::new("a-different-secret-also-long-enough!");
        assert_eq!(decode_token(&token, &other), None);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert_eq!(decode_token("noseparator", &secret()), None);
        assert_eq!(decode_token("payload.nothex", &secret()), None);
        assert_eq!(decode_token("", &secret()), None);
    }

    #[test]
    fn cookie_value_finds_named_cookie() {
        let header = "other=1; taskboard_session=abc.def; theme=dark";
        assert_eq!(cookie_value(header, "taskboard_session"), Some("abc.def"));
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn set_cookie_carries_attributes() {
        let config = SessionConfig::default();
        let cookie = build_set_cookie(&config, "tok", 1800);
        assert!(cookie.starts_with("taskboard_session=tok; Path=/; Max-Age=1800"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn clearing_cookie_zeroes_max_age() {
        let config = SessionConfig::default();
        let cookie = build_clearing_cookie(&config);
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn constant_time_eq_basic_cases() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hello!"));
        assert!(constant_time_eq(b"", b""));
    }
}

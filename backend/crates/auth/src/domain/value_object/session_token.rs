//! Session Token Value Object
//!
//! Opaque bearer string handed out on login. Issued tokens are UUID v4
//! (122 random bits); tokens presented by clients are accepted as any
//! non-empty string so that an unknown token is a lookup miss, not a
//! validation error.

use std::fmt;
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Issue a fresh random token
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Accept a client-supplied token; `None` when empty
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SHA-256 of the token, the form persisted by database-backed stores
    pub fn digest(&self) -> [u8; 32] {
        platform::crypto::sha256(self.0.as_bytes())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// Tokens are credentials; keep them out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_uuid_v4() {
        let token = SessionToken::generate();
        let uuid: Uuid = token.as_str().parse().unwrap();
        assert_eq!(uuid.get_version_num(), 4);
    }

    #[test]
    fn test_generate_unique() {
        assert_ne!(SessionToken::generate(), SessionToken::generate());
    }

    #[test]
    fn test_parse() {
        assert!(SessionToken::parse("").is_none());
        assert_eq!(
            SessionToken::parse("not-a-uuid").unwrap().as_str(),
            "not-a-uuid"
        );
    }

    #[test]
    fn test_digest_stable() {
        let token = SessionToken::parse("abc").unwrap();
        assert_eq!(token.digest(), token.clone().digest());
        assert_ne!(token.digest(), SessionToken::parse("abd").unwrap().digest());
    }

    #[test]
    fn test_debug_redaction() {
        let token = SessionToken::parse("super-secret").unwrap();
        assert!(!format!("{:?}", token).contains("super-secret"));
    }
}

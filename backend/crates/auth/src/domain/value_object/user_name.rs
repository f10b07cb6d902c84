//! User Name Value Object
//!
//! ユーザー名はログインに使用する識別子。
//! 入力をそのまま保持し、正規化は行わない（完全一致で照合する）。
//!
//! ## 不変条件
//! - 空文字列ではない
//! - NUL 文字 (U+0000) を含まない（PostgreSQL の TEXT に格納できないため）

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a user name from request input
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(AppError::bad_request("User name cannot be empty"));
        }
        if raw.contains('\0') {
            return Err(AppError::bad_request("User name cannot contain NUL"));
        }

        Ok(Self(raw))
    }

    /// Restore from a stored value
    ///
    /// Values read back from the store were validated on insert.
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_empty_rejected() {
        let err = UserName::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_nul_rejected() {
        for raw in ["al\0ice", "\0", "alice\0"] {
            let err = UserName::new(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadRequest);
        }
    }

    #[test]
    fn test_kept_verbatim() {
        // no trimming or case folding; lookups are exact
        let name = UserName::new(" Alice ").unwrap();
        assert_eq!(name.as_str(), " Alice ");
        assert_ne!(name, UserName::new("alice").unwrap());
    }

    #[test]
    fn test_display() {
        let name = UserName::new("alice").unwrap();
        assert_eq!(name.to_string(), "alice");
        assert_eq!(name.into_string(), "alice");
    }
}

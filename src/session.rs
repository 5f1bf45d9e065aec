//! Explicit session context passed into every backend call.
//!
//! A [`Session`] is created on login and dropped on logout; nothing in the
//! crate reads token state from a global.

/// Bearer credentials for one logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    username: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Authorization` request header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_is_prefixed() {
        let session = Session::new("abc123", "alice");
        assert_eq!(session.bearer(), "Bearer abc123");
        assert_eq!(session.username(), "alice");
    }
}

//! Structured URL components owned by a [`Url`](crate::Url).

use crate::compat::{Cow, String, Vec};

/// The path of a URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Path {
    /// Hierarchical path; each segment is serialized with a leading `/`.
    /// An empty list serializes to the empty string.
    Segments(Vec<String>),
    /// Whole scheme-specific remainder of a URL without authority (e.g. `mailto:`)
    Opaque(String),
}

impl Default for Path {
    fn default() -> Self {
        Self::Segments(Vec::new())
    }
}

impl Path {
    /// Check if this is an opaque path
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }

    /// Segments of a hierarchical path; `None` for opaque paths
    pub fn segments(&self) -> Option<&[String]> {
        match self {
            Self::Segments(segments) => Some(segments),
            Self::Opaque(_) => None,
        }
    }

    /// Serialized path (`pathname`)
    pub fn serialize(&self) -> Cow<'_, str> {
        match self {
            Self::Opaque(path) => Cow::Borrowed(path),
            Self::Segments(segments) => {
                let len = segments.iter().map(|s| s.len() + 1).sum();
                let mut out = String::with_capacity(len);
                for segment in segments {
                    out.push('/');
                    out.push_str(segment);
                }
                Cow::Owned(out)
            }
        }
    }
}

/// Username and optional password of an authority, percent-encoded
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserInfo {
    pub(crate) username: String,
    pub(crate) password: Option<String>,
}

impl UserInfo {
    /// Build userinfo, normalizing empty parts away.
    /// Returns `None` when there is neither a username nor a password.
    pub(crate) fn new(username: String, password: String) -> Option<Self> {
        let password = (!password.is_empty()).then_some(password);
        if username.is_empty() && password.is_none() {
            return None;
        }
        Some(Self { username, password })
    }

    /// Get the username (may be empty when only a password is set)
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the password
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::compat::{ToString, vec};

    #[test]
    fn test_path_serialize() {
        assert_eq!(Path::Segments(vec![]).serialize(), "");
        assert_eq!(Path::Segments(vec![String::new()]).serialize(), "/");
        assert_eq!(
            Path::Segments(vec!["a".to_string(), String::new()]).serialize(),
            "/a/"
        );
        assert_eq!(Path::Opaque("x@y".to_string()).serialize(), "x@y");
    }

    #[test]
    fn test_userinfo_normalization() {
        assert_eq!(UserInfo::new(String::new(), String::new()), None);

        let info = UserInfo::new("user".to_string(), String::new()).unwrap();
        assert_eq!(info.username(), "user");
        assert_eq!(info.password(), None);

        let info = UserInfo::new(String::new(), "pw".to_string());
        assert_eq!(info.as_ref().map(UserInfo::password), Some(Some("pw")));
    }
}

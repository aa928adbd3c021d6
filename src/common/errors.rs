use std::fmt;

pub type Result<T> = std::result::Result<T, ImageStreamError>;

/// A user-facing error: a short title plus a longer description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub title: String,
    pub description: String,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

pub fn create_user_error(title: &str, description: &str) -> UserError {
    UserError {
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImageStreamError {
    /// Fewer bytes were available than requested. Never retried.
    #[error("{error}")]
    Truncated {
        error: UserError,
        count: usize,
        offset: u64,
        bytes_read: usize,
    },

    /// Filesystem failure, passed through as-is.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ImageStreamError {
    pub fn truncated(count: usize, offset: u64, bytes_read: usize) -> Self {
        let description = format!(
            "We tried to read {} bytes at {}, but got {} bytes instead",
            count, offset, bytes_read
        );
        ImageStreamError::Truncated {
            error: create_user_error("Looks like the image is truncated", &description),
            count,
            offset,
            bytes_read,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, ImageStreamError::Truncated { .. })
    }

    /// Title/description pair suitable for showing to an end user, if any.
    pub fn user_error(&self) -> Option<&UserError> {
        match self {
            ImageStreamError::Truncated { error, .. } => Some(error),
            ImageStreamError::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_message_names_count_offset_and_bytes_read() {
        let err = ImageStreamError::truncated(262, 0, 100);
        assert!(err.is_truncated());
        assert_eq!(
            err.to_string(),
            "Looks like the image is truncated: We tried to read 262 bytes at 0, but got 100 bytes instead"
        );

        let user = err.user_error().expect("user error");
        assert_eq!(user.title, "Looks like the image is truncated");
    }

    #[test]
    fn io_errors_pass_through_unchanged() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ImageStreamError::from(io);
        assert!(!err.is_truncated());
        assert!(err.user_error().is_none());
        assert_eq!(err.to_string(), "denied");
        match err {
            ImageStreamError::Io(inner) => {
                assert_eq!(inner.kind(), std::io::ErrorKind::PermissionDenied)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

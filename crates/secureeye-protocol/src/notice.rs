//! Inline, non-fatal messages shown above a dashboard

use secureeye_types::Error;
use std::fmt;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// An action succeeded
    Info,
    /// An action was ignored; nothing was lost
    Warning,
    /// An action was rejected
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A message for the user about the last action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Human readable text
    pub message: String,
}

impl Notice {
    /// Success message
    #[must_use]
    pub fn info<S: Into<String>>(message: S) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Warning message
    #[must_use]
    pub fn warning<S: Into<String>>(message: S) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Describe an error without failing the view
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        let level = if error.is_benign() {
            NoticeLevel::Warning
        } else {
            NoticeLevel::Error
        };
        Self {
            level,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_error_levels() {
        let missing = Notice::from_error(&Error::not_found("CAM0404"));
        assert_eq!(missing.level, NoticeLevel::Warning);
        assert_eq!(missing.message, "Camera not found: CAM0404");

        let invalid = Notice::from_error(&Error::validation("name", "must not be empty"));
        assert_eq!(invalid.level, NoticeLevel::Error);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Notice::info("Camera 2 deleted").to_string(),
            "[info] Camera 2 deleted"
        );
        assert_eq!(Notice::warning("stale").to_string(), "[warning] stale");
    }
}

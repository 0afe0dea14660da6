use thiserror::Error;

pub type Result<T> = std::result::Result<T, UserAgentError>;

/// A caller asked for a platform, engine or browser outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserAgentError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("unsupported engine: {0}")]
    UnsupportedEngine(String),

    #[error("unsupported browser: {0}")]
    UnsupportedBrowser(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UserAgentError::UnsupportedBrowser("Netscape".to_string());
        assert_eq!(err.to_string(), "unsupported browser: Netscape");
    }

    #[test]
    fn test_error_carries_value() {
        let err = UserAgentError::UnsupportedPlatform("BeOS".to_string());
        assert!(err.to_string().contains("BeOS"));
    }
}

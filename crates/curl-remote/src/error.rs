//! Error type shared by every `CurlRemote` operation.

/// Failure of a validation step or of the underlying transfer.
///
/// Validation variants carry the rejected input. None of them leave the
/// remote in a partially updated state.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// URL failed the character check or the URL grammar.
    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),
    /// Method was neither `get` nor `post` (case-insensitive).
    #[error("invalid method {0:?}; accepted methods are \"get\" and \"post\"")]
    InvalidMethod(String),
    /// User agent contained markup, quotes or control characters.
    #[error("invalid user agent string: {0:?}")]
    InvalidUserAgent(String),
    /// libcurl rejected an option or the round trip itself failed
    /// (DNS, connect, TLS, timeout, ...).
    #[error("curl received an error: {0}")]
    Transfer(curl::Error),
}

impl RemoteError {
    /// True for the validation variants, false for transport failures.
    pub fn is_validation(&self) -> bool {
        !matches!(self, RemoteError::Transfer(_))
    }
}

impl From<curl::Error> for RemoteError {
    fn from(e: curl::Error) -> Self {
        RemoteError::Transfer(e)
    }
}

pub type Result<T> = std::result::Result<T, RemoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_variants_are_flagged() {
        assert!(RemoteError::InvalidUrl("foobar".into()).is_validation());
        assert!(RemoteError::InvalidMethod("execute".into()).is_validation());
        assert!(RemoteError::InvalidUserAgent("<b>".into()).is_validation());
        assert!(!RemoteError::Transfer(curl::Error::new(7)).is_validation());
    }

    #[test]
    fn transfer_display_carries_curl_text() {
        let err = RemoteError::from(curl::Error::new(6));
        let text = err.to_string();
        assert!(text.starts_with("curl received an error: "), "{text}");
        assert!(text.len() > "curl received an error: ".len());
    }

    #[test]
    fn invalid_method_display_lists_accepted() {
        let text = RemoteError::InvalidMethod("execute".into()).to_string();
        assert!(text.contains("\"execute\""));
        assert!(text.contains("\"get\" and \"post\""));
    }
}

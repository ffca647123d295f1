use thiserror::Error;

/// Failure of a backend call.
///
/// Views only log these; the variants exist so the log line says what broke.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::Status(502).to_string(), "HTTP error: 502");
        assert_eq!(
            ApiError::Request("connection refused".into()).to_string(),
            "request failed: connection refused"
        );
        assert_eq!(
            ApiError::Decode("expected value at line 1".into()).to_string(),
            "failed to parse response: expected value at line 1"
        );
    }
}

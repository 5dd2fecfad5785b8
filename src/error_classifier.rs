use crate::api::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Log level for a failed widget fetch.
    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Non-critical: rate limiting
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Missing data for a seller, or the backend is having trouble
            ApiError::Http { status, .. } if *status == 404 => LogLevel::Warn,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: the request or the response contract is wrong
            ApiError::Http { .. } => LogLevel::Error,
            ApiError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn classifies_http_statuses() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Debug);
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(400)), LogLevel::Error);
    }

    #[test]
    fn shape_mismatches_are_errors() {
        let err: ApiError = serde_json::from_str::<u64>("\"x\"").unwrap_err().into();
        assert_eq!(
            ErrorClassifier::new().classify_fetch_error(&err),
            LogLevel::Error
        );
    }
}

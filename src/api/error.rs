//! Error handling for the API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was not valid JSON, or did not have the expected shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Short message suitable for a widget's error state.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { status, message } => {
                let detail = detail_from_body(message);
                if detail.is_empty() {
                    format!("Request failed with status {}", status)
                } else {
                    format!("Request failed with status {}: {}", status, detail)
                }
            }
            ApiError::Reqwest(e) if e.is_timeout() => "Request timed out".to_string(),
            ApiError::Reqwest(e) if e.is_connect() => "Could not reach the API".to_string(),
            ApiError::Reqwest(_) => "Network error".to_string(),
            ApiError::Decode(e) => format!("Unexpected response format: {}", e),
        }
    }
}

/// Pulls `detail` out of a JSON error body, falling back to the first line of the text.
fn detail_from_body(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(serde_json::Value::String(detail)) = map.get("detail") {
            return detail.clone();
        }
    }
    let line = body.lines().next().unwrap_or_default().trim();
    line.chars().take(120).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_message_prefers_json_detail() {
        let err = ApiError::Http {
            status: 404,
            message: r#"{"detail":"Seller not found"}"#.to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Request failed with status 404: Seller not found"
        );
    }

    #[test]
    fn http_message_without_body() {
        let err = ApiError::Http {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "Request failed with status 502");
    }

    #[test]
    fn decode_errors_mention_the_format() {
        let err: ApiError = serde_json::from_str::<Vec<String>>("{}")
            .unwrap_err()
            .into();
        assert!(err.user_message().starts_with("Unexpected response format"));
    }
}

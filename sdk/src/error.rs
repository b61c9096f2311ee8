use reqwest::StatusCode;
use thiserror::Error;

/// The error type for every operation of the management client.
///
/// Transport failures (`RequestError`, `RequestMiddlewareError`, `InvalidResponse`,
/// `CannotDeserializePayload`) are kept apart from `Backend`, which is the only
/// variant produced when the broker reports a failure through the response envelope.
#[derive(Debug, Error)]
pub enum MqxError {
    #[error("Invalid configuration")]
    InvalidConfiguration,
    #[error("Cannot parse URL")]
    CannotParseUrl,
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Request middleware error: {0}")]
    RequestMiddlewareError(#[from] reqwest_middleware::Error),
    #[error("Invalid response with HTTP status: {0}")]
    InvalidResponse(StatusCode),
    #[error("Cannot deserialize payload field: {0}")]
    CannotDeserializePayload(String),
    /// Failure reported by the broker in the envelope `error` field, message kept verbatim.
    #[error("{0}")]
    Backend(String),
}

impl MqxError {
    pub fn as_code(&self) -> u32 {
        match self {
            MqxError::InvalidConfiguration => 1,
            MqxError::CannotParseUrl => 2,
            MqxError::RequestError(_) => 10,
            MqxError::RequestMiddlewareError(_) => 11,
            MqxError::InvalidResponse(_) => 12,
            MqxError::CannotDeserializePayload(_) => 13,
            MqxError::Backend(_) => 100,
        }
    }

    pub fn as_string(&self) -> &'static str {
        match self {
            MqxError::InvalidConfiguration => "invalid_configuration",
            MqxError::CannotParseUrl => "cannot_parse_url",
            MqxError::RequestError(_) => "request_error",
            MqxError::RequestMiddlewareError(_) => "request_middleware_error",
            MqxError::InvalidResponse(_) => "invalid_response",
            MqxError::CannotDeserializePayload(_) => "cannot_deserialize_payload",
            MqxError::Backend(_) => "backend_error",
        }
    }

    /// Returns true if the broker itself rejected the operation.
    pub fn is_backend(&self) -> bool {
        matches!(self, MqxError::Backend(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_should_display_message_verbatim() {
        let error = MqxError::Backend("topic orders already exists".to_string());
        assert_eq!(error.to_string(), "topic orders already exists");
        assert!(error.is_backend());
        assert_eq!(error.as_string(), "backend_error");
    }

    #[test]
    fn invalid_response_should_include_status() {
        let error = MqxError::InvalidResponse(StatusCode::BAD_GATEWAY);
        assert_eq!(
            error.to_string(),
            "Invalid response with HTTP status: 502 Bad Gateway"
        );
        assert!(!error.is_backend());
        assert_eq!(error.as_code(), 12);
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("AI credits exhausted, service temporarily unavailable")]
    PaymentRequired,

    #[error("Gateway request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Gateway returned no content")]
    EmptyResponse,

    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl GatewayError {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            429 => GatewayError::RateLimited,
            402 => GatewayError::PaymentRequired,
            _ => GatewayError::Upstream { status, body },
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Store request failed: {0}")]
    Store(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Gateway(GatewayError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Gateway(GatewayError::PaymentRequired) => StatusCode::PAYMENT_REQUIRED,
            ApiError::Gateway(_) | ApiError::Store(_) => StatusCode::BAD_GATEWAY,
        };

        let message = match &self {
            // Upstream bodies stay in the logs.
            ApiError::Gateway(GatewayError::Upstream { .. })
            | ApiError::Gateway(GatewayError::Transport(_)) => {
                "AI service request failed".to_string()
            }
            ApiError::Store(_) => "Database request failed".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_status_classification() {
        assert!(matches!(
            GatewayError::from_status(429, String::new()),
            GatewayError::RateLimited
        ));
        assert!(matches!(
            GatewayError::from_status(402, String::new()),
            GatewayError::PaymentRequired
        ));
        assert!(matches!(
            GatewayError::from_status(500, "boom".to_string()),
            GatewayError::Upstream { status: 500, .. }
        ));
    }

    #[test]
    fn test_api_error_status_codes() {
        let status = |error: ApiError| error.into_response().status();

        assert_eq!(status(ApiError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status(ApiError::MalformedPayload("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(GatewayError::RateLimited.into()),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status(GatewayError::PaymentRequired.into()),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            status(GatewayError::from_status(503, String::new()).into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status(ApiError::Store(anyhow::anyhow!("down"))),
            StatusCode::BAD_GATEWAY
        );
    }
}

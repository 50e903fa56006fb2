use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Error surface of the account API.
///
/// Both variants render with a server-error status: existing clients key off
/// the literal `500 {"message":"Not Found"}` shape for missed lookups, so the
/// status code is part of the contract even though the condition is a miss,
/// not a fault.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::NotFound => "Not Found",
            ApiError::Internal(e) => {
                // The cause goes to the log, never to the caller.
                error!(error = %e, "request failed");
                "Internal Server Error"
            }
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": message })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn not_found_renders_the_legacy_shape() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Not Found" })
        );
    }

    #[tokio::test]
    async fn internal_errors_hide_the_cause() {
        let response =
            ApiError::Internal(anyhow::anyhow!("connection refused to 10.0.0.3")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "Internal Server Error" }));
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use stock_ticker_lib::alphavantage_api;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Error fetching stock data: {0}")]
    Fetch(#[from] alphavantage_api::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Fetch(e) => {
                tracing::error!("Error fetching stock data: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

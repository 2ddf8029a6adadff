use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::responses::CountryResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No items provided. Please provide IP addresses using ?items=ip1,ip2,ip3")]
    MissingItems,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingItems => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = CountryResponse::error(self.to_string());
        (self.status_code(), Json(body)).into_response()
    }
}

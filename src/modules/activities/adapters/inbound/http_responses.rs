use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::use_cases::application_error::{ApplicationError, ErrorKind};

#[derive(Deserialize)]
pub struct ParticipantParams {
    pub email: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub fn unprocessable(rejection: QueryRejection) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorDetail {
            detail: rejection.body_text(),
        }),
    )
        .into_response()
}

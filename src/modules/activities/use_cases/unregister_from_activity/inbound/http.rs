use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::modules::activities::adapters::inbound::http_responses::{
    MessageResponse, ParticipantParams, unprocessable,
};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<ParticipantParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return unprocessable(rejection),
    };

    let command = UnregisterFromActivity {
        activity_name,
        email: params.email,
    };

    match state.unregister_handler.handle(command).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => e.into_response(),
    }
}

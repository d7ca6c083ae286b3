use std::path::Path;

use axum::{
    Extension, Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub const LANDING_PAGE: &str = "/static/index.html";

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/", get(landing_page))
        .route("/activities", get(list_http::handle))
        .route("/activities/{activity_name}/signup", post(sign_up_http::handle))
        .route(
            "/activities/{activity_name}/unregister",
            post(unregister_http::handle),
        )
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .with_state(state)
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn landing_page() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

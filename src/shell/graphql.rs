use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::activities::use_cases::list_activities::inbound::graphql::QueryRoot;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::graphql::SignUpMutation;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::graphql::UnregisterMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(SignUpMutation, UnregisterMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

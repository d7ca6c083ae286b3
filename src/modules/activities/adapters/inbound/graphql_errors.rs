use async_graphql::ErrorExtensions;

use crate::modules::activities::use_cases::application_error::{ApplicationError, ErrorKind};

pub fn to_graphql_error(error: ApplicationError) -> async_graphql::Error {
    let code = match error.kind() {
        ErrorKind::NotFound => "NOT_FOUND",
        ErrorKind::Conflict => "CONFLICT",
    };
    async_graphql::Error::new(error.to_string()).extend_with(|_, ext| ext.set("code", code))
}

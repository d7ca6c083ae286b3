use crate::modules::activities::adapters::outbound::roster::RegistryError;
use crate::modules::activities::core::decision::DecideError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::Registry(RegistryError::ActivityNotFound) => ErrorKind::NotFound,
            ApplicationError::Domain(DecideError::ParticipantNotFound) => ErrorKind::NotFound,
            ApplicationError::Domain(DecideError::AlreadySignedUp { .. }) => ErrorKind::Conflict,
        }
    }
}

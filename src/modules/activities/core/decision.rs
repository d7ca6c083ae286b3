use crate::modules::activities::core::events::RosterEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{email} is already signed up for this activity")]
    AlreadySignedUp { email: String },

    #[error("Participant not found")]
    ParticipantNotFound,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<RosterEvent> },
    Rejected { reason: DecideError },
}

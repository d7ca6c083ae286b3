use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(activity: &Activity, command: UnregisterFromActivity) -> Decision {
    if !activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::ParticipantNotFound,
        };
    }
    Decision::Accepted {
        events: vec![RosterEvent::ParticipantUnregistered {
            email: command.email,
        }],
    }
}

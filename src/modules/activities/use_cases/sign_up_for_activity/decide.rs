use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

/// Emails are compared verbatim. Capacity is not checked.
pub fn decide_sign_up(activity: &Activity, command: SignUpForActivity) -> Decision {
    if activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp {
                email: command.email,
            },
        };
    }
    Decision::Accepted {
        events: vec![RosterEvent::ParticipantSignedUp {
            email: command.email,
        }],
    }
}

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::RosterEvent;

pub fn evolve(activity: &mut Activity, event: &RosterEvent) {
    match event {
        RosterEvent::ParticipantSignedUp { email } => {
            activity.participants.push(email.clone());
        }
        RosterEvent::ParticipantUnregistered { email } => {
            if let Some(position) = activity.participants.iter().position(|p| p == email) {
                activity.participants.remove(position);
            }
        }
    }
}

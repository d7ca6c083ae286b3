use crate::modules::activities::adapters::outbound::roster::ActivityRoster;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TRoster>
where
    TRoster: ActivityRoster + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> SignUpForActivityHandler<TRoster>
where
    TRoster: ActivityRoster + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    /// Returns the confirmation message shown to the participant.
    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, ApplicationError> {
        let activity_name = command.activity_name.clone();
        let email = command.email.clone();

        let outcome = self
            .roster
            .modify(&activity_name, move |activity| {
                match decide_sign_up(activity, command) {
                    Decision::Accepted { events } => {
                        events.iter().for_each(|event| evolve(activity, event));
                        Ok(activity.participants.len())
                    }
                    Decision::Rejected { reason } => Err(reason),
                }
            })
            .await
            .inspect_err(|e| tracing::info!(activity = %activity_name, error = %e, "sign up rejected"))?;

        match outcome {
            Ok(roster_size) => {
                tracing::info!(activity = %activity_name, %email, roster_size, "participant signed up");
                Ok(format!("Signed up {email} for {activity_name}"))
            }
            Err(reason) => {
                tracing::info!(activity = %activity_name, %email, error = %reason, "sign up rejected");
                Err(reason.into())
            }
        }
    }
}

use crate::modules::activities::adapters::outbound::roster::ActivityRoster;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TRoster>
where
    TRoster: ActivityRoster + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> UnregisterFromActivityHandler<TRoster>
where
    TRoster: ActivityRoster + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<String, ApplicationError> {
        let activity_name = command.activity_name.clone();
        let email = command.email.clone();

        let outcome = self
            .roster
            .modify(&activity_name, move |activity| {
                match decide_unregister(activity, command) {
                    Decision::Accepted { events } => {
                        events.iter().for_each(|event| evolve(activity, event));
                        Ok(activity.participants.len())
                    }
                    Decision::Rejected { reason } => Err(reason),
                }
            })
            .await
            .inspect_err(|e| tracing::info!(activity = %activity_name, error = %e, "unregister rejected"))?;

        match outcome {
            Ok(roster_size) => {
                tracing::info!(activity = %activity_name, %email, roster_size, "participant unregistered");
                Ok(format!("Unregistered {email} from {activity_name}"))
            }
            Err(reason) => {
                tracing::info!(activity = %activity_name, %email, error = %reason, "unregister rejected");
                Err(reason.into())
            }
        }
    }
}

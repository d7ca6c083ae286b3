use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,
}

/// Write side of the registry. `modify` runs `change` against a single activity
/// while holding that activity's lock, so a membership check and the roster
/// update it guards cannot interleave with another caller.
#[async_trait]
pub trait ActivityRoster: Send + Sync {
    async fn modify<T, F>(&self, activity_name: &str, change: F) -> Result<T, RegistryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Activity) -> T + Send + 'static;
}

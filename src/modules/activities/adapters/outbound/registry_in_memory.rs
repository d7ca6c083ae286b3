use crate::modules::activities::adapters::outbound::roster::{ActivityRoster, RegistryError};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::seed::seed_activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// Process-lifetime registry. The set of activities is fixed at construction;
/// only each activity's roster changes, behind its own lock.
pub struct InMemoryActivityRegistry {
    activities: BTreeMap<String, Mutex<Activity>>,
}

impl InMemoryActivityRegistry {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: activities
                .into_iter()
                .map(|(name, activity)| (name, Mutex::new(activity)))
                .collect(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }
}

impl Default for InMemoryActivityRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait::async_trait]
impl ActivityRoster for InMemoryActivityRegistry {
    async fn modify<T, F>(&self, activity_name: &str, change: F) -> Result<T, RegistryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Activity) -> T + Send + 'static,
    {
        let slot = self
            .activities
            .get(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;
        let mut activity = slot.lock().await;
        Ok(change(&mut activity))
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityRegistry {
    async fn list_activities(&self) -> BTreeMap<String, Activity> {
        let mut snapshot = BTreeMap::new();
        for (name, slot) in &self.activities {
            snapshot.insert(name.clone(), slot.lock().await.clone());
        }
        snapshot
    }
}

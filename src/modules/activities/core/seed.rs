use crate::modules::activities::core::activity::Activity;
use std::collections::BTreeMap;

pub const SEED_ACTIVITY_NAMES: [&str; 9] = [
    "Chess Club",
    "Programming Class",
    "Gym Class",
    "Tennis Club",
    "Basketball Team",
    "Art Studio",
    "Drama Club",
    "Debate Team",
    "Science Club",
];

/// The activities offered when the service starts, each with its initial roster.
pub fn seed_activities() -> BTreeMap<String, Activity> {
    [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"][..],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"][..],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"][..],
        ),
        (
            "Tennis Club",
            "Learn tennis skills and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            16,
            &["alex@mergington.edu"][..],
        ),
        (
            "Basketball Team",
            "Practice and compete in basketball games",
            "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
            15,
            &["james@mergington.edu"][..],
        ),
        (
            "Art Studio",
            "Explore painting, drawing, and mixed media",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
            &["isabella@mergington.edu"][..],
        ),
        (
            "Drama Club",
            "Perform in plays and develop acting skills",
            "Thursdays, 4:00 PM - 6:00 PM",
            20,
            &["lucas@mergington.edu"][..],
        ),
        (
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Tuesdays, 3:30 PM - 5:00 PM",
            14,
            &["ava@mergington.edu"][..],
        ),
        (
            "Science Club",
            "Conduct experiments and explore scientific concepts",
            "Fridays, 3:00 PM - 4:30 PM",
            16,
            &["noah@mergington.edu"][..],
        ),
    ]
    .into_iter()
    .map(|(name, description, schedule, max_participants, participants)| {
        (
            name.to_string(),
            Activity::new(
                description,
                schedule,
                max_participants,
                participants.iter().map(|p| p.to_string()).collect(),
            ),
        )
    })
    .collect()
}

use crate::datatypes::Activity;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use tokio::sync::RwLock;
use tracing::{info, instrument};

/// Owned in-memory store mapping activity name to its record. Handlers get
/// a shared handle instead of reaching for a global.
pub struct ActivityRegistry {
    activities: RwLock<HashMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self {
            activities: RwLock::new(seed_activities()),
        }
    }

    pub async fn list(&self) -> HashMap<String, Activity> {
        self.activities.read().await.clone()
    }

    #[instrument(skip(self))]
    pub async fn signup(&self, activity: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;
        let entry = activities
            .get_mut(activity)
            .ok_or(RegistryError::UnknownActivity)?;

        if entry.is_signed_up(email) {
            return Err(RegistryError::DuplicateSignup);
        }

        entry.participants.push(email.to_owned());

        info!(email, activity, "participant signed up");

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn unsign(&self, activity: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;
        let entry = activities
            .get_mut(activity)
            .ok_or(RegistryError::UnknownActivity)?;

        let position = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::NotSignedUp)?;

        entry.participants.remove(position);

        info!(email, activity, "participant removed");

        Ok(())
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_activities() -> HashMap<String, Activity> {
    HashMap::from([
        (
            "Chess Club".to_owned(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_owned(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_owned(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Drama Club".to_owned(),
            Activity::new(
                "Rehearse and perform the school's stage productions",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                18,
            )
            .with_participants(&["ava@mergington.edu"]),
        ),
        (
            "Art Studio".to_owned(),
            Activity::new(
                "Painting, drawing, and mixed media projects",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(&["amelia@mergington.edu"]),
        ),
        (
            "Debate Team".to_owned(),
            Activity::new(
                "Research topics and compete in regional debate meets",
                "Tuesdays, 4:00 PM - 5:30 PM",
                10,
            ),
        ),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    UnknownActivity,
    DuplicateSignup,
    NotSignedUp,
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnknownActivity => write!(f, "Activity not found"),
            RegistryError::DuplicateSignup => write!(f, "Student already signed up"),
            RegistryError::NotSignedUp => write!(f, "Student not signed up"),
        }
    }
}

impl std::error::Error for RegistryError {}

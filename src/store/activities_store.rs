use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Activity;

/// Signup failures, surfaced to the HTTP layer as-is. The `Display` strings
/// are the exact `detail` strings the API returns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Activity not found")]
    UnknownActivity,
    #[error("{0} already signed up")]
    AlreadySignedUp(String),
}

/// Shared in-memory holder of all activity records.
///
/// Cloning hands out another handle to the same map. Every mutation goes
/// through [`ActivityStore::signup`], which holds the write lock across the
/// duplicate check and the append, so two racing signups for the same email
/// cannot both land.
#[derive(Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityStore {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Store preloaded with the school's fixed activity roster.
    pub fn with_seed() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of the full activity map.
    pub async fn all(&self) -> BTreeMap<String, Activity> {
        self.inner.read().await.clone()
    }

    /// Append `email` to the activity's participant list.
    ///
    /// The email is taken as given; there is no format validation.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::UnknownActivity)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(SignupError::AlreadySignedUp(email.to_string()));
        }

        activity.participants.push(email.to_string());
        Ok(())
    }
}

fn seed_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();

    activities.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    activities.insert(
        "Soccer".to_string(),
        activity(
            "Join the school soccer team and compete in local matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
    );
    activities.insert(
        "Basketball".to_string(),
        activity(
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
    );
    activities.insert(
        "Art Club".to_string(),
        activity(
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        activity(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
    );
    activities.insert(
        "Math Club".to_string(),
        activity(
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
    );

    activities
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_has_expected_roster_without_duplicates() {
        let store = ActivityStore::with_seed();
        let activities = store.all().await;

        for name in [
            "Chess Club",
            "Programming Class",
            "Gym Class",
            "Soccer",
            "Basketball",
            "Art Club",
            "Drama Club",
            "Math Club",
        ] {
            assert!(activities.contains_key(name), "missing seed activity {name}");
        }

        for (name, activity) in &activities {
            let mut seen = std::collections::HashSet::new();
            for email in &activity.participants {
                assert!(seen.insert(email), "duplicate {email} in {name}");
            }
        }
    }

    #[tokio::test]
    async fn signup_appends_at_the_end() {
        let store = ActivityStore::with_seed();

        store
            .signup("Basketball", "teststudent@example.com")
            .await
            .unwrap();

        let activities = store.all().await;
        let participants = &activities["Basketball"].participants;
        assert_eq!(participants.last().unwrap(), "teststudent@example.com");
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_and_list_unchanged() {
        let store = ActivityStore::with_seed();

        store.signup("Soccer", "duplicate@example.com").await.unwrap();
        let before = store.all().await["Soccer"].participants.clone();

        let err = store
            .signup("Soccer", "duplicate@example.com")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SignupError::AlreadySignedUp("duplicate@example.com".to_string())
        );
        assert_eq!(err.to_string(), "duplicate@example.com already signed up");

        let after = store.all().await["Soccer"].participants.clone();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn unknown_activity_is_rejected() {
        let store = ActivityStore::with_seed();

        let err = store
            .signup("NonExistent", "user@example.com")
            .await
            .unwrap_err();
        assert_eq!(err, SignupError::UnknownActivity);
        assert_eq!(err.to_string(), "Activity not found");
    }

    #[tokio::test]
    async fn seeded_participants_survive_unrelated_signups() {
        let store = ActivityStore::with_seed();
        let seeded = store.all().await["Chess Club"].participants.clone();

        store
            .signup("Basketball", "someone@example.com")
            .await
            .unwrap();

        assert_eq!(store.all().await["Chess Club"].participants, seeded);
    }
}

use std::collections::BTreeMap;

use crate::models::Activity;
use crate::store::{ActivityStore, SignupError};

pub async fn list_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    store.all().await
}

/// Register `email` for the named activity and build the confirmation
/// message the API returns.
pub async fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    store.signup(activity_name, email).await?;
    tracing::info!(activity = %activity_name, email = %email, "signup recorded");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::models::Activity;
use crate::services::activities_service;
use crate::store::{ActivityStore, SignupError};

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&store).await)
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::sign_up(&store, &activity_name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            tracing::warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            let status = match e {
                SignupError::UnknownActivity => StatusCode::NOT_FOUND,
                SignupError::AlreadySignedUp(_) => StatusCode::BAD_REQUEST,
            };
            (status, Json(serde_json::json!({ "detail": e.to_string() })))
        })
}

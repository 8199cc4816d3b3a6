use crate::datatypes::{Activity, Detail, EmailQuery, Message};
use crate::registry::{ActivityRegistry, RegistryError};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip(registry))]
pub async fn list_activities(
    registry: Extension<Arc<ActivityRegistry>>,
) -> ActivitiesResponse {
    ActivitiesResponse::Listing(registry.list().await)
}

#[instrument(skip(registry))]
pub async fn signup(
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
    registry: Extension<Arc<ActivityRegistry>>,
) -> ActivitiesResponse {
    match registry.signup(&activity, &query.email).await {
        Ok(()) => ActivitiesResponse::Confirmation(format!(
            "Signed up {} for {}",
            query.email, activity
        )),
        Err(e) => e.into(),
    }
}

#[instrument(skip(registry))]
pub async fn unsign(
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
    registry: Extension<Arc<ActivityRegistry>>,
) -> ActivitiesResponse {
    match registry.unsign(&activity, &query.email).await {
        Ok(()) => ActivitiesResponse::Confirmation(format!(
            "Removed {} from {}",
            query.email, activity
        )),
        Err(e) => e.into(),
    }
}

#[derive(Debug)]
pub enum ActivitiesResponse {
    Listing(HashMap<String, Activity>),
    Confirmation(String),
    ActivityNotFound,
    AlreadySignedUp,
    NotSignedUp,
}

impl From<RegistryError> for ActivitiesResponse {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::UnknownActivity => ActivitiesResponse::ActivityNotFound,
            RegistryError::DuplicateSignup => ActivitiesResponse::AlreadySignedUp,
            RegistryError::NotSignedUp => ActivitiesResponse::NotSignedUp,
        }
    }
}

impl IntoResponse for ActivitiesResponse {
    fn into_response(self) -> Response {
        match self {
            ActivitiesResponse::Listing(l) => (StatusCode::OK, Json(l)).into_response(),
            ActivitiesResponse::Confirmation(m) => {
                (StatusCode::OK, Json(Message { message: m })).into_response()
            }
            ActivitiesResponse::ActivityNotFound => detail(StatusCode::NOT_FOUND, "Activity not found"),
            ActivitiesResponse::AlreadySignedUp => {
                detail(StatusCode::BAD_REQUEST, "Student already signed up")
            }
            ActivitiesResponse::NotSignedUp => detail(StatusCode::NOT_FOUND, "Student not signed up"),
        }
    }
}

fn detail(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(Detail {
            detail: detail.to_owned(),
        }),
    )
        .into_response()
}

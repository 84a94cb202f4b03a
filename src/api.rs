use axum::{
    Json,
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub mod activities;
pub mod public;

pub use activities::{delete_unregister, get_activities, post_signup};
pub use public::{get_root, static_not_found};

/// Entry point of the front-end bundle served under `/static`.
pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MergingtonApiError {
    pub status: u16,
    pub detail: String,
}

pub fn mergington_api_err(status: StatusCode, detail: &str) -> Response<Body> {
    (
        status,
        Json(MergingtonApiError {
            status: status.as_u16(),
            detail: detail.to_string(),
        }),
    )
        .into_response()
}

pub fn mergington_api_response<T: Serialize>(status: StatusCode, message: T) -> Response<Body> {
    (status, Json(message)).into_response()
}

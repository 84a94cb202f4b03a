use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;
#[allow(unused_imports)]
use tracing::{debug, error};

use super::api::mergington_api_err;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced activity does not exist.
    NotFound,
    /// A business rule rejected the mutation.
    Conflict,
    Storage,
}

#[derive(Debug, Error)]
pub enum EnrollmentError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Activity is already full")]
    ActivityFull,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl EnrollmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ActivityNotFound => ErrorKind::NotFound,
            Self::AlreadySignedUp | Self::ActivityFull | Self::NotSignedUp => ErrorKind::Conflict,
            Self::Database(_) => ErrorKind::Storage,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EnrollmentError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            Self::Database(err) => {
                error!("storage failure: {err}");
                mergington_api_err(status, "Internal server error")
            }
            rejected => {
                debug!("request rejected: {rejected}");
                mergington_api_err(status, &rejected.to_string())
            }
        }
    }
}

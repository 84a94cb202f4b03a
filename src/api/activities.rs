use super::{EmailQuery, MessageResponse, mergington_api_response};
use crate::{database::Session, enrollment, error::EnrollmentError};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Response,
};
#[allow(unused_imports)]
use tracing::{debug, error, info};

/* GET /activities
 *
 * Every activity keyed by name, participants in signup order.
 */

pub async fn get_activities(session: Session) -> Result<Response, EnrollmentError> {
    let activities = enrollment::list_activities(session.connection()).await?;

    Ok(mergington_api_response(StatusCode::OK, activities))
}

/* POST /activities/{activity_name}/signup?email=
 *
 */

pub async fn post_signup(
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
    session: Session,
) -> Result<Response, EnrollmentError> {
    let message = enrollment::sign_up(session.connection(), &activity_name, &email).await?;

    info!("{email} signed up for {activity_name}");

    Ok(mergington_api_response(
        StatusCode::OK,
        MessageResponse { message },
    ))
}

/* DELETE /activities/{activity_name}/unregister?email=
 *
 */

pub async fn delete_unregister(
    Path(activity_name): Path<String>,
    Query(EmailQuery { email }): Query<EmailQuery>,
    session: Session,
) -> Result<Response, EnrollmentError> {
    let message = enrollment::unregister(session.connection(), &activity_name, &email).await?;

    info!("{email} unregistered from {activity_name}");

    Ok(mergington_api_response(
        StatusCode::OK,
        MessageResponse { message },
    ))
}

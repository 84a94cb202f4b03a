use super::{INDEX_PATH, mergington_api_err};
use axum::{
    body::Body,
    extract::Request,
    http::{Response, StatusCode, header::LOCATION},
    response::IntoResponse,
};
use std::convert::Infallible;
#[allow(unused_imports)]
use tracing::{debug, error, info};

pub async fn get_root() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, INDEX_PATH)])
}

pub async fn static_not_found(req: Request) -> Result<Response<Body>, Infallible> {
    debug!("no static file for {}", req.uri());

    Ok(mergington_api_err(StatusCode::NOT_FOUND, "Not found"))
}

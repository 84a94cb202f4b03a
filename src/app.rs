use axum::{
    Router,
    routing::{delete, get, post},
};
use axum_extra::routing::RouterExt;
use std::path::Path;
use tower::{ServiceBuilder, service_fn};
use tower_http::{
    CompressionLevel,
    compression::{
        CompressionLayer, Predicate,
        predicate::{NotForContentType, SizeAbove},
    },
    decompression::RequestDecompressionLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use super::{
    api::{delete_unregister, get_activities, get_root, post_signup, static_not_found},
    state::AppState,
};

/// Assembles the full HTTP surface: the activity API, the root redirect and
/// the static front-end under `/static`.
pub fn router(state: AppState, static_root: &Path) -> Router {
    let compression_predicate = SizeAbove::new(256).and(NotForContentType::IMAGES);

    let serve_static =
        ServeDir::new(static_root).not_found_service(service_fn(static_not_found));

    let activity_routes = Router::new()
        .route_with_tsr("/activities", get(get_activities))
        .route_with_tsr("/activities/{activity_name}/signup", post(post_signup))
        .route_with_tsr(
            "/activities/{activity_name}/unregister",
            delete(delete_unregister),
        );

    Router::new()
        .route("/", get(get_root))
        .nest_service("/static", serve_static)
        .merge(activity_routes)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(
                        DefaultMakeSpan::new()
                            .level(tracing::Level::INFO)
                            .include_headers(false),
                    ),
                )
                .layer(RequestDecompressionLayer::new())
                .layer(
                    CompressionLayer::new()
                        .no_br()
                        .no_deflate()
                        .gzip(true)
                        .zstd(true)
                        .quality(CompressionLevel::Fastest)
                        .compress_when(compression_predicate),
                ),
        )
        .with_state(state)
}

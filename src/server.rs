use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::{any::Any, path::Path};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::error;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    faq::{dtos::FaqErrorResponse, faq_search, refresh_cache},
    health::health_check,
    openapi::ApiDoc,
};

/// API routes, Swagger UI, and static files from `site_root` for every
/// other path. Dotfiles and dot-directories under the root are never served.
pub fn build_router(state: AppState, site_root: &Path) -> Router {
    let api = Router::new()
        .route("/api/faq-search", post(faq_search))
        .route("/api/cache/refresh", post(refresh_cache))
        .route("/healthz", get(health_check))
        .with_state(state);

    let static_files = Router::new()
        .fallback_service(ServeDir::new(site_root))
        .layer(middleware::from_fn(hide_dotfiles));

    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(static_files)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn hide_dotfiles(request: Request, next: Next) -> Response {
    if is_hidden_path(request.uri().path()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(request).await
}

/// True when any segment of `path` names a dotfile, including a
/// percent-encoded leading dot.
fn is_hidden_path(path: &str) -> bool {
    path.split('/').any(|segment| {
        segment.starts_with('.')
            || segment
                .get(..3)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("%2e"))
    })
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(FaqErrorResponse::apology()),
    )
        .into_response()
}

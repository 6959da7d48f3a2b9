use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::{
    app_state::AppState,
    faq::dtos::{CacheRefreshResponse, FaqErrorResponse, FaqRequest, FaqResponse},
    relevance::QuestionType,
};

#[utoipa::path(
    post,
    path = "/api/faq-search",
    tag = "faq",
    request_body = FaqRequest,
    responses(
        (status = 200, description = "Question answered", body = FaqResponse),
        (status = 500, description = "Malformed request or internal failure", body = FaqErrorResponse)
    )
)]
pub async fn faq_search(
    State(state): State<AppState>,
    payload: Result<Json<FaqRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected FAQ request body");
            return internal_error();
        }
    };

    let response = answer_question(&state, &request.question).await;
    (StatusCode::OK, Json(response)).into_response()
}

/// Classify, optionally rank cached pages, and compose the answer.
pub async fn answer_question(state: &AppState, question: &str) -> FaqResponse {
    match state.classifier.classify(question) {
        QuestionType::General => {
            info!("General question detected, answering without site content");
            let answer = state.composer.answer(question, &[]).await;
            FaqResponse {
                success: true,
                answer,
                question_type: QuestionType::General,
                sources: None,
            }
        }
        QuestionType::SiteSpecific => {
            info!("Site-related question, searching content");
            let snapshot = state.cache.ensure_fresh().await;
            let ranked = state.ranker.rank(question, &snapshot.pages);
            info!(matches = ranked.len(), "Ranked site pages");

            let answer = state.composer.answer(question, &ranked).await;
            let sources = ranked
                .iter()
                .take(state.max_sources)
                .map(|scored| scored.page.url.clone())
                .collect();

            FaqResponse {
                success: true,
                answer,
                question_type: QuestionType::SiteSpecific,
                sources: Some(sources),
            }
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/cache/refresh",
    tag = "faq",
    responses(
        (status = 200, description = "Site pages re-crawled", body = CacheRefreshResponse)
    )
)]
pub async fn refresh_cache(State(state): State<AppState>) -> Json<CacheRefreshResponse> {
    let snapshot = state.cache.refresh().await;
    Json(CacheRefreshResponse {
        pages: snapshot.pages.len(),
        refreshed_at: snapshot.refreshed_at,
    })
}

pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FaqErrorResponse::apology()),
    )
        .into_response()
}

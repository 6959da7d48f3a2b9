use utoipa::OpenApi;

use crate::{faq, health};

#[derive(OpenApi)]
#[openapi(
    paths(
        faq::handlers::faq_search,
        faq::handlers::refresh_cache,
        health::health_check
    ),
    components(schemas(
        faq::dtos::FaqRequest,
        faq::dtos::FaqResponse,
        faq::dtos::FaqErrorResponse,
        faq::dtos::CacheRefreshResponse,
        health::HealthResponse,
        crate::relevance::QuestionType
    )),
    tags(
        (name = "faq", description = "Question answering over the site's pages"),
        (name = "health", description = "Liveness and cache status")
    )
)]
pub struct ApiDoc;

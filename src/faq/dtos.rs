use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::relevance::QuestionType;

pub const APOLOGY_MESSAGE: &str = "متأسفانه مشکلی پیش آمد. لطفاً دوباره تلاش کنید.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct FaqRequest {
    pub question: String,
    /// Accepted for compatibility; answers always come from the local site.
    #[serde(rename = "siteUrl", default)]
    pub site_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FaqResponse {
    pub success: bool,
    pub answer: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FaqErrorResponse {
    pub success: bool,
    pub answer: String,
}

impl FaqErrorResponse {
    pub fn apology() -> Self {
        Self {
            success: false,
            answer: APOLOGY_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CacheRefreshResponse {
    pub pages: usize,
    pub refreshed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_site_url() {
        let request: FaqRequest = serde_json::from_value(json!({"question": "سلام"})).unwrap();
        assert_eq!(request.question, "سلام");
        assert_eq!(request.site_url, None);
    }

    #[test]
    fn test_request_with_site_url() {
        let request: FaqRequest = serde_json::from_value(json!({
            "question": "قیمت؟",
            "siteUrl": "http://localhost:3000"
        }))
        .unwrap();
        assert_eq!(request.site_url.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_request_without_question_is_rejected() {
        let result = serde_json::from_value::<FaqRequest>(json!({"siteUrl": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_general_response_has_no_sources() {
        let response = FaqResponse {
            success: true,
            answer: "سلام!".to_string(),
            question_type: QuestionType::General,
            sources: None,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": true, "answer": "سلام!", "type": "general"})
        );
    }

    #[test]
    fn test_site_response_lists_sources() {
        let response = FaqResponse {
            success: true,
            answer: "...".to_string(),
            question_type: QuestionType::SiteSpecific,
            sources: Some(vec!["/products.html".to_string()]),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "answer": "...",
                "type": "site-specific",
                "sources": ["/products.html"]
            })
        );
    }

    #[test]
    fn test_apology() {
        assert_eq!(
            serde_json::to_value(FaqErrorResponse::apology()).unwrap(),
            json!({"success": false, "answer": APOLOGY_MESSAGE})
        );
    }
}

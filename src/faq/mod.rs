pub mod dtos;
pub mod handlers;

pub use dtos::{FaqRequest, FaqResponse};
pub use handlers::{answer_question, faq_search, refresh_cache};

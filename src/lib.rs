pub mod answer;
pub mod app_state;
pub mod completion;
pub mod config;
pub mod crawler;
pub mod extractor;
pub mod faq;
pub mod health;
pub mod openapi;
pub mod relevance;
pub mod server;

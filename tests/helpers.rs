use axum::Router;
use serde_json::{Value, json};
use std::{fs, path::Path};
use url::Url;

use sitefaq::{
    app_state::AppState,
    config::{CompletionSettings, Config},
    server::build_router,
};

/// Write the demo site; `contact.html` is left out so one crawl fails.
pub fn write_site(root: &Path) {
    fs::write(
        root.join("index.html"),
        r#"<!DOCTYPE html><html><head><meta charset="UTF-8"><title>نوآوران دیجیتال</title></head>
<body><h1>به نوآوران دیجیتال خوش آمدید</h1><p>راهکارهای نرم‌افزاری برای کسب‌وکار شما.</p>
<script>console.log("analytics")</script></body></html>"#,
    )
    .unwrap();
    fs::write(
        root.join("products.html"),
        r#"<!DOCTYPE html><html><head><meta charset="UTF-8"><title>محصولات ما</title></head>
<body><h1>محصولات</h1><h2>نرم‌افزار حسابداری</h2>
<p>قیمت محصول حسابداری ماهانه ۲۰۰ هزار تومان است.</p></body></html>"#,
    )
    .unwrap();
    fs::write(
        root.join("about.html"),
        r#"<!DOCTYPE html><html><head><meta charset="UTF-8"><title>درباره ما</title></head>
<body><h1>درباره ما</h1><p>تیم ما از سال ۱۳۹۵ فعالیت می‌کند.</p></body></html>"#,
    )
    .unwrap();
}

pub fn test_app(site_root: &Path, provider_uri: &str, model: &str) -> Router {
    let base = Url::parse(&format!("{}/v1", provider_uri)).unwrap();
    let config = Config::new(0, site_root, base)
        .with_api_key("test-key")
        .with_completion(CompletionSettings {
            model: model.to_string(),
            ..CompletionSettings::default()
        });
    let state = AppState::new(&config).expect("Failed to build app state");
    build_router(state, config.site_root())
}

pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

pub fn unsupported_temperature_body() -> Value {
    json!({
        "error": {
            "message": "Unsupported value: 'temperature' does not support 0.7 with this model.",
            "type": "invalid_request_error",
            "param": "temperature",
            "code": "unsupported_value"
        }
    })
}

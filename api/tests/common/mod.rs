use std::sync::Arc;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use axum_test::TestServer;
use clap::Parser;
use mealscan_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::Mutex};

/// What the stand-in OpenAI endpoint received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct FakeOpenAI {
    pub base_url: String,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// Serves `POST /v1/chat/completions` on an ephemeral port, always answering `status` + `body`.
pub async fn spawn_openai(status: StatusCode, body: String) -> FakeOpenAI {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let recorded = calls.clone();

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(request): Json<Value>| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                recorded.lock().await.push(RecordedCall {
                    authorization: headers
                        .get("authorization")
                        .and_then(|h| h.to_str().ok())
                        .map(str::to_string),
                    body: request,
                });
                (status, body)
            }
        }),
    )
    .layer(DefaultBodyLimit::disable());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeOpenAI {
        base_url: format!("http://{addr}/v1"),
        calls,
    }
}

/// Chat completion body whose first choice carries `content`.
pub fn completion_with_content(content: Value) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub fn test_server(base_url: &str, extra_args: &[&str]) -> TestServer {
    let mut argv = vec![
        "mealscan-api",
        "--openai-api-key",
        "sk-test",
        "--openai-base-url",
        base_url,
        "--server-root-path",
        "",
    ];
    argv.extend_from_slice(extra_args);

    let args = Args::try_parse_from(argv).unwrap();
    let app_state = state(Arc::new(args)).unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

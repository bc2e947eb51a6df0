use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::{Filter, Reply};
use javalyzer::structs::config::ai_config::AiConfig;

/// What the fake chat-completion endpoint answers with.
pub enum FakeReply {
    /// A well-formed completion whose first choice carries this text.
    Content(String),
    /// A completion whose text describes the request that was received.
    Echo,
    /// A bare status code with a plain-text body.
    Status(u16),
    /// An arbitrary JSON body with status 200.
    Raw(Value),
    /// Answers with `Content` only after the delay.
    Slow(Duration, String),
}

pub async fn spawn_fake_provider(reply: FakeReply) -> SocketAddr {
    let reply = Arc::new(reply);

    let route = warp::path!("chat" / "completions")
        .and(warp::post())
        .and(warp::header::<String>("authorization"))
        .and(warp::body::json::<Value>())
        .and_then(move |authorization: String, body: Value| {
            let reply = Arc::clone(&reply);
            async move { Ok::<_, Infallible>(respond(&reply, &authorization, &body).await) }
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

pub fn ai_config(addr: SocketAddr) -> AiConfig {
    AiConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 5,
        ..AiConfig::default()
    }
}

pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "model": "deepseek-coder",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 34, "total_tokens": 46 }
    })
}

async fn respond(reply: &FakeReply, authorization: &str, body: &Value) -> warp::reply::Response {
    match reply {
        FakeReply::Content(content) => warp::reply::json(&completion(content)).into_response(),
        FakeReply::Echo => {
            let roles: Vec<Value> = body["messages"]
                .as_array()
                .map(|messages| messages.iter().map(|m| m["role"].clone()).collect())
                .unwrap_or_default();
            let echo = json!({
                "authorization": authorization,
                "model": body["model"],
                "temperature": body["temperature"],
                "max_tokens": body["max_tokens"],
                "stream": body["stream"],
                "roles": roles,
                "user": body["messages"][1]["content"],
            });
            warp::reply::json(&completion(&echo.to_string())).into_response()
        }
        FakeReply::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            warp::reply::with_status("upstream failure", status).into_response()
        }
        FakeReply::Raw(value) => warp::reply::json(value).into_response(),
        FakeReply::Slow(delay, content) => {
            tokio::time::sleep(*delay).await;
            warp::reply::json(&completion(content)).into_response()
        }
    }
}

use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use warp::filters::body::BodyDeserializeError;
use warp::filters::cors::CorsForbidden;
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::reject::{LengthRequired, MethodNotAllowed, PayloadTooLarge, UnsupportedMediaType};
use warp::{Filter, Rejection, Reply};
use crate::config::constants::{CORS_ALLOWED_HEADERS, CORS_ALLOWED_METHODS, MAX_REQUEST_BODY_BYTES};
use crate::constants::samples::find_sample;
use crate::errors::{JavalyzerError, JavalyzerResult};
use crate::services::code_analyzer::CodeAnalyzer;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::api_response::ApiResponse;
use crate::structs::health_response::HealthResponse;
use crate::structs::history_entry::HistoryEntry;
use crate::structs::sample_response::SampleResponse;

pub struct AnalysisServer {
    analyzer: Arc<CodeAnalyzer>,
    static_dir: Option<PathBuf>,
}

impl AnalysisServer {
    pub fn new(analyzer: CodeAnalyzer, static_dir: Option<PathBuf>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            static_dir,
        }
    }

    /// Serves until Ctrl-C, then drains in-flight requests.
    pub async fn run(&self, addr: SocketAddr) -> JavalyzerResult<()> {
        let routes = routes(Arc::clone(&self.analyzer), self.static_dir.clone());

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                tokio::signal::ctrl_c().await.ok();
                log::info!("🛑 Shutdown signal received");
            })
            .map_err(|e| JavalyzerError::system_error("bind", &format!("{}: {}", addr, e)))?;

        log::info!("🌐 Analysis server listening on http://{}", bound);
        if let Some(dir) = &self.static_dir {
            log::info!("📁 Serving front-end from {}", dir.display());
        }
        if !self.analyzer.is_remote_configured() {
            log::warn!("⚠️ No provider credential found; /api/analyze will answer 500 until one is set");
        }

        server.await;
        log::info!("✅ Analysis server shutdown complete");
        Ok(())
    }
}

/// Inner rejections are recovered inside the CORS wrapper so error replies carry CORS headers;
/// the outer recover only sees rejections raised by the CORS filter itself.
pub fn routes(
    analyzer: Arc<CodeAnalyzer>,
    static_dir: Option<PathBuf>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let analyzer_filter = warp::any().map(move || Arc::clone(&analyzer));

    let analyze = warp::path!("api" / "analyze")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_REQUEST_BODY_BYTES))
        .and(warp::body::json())
        .and(analyzer_filter.clone())
        .and_then(analyze_handler);

    let probe = warp::path!("api" / "analyze")
        .and(warp::options())
        .map(probe_reply);

    let health = warp::path!("api" / "health")
        .and(warp::get())
        .and(analyzer_filter)
        .and_then(health_handler);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(CORS_ALLOWED_METHODS.iter().copied())
        .allow_headers(CORS_ALLOWED_HEADERS.iter().copied());

    analyze
        .or(probe)
        .or(health)
        .or(static_files(static_dir))
        .recover(handle_rejection)
        .with(cors)
        .recover(handle_rejection)
}

fn probe_reply() -> impl Reply {
    let reply = warp::reply::with_header(warp::reply(), "access-control-allow-origin", "*");
    let reply = warp::reply::with_header(reply, "access-control-allow-methods", CORS_ALLOWED_METHODS.join(", "));
    warp::reply::with_header(reply, "access-control-allow-headers", CORS_ALLOWED_HEADERS.join(", "))
}

fn static_files(static_dir: Option<PathBuf>) -> BoxedFilter<(warp::fs::File,)> {
    match static_dir {
        Some(dir) => warp::fs::dir(dir).boxed(),
        None => warp::any()
            .and_then(|| async { Err::<warp::fs::File, Rejection>(warp::reject::not_found()) })
            .boxed(),
    }
}

async fn analyze_handler(request: AnalyzeRequest, analyzer: Arc<CodeAnalyzer>) -> Result<warp::reply::Response, Infallible> {
    if let Some(name) = request.sample.as_deref() {
        match find_sample(name) {
            Some(code) => {
                log::info!("📄 Serving sample '{}'", name);
                let sample = SampleResponse { code: code.to_string(), sample_type: name.to_string() };
                return Ok(json_reply(&sample, StatusCode::OK));
            }
            None => log::debug!("Unknown sample '{}', analyzing the submitted code instead", name),
        }
    }

    let code = request.code.unwrap_or_default();
    let options = request.options.unwrap_or_default();

    match analyzer.analyze(&code, &options).await {
        Ok(result) => {
            let history = HistoryEntry::from_result(&result, &options);
            Ok(json_reply(&ApiResponse::ok(result, history, "Analysis complete"), StatusCode::OK))
        }
        Err(e) => {
            let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                log::error!("{} Analysis request failed: {}", e.severity().emoji(), e);
            } else {
                log::info!("🚫 Rejected analysis request: {}", e);
            }
            Ok(error_reply(&e.user_message(), status))
        }
    }
}

async fn health_handler(analyzer: Arc<CodeAnalyzer>) -> Result<impl Reply, Infallible> {
    Ok(warp::reply::json(&HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider_configured: analyzer.is_remote_configured(),
    }))
}

async fn handle_rejection(rejection: Rejection) -> Result<warp::reply::Response, Infallible> {
    let (status, message) = if let Some(e) = rejection.find::<BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e))
    } else if rejection.find::<PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large".to_string())
    } else if rejection.find::<LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length header is required".to_string())
    } else if rejection.find::<UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected an application/json body".to_string())
    } else if let Some(e) = rejection.find::<CorsForbidden>() {
        (StatusCode::FORBIDDEN, e.to_string())
    } else if rejection.find::<MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else {
        log::error!("❌ Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    };

    Ok(error_reply(&message, status))
}

fn json_reply<T: serde::Serialize>(body: &T, status: StatusCode) -> warp::reply::Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

fn error_reply(message: &str, status: StatusCode) -> warp::reply::Response {
    json_reply(&ApiResponse::<AnalysisResult>::error(message), status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::constants::samples::VULNERABLE_SAMPLE;
    use crate::traits::ai_provider::MockAiProvider;

    const SQL_CODE: &str = "Statement.execute(\"SELECT * FROM users WHERE id=\" + id);";

    fn unconfigured_routes() -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
        routes(Arc::new(CodeAnalyzer::unconfigured("DEEPSEEK_API_KEY", 10_000)), None)
    }

    fn failing_provider_routes() -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
        let mut provider = MockAiProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_chat()
            .returning(|_, _| Err(AiProviderError::TimeoutError("deadline elapsed".to_string())));
        routes(Arc::new(CodeAnalyzer::new(Arc::new(provider), 10_000)), None)
    }

    fn body_json(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_provider_state() {
        let response = warp::test::request()
            .method("GET")
            .path("/api/health")
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.body());
        assert_eq!(body["status"], "ok");
        assert_eq!(body["provider_configured"], false);
    }

    #[tokio::test]
    async fn test_sample_request_returns_snippet() {
        let response = warp::test::request()
            .method("POST")
            .path("/api/analyze")
            .json(&json!({ "sample": "vulnerable" }))
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.body());
        assert_eq!(body["type"], "vulnerable");
        assert_eq!(body["code"], VULNERABLE_SAMPLE);
    }

    #[tokio::test]
    async fn test_unknown_sample_falls_through_to_validation() {
        let response = warp::test::request()
            .method("POST")
            .path("/api/analyze")
            .json(&json!({ "sample": "nope" }))
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response.body())["success"], false);
    }

    #[tokio::test]
    async fn test_empty_code_is_bad_request() {
        let response = warp::test::request()
            .method("POST")
            .path("/api/analyze")
            .json(&json!({ "code": "   " }))
            .reply(&failing_provider_routes())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response.body());
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("code"));
    }

    #[tokio::test]
    async fn test_oversized_code_is_bad_request() {
        let response = warp::test::request()
            .method("POST")
            .path("/api/analyze")
            .json(&json!({ "code": "a".repeat(10_001) }))
            .reply(&failing_provider_routes())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_credential_is_server_error() {
        let response = warp::test::request()
            .method("POST")
            .path("/api/analyze")
            .json(&json!({ "code": SQL_CODE }))
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response.body());
        assert_eq!(body["success"], false);
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_remote_failure_still_answers_with_heuristic_result() {
        let response = warp::test::request()
            .method("POST")
            .path("/api/analyze")
            .json(&json!({ "code": SQL_CODE, "options": { "performance": false } }))
            .reply(&failing_provider_routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.body());
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Analysis complete");
        assert_eq!(body["data"]["issues"][0]["type"], "security");
        assert_eq!(body["data"]["issues"][0]["severity"], "critical");
        assert_eq!(body["data"]["summary"]["critical"], 1);
        assert_eq!(body["data"]["metrics"]["securityScore"], 75);
        assert_eq!(body["data"]["code"], SQL_CODE);
        assert_eq!(body["history"]["issuesCount"], 1);
        assert_eq!(body["history"]["codeLength"], SQL_CODE.chars().count());
        assert_eq!(body["history"]["options"]["performance"], false);
        assert_eq!(body["history"]["options"]["security"], true);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = warp::test::request()
            .method("POST")
            .path("/api/analyze")
            .header("content-type", "application/json")
            .body("{\"code\": ")
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response.body())["success"], false);
    }

    #[tokio::test]
    async fn test_other_methods_are_not_allowed() {
        for method in ["GET", "PUT", "DELETE"] {
            let response = warp::test::request()
                .method(method)
                .path("/api/analyze")
                .reply(&unconfigured_routes())
                .await;

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);
        }
    }

    #[tokio::test]
    async fn test_options_probe_succeeds() {
        let response = warp::test::request()
            .method("OPTIONS")
            .path("/api/analyze")
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let response = warp::test::request()
            .method("OPTIONS")
            .path("/api/analyze")
            .header("origin", "https://example.com")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_cors_preflight_accepts_every_allowed_header() {
        let response = warp::test::request()
            .method("OPTIONS")
            .path("/api/analyze")
            .header("origin", "https://example.com")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type, x-api-version, x-csrf-token, content-md5")
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let allowed = response.headers()["access-control-allow-headers"].to_str().unwrap().to_string();
        assert!(allowed.contains("x-api-version"));
        assert!(allowed.contains("x-csrf-token"));
    }

    #[tokio::test]
    async fn test_forbidden_preflight_answers_with_json_error() {
        let response = warp::test::request()
            .method("OPTIONS")
            .path("/api/analyze")
            .header("origin", "https://example.com")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "x-unlisted-header")
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response.body())["success"], false);
    }

    #[tokio::test]
    async fn test_options_without_origin_still_carries_cors_headers() {
        let response = warp::test::request()
            .method("OPTIONS")
            .path("/api/analyze")
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert!(headers["access-control-allow-methods"].to_str().unwrap().contains("POST"));
        assert!(headers["access-control-allow-headers"].to_str().unwrap().contains("x-api-version"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = warp::test::request()
            .method("GET")
            .path("/index.html")
            .reply(&unconfigured_routes())
            .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_dir_is_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>javalyzer</h1>").unwrap();

        let filter = routes(
            Arc::new(CodeAnalyzer::unconfigured("DEEPSEEK_API_KEY", 10_000)),
            Some(dir.path().to_path_buf()),
        );
        let response = warp::test::request()
            .method("GET")
            .path("/index.html")
            .reply(&filter)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body().as_ref(), b"<h1>javalyzer</h1>");
    }
}

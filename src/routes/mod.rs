//! API 라우트 설정 모듈
//!
//! # Available Routes
//!
//! - `GET /health` - 헬스체크
//! - `GET /api/v1/context` - 현재 요청 컨텍스트 조회
//!
//! 요청 컨텍스트 미들웨어는 라우트 단위가 아니라 `App` 전체에 적용됩니다.
//! (`main.rs` 참고)
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_context_routes(cfg);
}

/// 요청 컨텍스트 관련 라우트를 설정합니다
///
/// ```bash
/// curl http://localhost:8080/api/v1/context -H "x-request-id: trace-123"
/// ```
fn configure_context_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/context")
            .service(handlers::context::get_current_context)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "request_context_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

//! # Request Context HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/context` | 현재 요청 컨텍스트 조회 | 200 OK |

use actix_web::{get, HttpResponse};
use crate::core::errors::AppError;
use crate::services::ContextService;

/// 현재 요청 컨텍스트 조회 핸들러
///
/// 미들웨어가 바인딩한 컨텍스트를 서비스 계층에서 읽어 그대로 반환합니다.
/// 핸들러는 컨텍스트를 파라미터로 받지 않습니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/context`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "request_id": "0190b7c4-8a1e-7cc2-a5e4-2f7b1c8d9e01",
///   "values": {
///     "request_id": "0190b7c4-8a1e-7cc2-a5e4-2f7b1c8d9e01",
///     "http_method": "GET",
///     "path": "/api/v1/context"
///   }
/// }
/// ```
///
/// ## 미들웨어 미설치 (500 Internal Server Error)
///
/// # 사용 예제
///
/// ```bash
/// curl http://localhost:8080/api/v1/context -H "x-request-id: my-trace-1"
/// ```
#[get("")]
pub async fn get_current_context() -> Result<HttpResponse, AppError> {
    let snapshot = ContextService::snapshot().ok_or_else(|| {
        AppError::InternalError("활성 요청 컨텍스트가 없습니다".to_string())
    })?;

    Ok(HttpResponse::Ok().json(snapshot))
}

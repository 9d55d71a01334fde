//! # Application Error Handling System
//!
//! 요청 컨텍스트 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 HTTP 에러 응답을 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | JSON 본문 파싱 실패, 필수 필드 누락 |
//! | `InvalidFields` | 400 Bad Request | `validator` 규칙 위반 (필드별 메시지 포함) |
//! | `InternalError` | 500 Internal Server Error | 미들웨어 미설치, 직렬화 실패 등 |
//!
//! 컨텍스트 전파기 자체는 새로운 에러 종류를 정의하지 않습니다.
//! 핸들러 체인에서 발생한 에러는 변환 없이 그대로 호출자에게 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppResult, ErrorContext};
//!
//! fn encode(value: &Payload) -> AppResult<serde_json::Value> {
//!     serde_json::to_value(value).context("페이로드 직렬화 실패")
//! }
//! ```

use serde_json::{Map, Value};
use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 본문이 JSON이 아니거나 필수 필드가 빠진 경우처럼
    /// 필드 단위로 표현할 수 없는 입력 오류입니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 규칙 위반 에러 (400 Bad Request)
    ///
    /// `validator::Validate` 가 보고한 필드별 위반 목록을 그대로 보존합니다.
    /// 응답 본문의 `details` 에 필드 이름별 메시지 배열로 노출됩니다.
    #[error("Validation failed: {0}")]
    InvalidFields(ValidationErrors),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 필드별 검증 메시지를 JSON 객체로 변환합니다.
    ///
    /// 메시지가 지정되지 않은 규칙은 에러 코드(`length` 등)로 대체됩니다.
    fn field_details(errors: &ValidationErrors) -> Value {
        let mut details = Map::new();

        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<Value> = field_errors
                .iter()
                .map(|err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    Value::String(message)
                })
                .collect();

            details.insert(field.to_string(), Value::Array(messages));
        }

        Value::Object(details)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// # 응답 형식
    ///
    /// ```json
    /// { "error": "Human readable error message" }
    /// ```
    ///
    /// 필드 규칙 위반의 경우:
    ///
    /// ```json
    /// {
    ///   "error": "validation_error",
    ///   "message": "입력 데이터가 유효하지 않습니다",
    ///   "details": { "token": ["재설정 토큰이 필요합니다"] }
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        let body = match self {
            AppError::InvalidFields(errors) => serde_json::json!({
                "error": "validation_error",
                "message": "입력 데이터가 유효하지 않습니다",
                "details": Self::field_details(errors),
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let value = serde_json::to_value(&payload)
///     .context("컨텍스트 값 직렬화 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

//! # Request Extractors
//!
//! 핸들러 파라미터로 사용하는 ActixWeb `FromRequest` 구현들입니다.
//!
//! - [`ValidatedJson`] - JSON 역직렬화 + `validator` 규칙 검증
//! - [`CurrentContext`] / [`OptionalContext`] - 현재 요청 컨텍스트

pub mod current_context;
pub mod validated_json;

pub use current_context::{CurrentContext, OptionalContext};
pub use validated_json::ValidatedJson;

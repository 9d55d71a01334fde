//! # Data Transfer Objects
//!
//! 클라이언트와 주고받는 입력 계약을 정의합니다.
//! 각 필드의 검증 규칙은 `validator` derive 속성으로 선언하며,
//! 실제 평가는 [`ValidatedJson`](crate::extractors::ValidatedJson) 추출자가
//! 핸들러 로직 실행 전에 수행합니다.
//!
//! ## 검증 실패 응답
//!
//! ```json
//! {
//!   "error": "validation_error",
//!   "message": "입력 데이터가 유효하지 않습니다",
//!   "details": {
//!     "token": ["재설정 토큰이 필요합니다"]
//!   }
//! }
//! ```

pub mod auth;
pub mod roles;

pub use auth::*;
pub use roles::*;

//! # 비밀번호 재설정 요청 DTO
//!
//! 이전에 발급된 재설정 토큰과 새 비밀번호를 받는 입력 계약입니다.
//! 토큰 검증과 저장은 서비스 계층의 책임이며, 이 모듈은 구조적 검증만 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 토큰 (`token`)
//! - 필수, 빈 문자열 불가
//! - 이전 재설정 요청과 연결되는 불투명 식별자
//!
//! ### 새 비밀번호 (`newPassword`)
//! - 필수, 최소 8자
//! - 강도 검사(대소문자, 숫자 조합 등)는 이 DTO 에서 수행하지 않음
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "token": "uuid-reset-token",
//!   "newPassword": "NewSecurePassword123!"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// API 문서용 예제 토큰
pub const EXAMPLE_RESET_TOKEN: &str = "uuid-reset-token";

/// API 문서용 예제 비밀번호
pub const EXAMPLE_NEW_PASSWORD: &str = "NewSecurePassword123!";

/// 새 비밀번호 최소 길이
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// 비밀번호 재설정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    /// 재설정 토큰
    #[validate(length(min = 1, message = "재설정 토큰이 필요합니다"))]
    pub token: String,

    /// 새 비밀번호 (최소 8자)
    #[validate(length(min = MIN_PASSWORD_LENGTH, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub new_password: String,
}

impl ResetPasswordRequest {
    /// 문서에 표기되는 예제 요청
    pub fn example() -> Self {
        Self {
            token: EXAMPLE_RESET_TOKEN.to_string(),
            new_password: EXAMPLE_NEW_PASSWORD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(token: &str, new_password: &str) -> ResetPasswordRequest {
        ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        }
    }

    #[test]
    fn test_empty_token_and_short_password_fail() {
        let errors = request("", "abc").validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("token"));
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("t1", "longenough1").validate().is_ok());
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(request("t1", "1234567").validate().is_err());
        assert!(request("t1", "12345678").validate().is_ok());

        let min = MIN_PASSWORD_LENGTH as usize;
        assert!(request("t1", &"x".repeat(min - 1)).validate().is_err());
        assert!(request("t1", &"x".repeat(min)).validate().is_ok());

        // 길이는 바이트가 아니라 문자 수 기준
        assert!(request("t1", "비밀번호여덟글자").validate().is_ok());
    }

    #[test]
    fn test_example_is_valid() {
        let example = ResetPasswordRequest::example();

        assert!(example.validate().is_ok());
        assert!(example.new_password.chars().count() as u64 >= MIN_PASSWORD_LENGTH);
    }

    #[test]
    fn test_uses_camel_case_wire_names() {
        let parsed: ResetPasswordRequest = serde_json::from_value(json!({
            "token": "uuid-reset-token",
            "newPassword": "NewSecurePassword123!"
        }))
        .unwrap();
        assert_eq!(parsed.new_password, EXAMPLE_NEW_PASSWORD);

        let missing = serde_json::from_value::<ResetPasswordRequest>(json!({
            "token": "uuid-reset-token"
        }));
        assert!(missing.is_err());
    }
}

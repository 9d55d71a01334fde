//! 역할 수정 요청 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

/// `name` 필드의 API 문서 설명
pub const NAME_DESCRIPTION: &str = "New name of the role.";

/// 역할 이름 변경 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleUpdateRequest {
    /// New name of the role.
    #[validate(length(min = 1, message = "역할 이름이 필요합니다"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_fails() {
        let errors = RoleUpdateRequest { name: String::new() }.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_name_passes() {
        let request = RoleUpdateRequest { name: "Admin".to_string() };

        assert!(request.validate().is_ok());
    }
}

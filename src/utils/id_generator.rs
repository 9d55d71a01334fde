//! 식별자 생성기
//!
//! 요청 ID 등 고유 식별자 생성을 trait 뒤로 감춰서
//! 테스트에서 결정적인 값으로 교체할 수 있게 합니다.

use uuid::Uuid;

/// [`FixedIdGenerator::v4`] 가 항상 반환하는 값
pub const MOCK_UUID_V4: &str = "00000000-0000-4000-8000-000000000000";

/// [`FixedIdGenerator::v7`] 가 항상 반환하는 값
pub const MOCK_UUID_V7: &str = "00000000-0000-7000-8000-000000000000";

/// 고유 식별자 생성 capability
pub trait IdGenerator: Send + Sync {
    /// 무작위 식별자 (UUID v4 형식)
    fn v4(&self) -> String;

    /// 시간 순서 정렬 가능한 식별자 (UUID v7 형식)
    fn v7(&self) -> String;
}

/// `uuid` 크레이트 기반의 운영용 생성기
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn v4(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn v7(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// 테스트 더블: 매 호출마다 같은 고정 문자열을 반환합니다.
///
/// 원래 비결정적인 식별자 생성을 재현 가능하게 만듭니다.
///
/// ```rust
/// use request_context_backend::utils::id_generator::{FixedIdGenerator, IdGenerator, MOCK_UUID_V4};
///
/// let generator = FixedIdGenerator::default();
/// assert_eq!(generator.v4(), MOCK_UUID_V4);
/// assert_eq!(generator.v4(), generator.v4());
/// ```
#[derive(Debug, Clone)]
pub struct FixedIdGenerator {
    v4: String,
    v7: String,
}

impl FixedIdGenerator {
    /// 반환할 값을 직접 지정합니다.
    pub fn new(v4: impl Into<String>, v7: impl Into<String>) -> Self {
        Self {
            v4: v4.into(),
            v7: v7.into(),
        }
    }
}

impl Default for FixedIdGenerator {
    fn default() -> Self {
        Self::new(MOCK_UUID_V4, MOCK_UUID_V7)
    }
}

impl IdGenerator for FixedIdGenerator {
    fn v4(&self) -> String {
        self.v4.clone()
    }

    fn v7(&self) -> String {
        self.v7.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_produces_versioned_ids() {
        let generator = UuidGenerator;

        let v4 = Uuid::parse_str(&generator.v4()).unwrap();
        let v7 = Uuid::parse_str(&generator.v7()).unwrap();

        assert_eq!(v4.get_version_num(), 4);
        assert_eq!(v7.get_version_num(), 7);
        assert_ne!(generator.v4(), generator.v4());
    }

    #[test]
    fn test_fixed_generator_is_deterministic() {
        let generator = FixedIdGenerator::default();

        assert_eq!(generator.v4(), MOCK_UUID_V4);
        assert_eq!(generator.v7(), MOCK_UUID_V7);
        assert_eq!(generator.v4(), generator.v4());
        assert_eq!(generator.v7(), generator.v7());
    }

    #[test]
    fn test_fixed_generator_custom_values() {
        let generator = FixedIdGenerator::new("req-1", "req-7");

        assert_eq!(generator.v4(), "req-1");
        assert_eq!(generator.v7(), "req-7");
    }
}

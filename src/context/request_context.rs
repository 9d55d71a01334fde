//! 요청 단위 컨텍스트 값
//!
//! 하나의 인바운드 요청 수명 동안만 유효한 키-값 매핑입니다.
//! 핸들은 `Clone` 이 저렴하며, 같은 요청 안에서 복제된 핸들은
//! 같은 맵을 공유합니다.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::core::errors::{AppResult, ErrorContext};

/// 잘 알려진 컨텍스트 키
pub mod keys {
    /// 요청 추적용 ID
    pub const REQUEST_ID: &str = "request_id";
    /// HTTP 메서드
    pub const HTTP_METHOD: &str = "http_method";
    /// 요청 경로
    pub const PATH: &str = "path";
}

/// 요청 스코프 컨텍스트
///
/// 값은 `serde_json::Value` 로 보관되므로 직렬화 가능한 어떤 타입이든 저장할 수 있습니다.
///
/// ```rust
/// use request_context_backend::context::RequestContext;
///
/// let ctx = RequestContext::new();
/// ctx.insert("tenant", "acme").unwrap();
///
/// let shared = ctx.clone();
/// assert_eq!(shared.get_str("tenant").as_deref(), Some("acme"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    values: Arc<RwLock<HashMap<String, Value>>>,
}

impl RequestContext {
    /// 빈 컨텍스트를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 스냅샷으로부터 컨텍스트를 생성합니다.
    pub fn from_snapshot(values: HashMap<String, Value>) -> Self {
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    // 값은 항상 완전한 상태로만 교체되므로 poison 상태여도 그대로 사용한다
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Value>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Value>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// 키에 해당하는 값을 복제해서 반환합니다.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// 문자열 값을 반환합니다. 문자열이 아니면 `None` 입니다.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.read()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// 값을 지정한 타입으로 역직렬화해서 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장된 값이 `T` 로 변환되지 않는 경우
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.get(key) {
            Some(value) => serde_json::from_value(value)
                .with_context(|| format!("컨텍스트 값 '{}' 변환 실패", key))
                .map(Some),
            None => Ok(None),
        }
    }

    /// 값을 저장하고 이전 값을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 값을 JSON 으로 직렬화할 수 없는 경우
    pub fn insert<V: Serialize>(
        &self,
        key: impl Into<String>,
        value: V,
    ) -> AppResult<Option<Value>> {
        let key = key.into();
        let value = serde_json::to_value(value)
            .with_context(|| format!("컨텍스트 값 '{}' 직렬화 실패", key))?;

        Ok(self.write().insert(key, value))
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.write().remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// 현재 값들의 복사본을 반환합니다.
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.read().clone()
    }

    /// 현재 값으로 시작하는 독립된 컨텍스트를 만듭니다.
    ///
    /// 중첩 실행에 초기값을 넘길 때 사용합니다. 이후 변경은 서로 영향을 주지 않습니다.
    pub fn fork(&self) -> Self {
        Self::from_snapshot(self.snapshot())
    }

    /// 두 핸들이 같은 컨텍스트를 가리키는지 확인합니다.
    pub fn shares_state_with(&self, other: &RequestContext) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }

    /// `request_id` 키의 값
    pub fn request_id(&self) -> Option<String> {
        self.get_str(keys::REQUEST_ID)
    }
}

impl From<HashMap<String, Value>> for RequestContext {
    fn from(values: HashMap<String, Value>) -> Self {
        Self::from_snapshot(values)
    }
}

impl Serialize for RequestContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.read().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Tenant {
        id: u32,
        name: String,
    }

    #[test]
    fn test_new_context_is_empty() {
        let ctx = RequestContext::new();

        assert!(ctx.is_empty());
        assert_eq!(ctx.len(), 0);
        assert_eq!(ctx.get("anything"), None);
        assert_eq!(ctx.request_id(), None);
    }

    #[test]
    fn test_insert_and_typed_read() {
        let ctx = RequestContext::new();
        let tenant = Tenant {
            id: 3,
            name: "acme".to_string(),
        };

        assert_eq!(ctx.insert("tenant", &tenant).unwrap(), None);
        assert_eq!(ctx.get_as::<Tenant>("tenant").unwrap(), Some(tenant));
        assert_eq!(ctx.get_as::<Tenant>("missing").unwrap(), None);
    }

    #[test]
    fn test_typed_read_mismatch_is_internal_error() {
        let ctx = RequestContext::new();
        ctx.insert("tenant", "not-a-struct").unwrap();

        let result = ctx.get_as::<Tenant>("tenant");
        assert!(matches!(result, Err(crate::core::errors::AppError::InternalError(_))));
    }

    #[test]
    fn test_insert_returns_previous_value() {
        let ctx = RequestContext::new();
        ctx.insert("locale", "ko-KR").unwrap();

        let previous = ctx.insert("locale", "en-US").unwrap();
        assert_eq!(previous, Some(json!("ko-KR")));
        assert_eq!(ctx.get_str("locale").as_deref(), Some("en-US"));
    }

    #[test]
    fn test_clones_share_state_but_forks_do_not() {
        let ctx = RequestContext::new();
        let clone = ctx.clone();
        let fork = ctx.fork();

        ctx.insert("user_id", "u-1").unwrap();

        assert!(clone.shares_state_with(&ctx));
        assert_eq!(clone.get_str("user_id").as_deref(), Some("u-1"));
        assert!(!fork.shares_state_with(&ctx));
        assert!(!fork.contains_key("user_id"));
    }

    #[test]
    fn test_remove_and_snapshot() {
        let mut initial = HashMap::new();
        initial.insert(keys::REQUEST_ID.to_string(), json!("req-1"));
        initial.insert("trace".to_string(), json!(42));
        let ctx = RequestContext::from(initial);

        assert_eq!(ctx.request_id().as_deref(), Some("req-1"));
        assert_eq!(ctx.remove("trace"), Some(json!(42)));

        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains_key(keys::REQUEST_ID));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let ctx = RequestContext::new();
        ctx.insert("tenant", "acme").unwrap();

        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value, json!({ "tenant": "acme" }));
    }
}

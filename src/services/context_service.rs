//! 요청 컨텍스트 조회 서비스
//!
//! 핸들러로부터 아무 파라미터도 받지 않고 활성 컨텍스트를 읽습니다.
//! 서비스 계층 깊은 곳에서 요청 스코프 값을 사용하는 방식의 기준 구현입니다.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::context::propagator;

/// 현재 요청 컨텍스트의 스냅샷 응답
#[derive(Debug, Clone, Serialize)]
pub struct ContextSnapshot {
    pub request_id: Option<String>,
    pub values: HashMap<String, Value>,
}

/// 요청 컨텍스트 서비스
pub struct ContextService;

impl ContextService {
    /// 활성 컨텍스트의 스냅샷. 요청 처리 구간 밖에서는 `None`.
    pub fn snapshot() -> Option<ContextSnapshot> {
        propagator::with_current(|ctx| ContextSnapshot {
            request_id: ctx.request_id(),
            values: ctx.snapshot(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{keys, RequestContext};

    #[test]
    fn test_snapshot_outside_request_is_none() {
        assert!(ContextService::snapshot().is_none());
    }

    #[actix_web::test]
    async fn test_snapshot_reads_ambient_context() {
        let ctx = RequestContext::new();
        ctx.insert(keys::REQUEST_ID, "req-9").unwrap();
        ctx.insert("tenant", "acme").unwrap();

        let snapshot = propagator::run(ctx, async {
            tokio::task::yield_now().await;
            ContextService::snapshot()
        })
        .await
        .unwrap();

        assert_eq!(snapshot.request_id.as_deref(), Some("req-9"));
        assert_eq!(snapshot.values.get("tenant"), Some(&Value::from("acme")));
    }
}

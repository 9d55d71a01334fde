//! 요청 컨텍스트 전파기
//!
//! 요청 하나를 처리하는 호출 체인 전체에서 [`RequestContext`] 를
//! 파라미터 전달 없이 조회할 수 있게 합니다.
//!
//! 바인딩은 모듈 전역 변수가 아니라 tokio task-local 슬롯에 저장됩니다.
//! 스코프가 걸린 future 는 poll 될 때마다 자신의 값을 슬롯에 넣고
//! poll 이 끝나면 이전 값을 되돌려 놓으므로,
//! 같은 워커에서 번갈아 실행되는 동시 요청들이 서로의 컨텍스트를 보지 못합니다.
//!
//! # 중첩
//!
//! `run` 안에서 다시 `run` 을 호출하면 새 바인딩이 생기고,
//! 안쪽 실행이 끝나면 바깥 바인딩이 다시 활성화됩니다 (LIFO).
//!
//! ```rust
//! use request_context_backend::context::{propagator, RequestContext};
//!
//! let outer = RequestContext::new();
//! outer.insert("level", "outer").unwrap();
//!
//! propagator::run_sync(outer, || {
//!     let inner = RequestContext::new();
//!     inner.insert("level", "inner").unwrap();
//!
//!     propagator::run_sync(inner, || {
//!         let level = propagator::current().and_then(|ctx| ctx.get_str("level"));
//!         assert_eq!(level.as_deref(), Some("inner"));
//!     });
//!
//!     let level = propagator::current().and_then(|ctx| ctx.get_str("level"));
//!     assert_eq!(level.as_deref(), Some("outer"));
//! });
//!
//! assert!(propagator::current().is_none());
//! ```

use std::future::Future;

use tokio::task::JoinHandle;

use super::request_context::RequestContext;

tokio::task_local! {
    static CURRENT_CONTEXT: RequestContext;
}

/// `context` 를 `future` 실행 구간의 활성 컨텍스트로 지정하고 결과를 그대로 반환합니다.
///
/// future 가 완료되거나, panic 하거나, drop 되면 바인딩은 해제됩니다.
/// `Err` 결과도 변환 없이 전달됩니다.
pub async fn run<F>(context: RequestContext, future: F) -> F::Output
where
    F: Future,
{
    CURRENT_CONTEXT.scope(context, future).await
}

/// 동기 클로저용 [`run`]
pub fn run_sync<F, R>(context: RequestContext, callback: F) -> R
where
    F: FnOnce() -> R,
{
    CURRENT_CONTEXT.sync_scope(context, callback)
}

/// 현재 호출 체인의 활성 컨텍스트
///
/// 어떤 `run` 구간에도 속하지 않으면 `None` 을 반환합니다.
/// 이는 에러가 아니며, 필수 여부는 호출자가 판단합니다.
pub fn current() -> Option<RequestContext> {
    CURRENT_CONTEXT.try_with(RequestContext::clone).ok()
}

/// 활성 컨텍스트를 빌려서 `f` 를 실행합니다. 컨텍스트가 없으면 `None`.
pub fn with_current<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&RequestContext) -> R,
{
    CURRENT_CONTEXT.try_with(f).ok()
}

/// 호출 시점의 활성 컨텍스트 안에서 실행되도록 `future` 를 감쌉니다.
///
/// 요청이 별도 태스크로 넘기는 하위 작업에 사용합니다.
/// 활성 컨텍스트가 없으면 바인딩 없이 실행됩니다.
pub fn bind_current<F>(future: F) -> impl Future<Output = F::Output>
where
    F: Future,
{
    let context = current();

    async move {
        match context {
            Some(context) => CURRENT_CONTEXT.scope(context, future).await,
            None => future.await,
        }
    }
}

/// 현재 컨텍스트를 유지한 채로 로컬 런타임에 하위 태스크를 띄웁니다.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + 'static,
    F::Output: 'static,
{
    actix_web::rt::spawn(bind_current(future))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use futures_util::future::join;
    use std::time::Duration;

    fn context_named(name: &str) -> RequestContext {
        let ctx = RequestContext::new();
        ctx.insert("name", name).unwrap();
        ctx
    }

    fn current_name() -> Option<String> {
        current().and_then(|ctx| ctx.get_str("name"))
    }

    #[test]
    fn test_current_outside_run_is_none() {
        assert!(current().is_none());
        assert_eq!(with_current(|ctx| ctx.len()), None);
    }

    #[actix_web::test]
    async fn test_run_binds_for_the_whole_future() {
        let name = run(context_named("a"), async {
            let before = current_name();
            tokio::task::yield_now().await;
            tokio::time::sleep(Duration::from_millis(5)).await;
            let after = current_name();
            (before, after)
        })
        .await;

        assert_eq!(name, (Some("a".to_string()), Some("a".to_string())));
        assert!(current().is_none());
    }

    #[actix_web::test]
    async fn test_concurrent_runs_are_isolated() {
        async fn observe() -> Vec<Option<String>> {
            let mut seen = Vec::new();
            for _ in 0..5 {
                seen.push(current_name());
                tokio::task::yield_now().await;
            }
            seen.push(current_name());
            seen
        }

        let (a, b) = join(
            run(context_named("A"), observe()),
            run(context_named("B"), observe()),
        )
        .await;

        assert!(a.iter().all(|n| n.as_deref() == Some("A")));
        assert!(b.iter().all(|n| n.as_deref() == Some("B")));
    }

    #[actix_web::test]
    async fn test_nested_runs_restore_outer_binding() {
        let (inner, outer_after) = run(context_named("v1"), async {
            let inner = run(context_named("v2"), async {
                tokio::task::yield_now().await;
                current_name()
            })
            .await;
            (inner, current_name())
        })
        .await;

        assert_eq!(inner.as_deref(), Some("v2"));
        assert_eq!(outer_after.as_deref(), Some("v1"));
        assert!(current().is_none());
    }

    #[test]
    fn test_nested_sync_runs_are_lifo() {
        run_sync(context_named("v1"), || {
            let inner = run_sync(context_named("v2"), current_name);
            assert_eq!(inner.as_deref(), Some("v2"));
            assert_eq!(current_name().as_deref(), Some("v1"));
        });

        assert!(current().is_none());
    }

    #[actix_web::test]
    async fn test_failure_propagates_and_leaves_nothing_bound() {
        let result: Result<(), AppError> = run(context_named("broken"), async {
            tokio::task::yield_now().await;
            Err(AppError::InternalError("downstream failed".to_string()))
        })
        .await;

        match result {
            Err(AppError::InternalError(msg)) => assert_eq!(msg, "downstream failed"),
            other => panic!("Expected InternalError, got {:?}", other),
        }
        assert!(current().is_none());

        let next = run(context_named("fresh"), async { current_name() }).await;
        assert_eq!(next.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_panicking_callback_unbinds() {
        let outcome = std::panic::catch_unwind(|| {
            run_sync(context_named("panics"), || panic!("boom"))
        });

        assert!(outcome.is_err());
        assert!(current().is_none());
    }

    #[actix_web::test]
    async fn test_mutations_are_visible_within_the_same_extent() {
        let seen = run(RequestContext::new(), async {
            if let Some(ctx) = current() {
                ctx.insert("user_id", "u-42").unwrap();
            }
            tokio::task::yield_now().await;
            current().and_then(|ctx| ctx.get_str("user_id"))
        })
        .await;

        assert_eq!(seen.as_deref(), Some("u-42"));
    }

    #[actix_web::test]
    async fn test_spawned_subtask_inherits_context() {
        let from_task = run(context_named("parent"), async {
            spawn(async {
                tokio::task::yield_now().await;
                current_name()
            })
            .await
            .unwrap()
        })
        .await;

        assert_eq!(from_task.as_deref(), Some("parent"));
    }

    #[actix_web::test]
    async fn test_bind_current_without_context_runs_unbound() {
        let seen = bind_current(async { current_name() }).await;

        assert_eq!(seen, None);
    }

    #[actix_web::test]
    async fn test_plain_spawn_does_not_leak_context() {
        let leaked = run(context_named("private"), async {
            actix_web::rt::spawn(async { current_name() }).await.unwrap()
        })
        .await;

        assert_eq!(leaked, None);
    }
}

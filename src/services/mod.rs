//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 요청 스코프 값을 파라미터로 받지 않고
//! [`propagator`](crate::context::propagator) 를 통해 직접 조회합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::ContextService;
//!
//! if let Some(snapshot) = ContextService::snapshot() {
//!     log::info!("request_id={:?}", snapshot.request_id);
//! }
//! ```

pub mod context_service;

pub use context_service::{ContextService, ContextSnapshot};

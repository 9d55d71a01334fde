//! 요청 컨텍스트 백엔드
//!
//! Actix-web 기반 백엔드에서 요청 단위 컨텍스트를 전파하고,
//! 입력 DTO 를 선언적 규칙으로 검증하는 구성 요소를 제공합니다.
//!
//! # Features
//!
//! - **컨텍스트 전파**: 요청 하나의 비동기 처리 구간 전체에서 파라미터 없이 컨텍스트 조회
//! - **격리**: 동시에 처리되는 요청들은 서로의 컨텍스트를 보지 못함
//! - **LIFO 중첩**: 내부 하위 작업용 중첩 바인딩 지원
//! - **DTO 검증**: `validator` 기반 비밀번호 재설정 / 역할 수정 요청 스키마
//! - **테스트 더블**: 결정적인 식별자 생성기
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │ RequestContextMiddleware │ ← 요청마다 컨텍스트 생성 + 바인딩
//! └──────────────────────────┘
//!              │
//!              ▼
//! ┌──────────────────────────┐
//! │  Extractors / Handlers   │ ← ValidatedJson, CurrentContext
//! └──────────────────────────┘
//!              │
//!              ▼
//! ┌──────────────────────────┐
//! │         Services         │ ← propagator::current()
//! └──────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use request_context_backend::context::propagator;
//!
//! // 서비스 계층 어디에서든
//! if let Some(ctx) = propagator::current() {
//!     log::info!("request_id={:?}", ctx.request_id());
//! }
//! ```

pub mod core;
pub mod config;
pub mod context;
pub mod domain;
pub mod extractors;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

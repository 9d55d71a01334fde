//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 요청 컨텍스트 미들웨어 (RequestContextMiddleware)
//! - 요청마다 새 [`RequestContext`](crate::context::RequestContext) 생성
//! - 나머지 파이프라인을 컨텍스트 바인딩 안에서 실행
//! - 요청 ID 응답 헤더 반영 (선택)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{middleware, App, HttpServer};
//! use crate::config::RequestContextConfig;
//! use crate::middlewares::RequestContextMiddleware;
//!
//! let config = RequestContextConfig::from_env();
//!
//! HttpServer::new(move || {
//!     App::new()
//!         // 마지막에 등록한 미들웨어가 가장 먼저 실행된다
//!         .wrap(RequestContextMiddleware::from_config(&config))
//!         // 응답 헤더의 요청 ID 를 로그에 남기려면 Logger 가 더 바깥에 있어야 한다
//!         .wrap(middleware::Logger::new("%r %s %{x-request-id}o"))
//!         .service(/* 라우트들 */)
//! })
//! ```

pub mod request_context_middleware;
mod request_context_inner;

// 미들웨어 재export
pub use request_context_middleware::RequestContextMiddleware;

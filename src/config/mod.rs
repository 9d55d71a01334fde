//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩 설정
//! - [`context_config`] - 요청 컨텍스트 초기화 및 요청 ID 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, RequestContextConfig, ServerConfig};
//!
//! let env = Environment::current();
//! let bind = ServerConfig::bind_address();
//! let context = RequestContextConfig::from_env();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! export REQUEST_CONTEXT_INITIALIZER="request"   # empty, request
//! export REQUEST_ID_HEADER="x-request-id"
//! export REQUEST_ID_FORMAT="v7"
//! ```

pub mod data_config;
pub mod context_config;

pub use data_config::*;
pub use context_config::*;

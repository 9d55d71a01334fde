//! # Request Context Module
//!
//! 요청 하나의 처리 구간 동안 암묵적으로 조회 가능한 컨텍스트를 제공합니다.
//! 인증 주체, 테넌트, 추적 ID, 로케일처럼 깊은 비즈니스 로직에서 필요한 값을
//! 모든 함수 시그니처에 파라미터로 전달하지 않고 사용할 수 있습니다.
//!
//! ## 모듈 구성
//!
//! - [`request_context`] - 요청 스코프 키-값 컨텍스트 ([`RequestContext`])
//! - [`propagator`] - task-local 기반 바인딩 (`run`, `current`, `spawn`)
//! - [`initializer`] - 요청마다 초기 컨텍스트를 만드는 전략
//!
//! ## 처리 흐름
//!
//! ```text
//! 요청 도착
//!    │
//!    ▼
//! RequestContextMiddleware ── ContextInitializer::initialize()
//!    │
//!    ▼
//! propagator::run(ctx, 나머지 파이프라인)
//!    │   ├── Handlers   → propagator::current()
//!    │   └── Services   → propagator::current()
//!    ▼
//! 완료/실패 시 바인딩 자동 해제
//! ```

pub mod initializer;
pub mod propagator;
pub mod request_context;

pub use initializer::{ContextInitializer, EmptyContextInitializer, RequestIdInitializer};
pub use request_context::{keys, RequestContext};

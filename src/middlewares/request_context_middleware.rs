//! 요청 컨텍스트 미들웨어
//!
//! 요청 처리 파이프라인의 첫 단계로서 요청마다 새 컨텍스트를 만들고,
//! 나머지 파이프라인 전체를 그 컨텍스트 바인딩 안에서 실행합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::HeaderName,
    Error, Result,
};
use crate::config::RequestContextConfig;
use crate::context::initializer::{self, ContextInitializer, EmptyContextInitializer};
use crate::middlewares::request_context_inner::RequestContextMiddlewareService;

/// 요청 컨텍스트 미들웨어
///
/// 애플리케이션 미들웨어와 라우트 전체를 감싸도록 등록합니다.
/// 요청 ID 헤더를 기록하는 `Logger` 와 경로를 정리하는 `NormalizePath` 는 이보다 바깥에 둡니다.
#[derive(Clone)]
pub struct RequestContextMiddleware {
    /// 초기 컨텍스트 생성 전략
    initializer: Arc<dyn ContextInitializer>,
    /// 요청 ID 를 되돌려 줄 응답 헤더 (선택사항)
    echo_header: Option<HeaderName>,
}

impl RequestContextMiddleware {
    /// 빈 컨텍스트를 바인딩하는 미들웨어 생성
    pub fn new() -> Self {
        Self::with_initializer(EmptyContextInitializer)
    }

    /// 초기화 전략을 지정해서 생성
    pub fn with_initializer<I>(initializer: I) -> Self
    where
        I: ContextInitializer + 'static,
    {
        Self::from_shared(Arc::new(initializer))
    }

    /// 공유된 초기화 전략으로 생성
    pub fn from_shared(initializer: Arc<dyn ContextInitializer>) -> Self {
        Self {
            initializer,
            echo_header: None,
        }
    }

    /// 설정으로부터 생성
    pub fn from_config(config: &RequestContextConfig) -> Self {
        let middleware = Self::from_shared(initializer::from_config(config));

        if config.echo_request_id {
            middleware.echo_request_id(config.request_id_header.clone())
        } else {
            middleware
        }
    }

    /// 컨텍스트의 `request_id` 를 지정한 응답 헤더로 내보냅니다.
    pub fn echo_request_id(mut self, header: HeaderName) -> Self {
        self.echo_header = Some(header);
        self
    }
}

impl Default for RequestContextMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RequestContextMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestContextMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestContextMiddlewareService {
            service: Rc::new(service),
            initializer: self.initializer.clone(),
            echo_header: self.echo_header.clone(),
        }))
    }
}

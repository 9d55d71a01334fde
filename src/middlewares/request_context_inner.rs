//! RequestContextMiddleware 의 요청 처리 로직
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::context::{propagator, ContextInitializer};

/// 실제 컨텍스트 바인딩을 수행하는 서비스
pub struct RequestContextMiddlewareService<S> {
    pub service: Rc<S>,
    pub initializer: Arc<dyn ContextInitializer>,
    pub echo_header: Option<HeaderName>,
}

impl<S, B> Service<ServiceRequest> for RequestContextMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let echo_header = self.echo_header.clone();

        let context = self.initializer.initialize(&req);
        req.extensions_mut().insert(context.clone());

        let request_id = context.request_id();

        Box::pin(propagator::run(context, async move {
            log::debug!(
                "요청 컨텍스트 바인딩: {} {} (request_id={})",
                req.method(),
                req.path(),
                request_id.as_deref().unwrap_or("-")
            );

            // 다음 서비스 호출 자체도 바인딩 안에서 수행해야 하위 미들웨어가 컨텍스트를 본다
            let result = service.call(req).await;

            match &result {
                Ok(res) => log::debug!(
                    "요청 컨텍스트 해제: status={} (request_id={})",
                    res.status(),
                    request_id.as_deref().unwrap_or("-")
                ),
                Err(err) => log::debug!(
                    "요청 컨텍스트 해제: 처리 실패 {} (request_id={})",
                    err,
                    request_id.as_deref().unwrap_or("-")
                ),
            }

            let mut res = result?;

            if let (Some(header), Some(id)) = (echo_header, request_id) {
                match HeaderValue::from_str(&id) {
                    Ok(value) => {
                        res.headers_mut().insert(header, value);
                    }
                    Err(e) => log::warn!("요청 ID 를 헤더로 변환할 수 없습니다: {}", e),
                }
            }

            Ok::<_, Error>(res)
        }))
    }
}

//! 요청 컨텍스트 추출자
use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};

use crate::context::{propagator, RequestContext};
use crate::core::errors::AppError;

/// 현재 요청의 컨텍스트
///
/// 핸들러 시그니처에서 명시적으로 받고 싶을 때 사용합니다.
/// 활성 바인딩을 우선 사용하고, 없으면 request extension 을 확인합니다.
/// 둘 다 없으면 미들웨어가 설치되지 않은 것이므로 500 에러입니다.
#[derive(Debug, Clone)]
pub struct CurrentContext(pub RequestContext);

impl CurrentContext {
    pub fn into_inner(self) -> RequestContext {
        self.0
    }
}

fn lookup(req: &HttpRequest) -> Option<RequestContext> {
    propagator::current().or_else(|| req.extensions().get::<RequestContext>().cloned())
}

impl FromRequest for CurrentContext {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match lookup(req) {
            Some(context) => ready(Ok(CurrentContext(context))),
            None => ready(Err(AppError::InternalError(
                "요청 컨텍스트 미들웨어가 설치되지 않았습니다".to_string(),
            )
            .into())),
        }
    }
}

/// 선택적 컨텍스트 추출자
#[derive(Debug, Clone)]
pub struct OptionalContext(pub Option<RequestContext>);

impl FromRequest for OptionalContext {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(OptionalContext(lookup(req))))
    }
}

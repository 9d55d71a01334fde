//! 초기 컨텍스트 생성기
//!
//! 미들웨어가 요청마다 바인딩할 초기 [`RequestContext`] 를 결정합니다.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::dev::ServiceRequest;
use actix_web::http::header::HeaderName;
use serde_json::Value;

use super::request_context::{keys, RequestContext};
use crate::config::{InitializerKind, RequestContextConfig, RequestIdFormat};
use crate::utils::id_generator::{IdGenerator, UuidGenerator};

/// 인바운드 요청 ID 로 허용하는 최대 길이
pub const MAX_INCOMING_REQUEST_ID_LEN: usize = 128;

/// 요청에서 초기 컨텍스트를 만드는 전략
pub trait ContextInitializer: Send + Sync {
    fn initialize(&self, req: &ServiceRequest) -> RequestContext;
}

/// 항상 빈 컨텍스트를 바인딩합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContextInitializer;

impl ContextInitializer for EmptyContextInitializer {
    fn initialize(&self, _req: &ServiceRequest) -> RequestContext {
        RequestContext::new()
    }
}

/// 요청 ID, HTTP 메서드, 경로를 채운 컨텍스트를 바인딩합니다.
///
/// 요청 ID 는 신뢰 설정이 켜져 있고 형식이 올바르면 인바운드 헤더 값을,
/// 그렇지 않으면 생성기로 새로 만든 값을 사용합니다.
///
/// 경로는 미들웨어가 받은 시점의 값이므로 `NormalizePath` 를 컨텍스트 미들웨어 바깥에 둬야
/// 라우팅에 쓰이는 정규화된 경로가 기록됩니다.
pub struct RequestIdInitializer {
    header: HeaderName,
    trust_incoming: bool,
    format: RequestIdFormat,
    generator: Arc<dyn IdGenerator>,
}

impl RequestIdInitializer {
    pub fn new(header: HeaderName, generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            header,
            trust_incoming: true,
            format: RequestIdFormat::V4,
            generator,
        }
    }

    pub fn trust_incoming(mut self, trust: bool) -> Self {
        self.trust_incoming = trust;
        self
    }

    pub fn format(mut self, format: RequestIdFormat) -> Self {
        self.format = format;
        self
    }

    fn incoming_id(&self, req: &ServiceRequest) -> Option<String> {
        if !self.trust_incoming {
            return None;
        }

        req.headers()
            .get(&self.header)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| is_acceptable_request_id(id))
            .map(str::to_string)
    }

    fn generate_id(&self) -> String {
        match self.format {
            RequestIdFormat::V4 => self.generator.v4(),
            RequestIdFormat::V7 => self.generator.v7(),
        }
    }
}

impl ContextInitializer for RequestIdInitializer {
    fn initialize(&self, req: &ServiceRequest) -> RequestContext {
        let request_id = self
            .incoming_id(req)
            .unwrap_or_else(|| self.generate_id());

        RequestContext::from_snapshot(HashMap::from([
            (keys::REQUEST_ID.to_string(), Value::String(request_id)),
            (keys::HTTP_METHOD.to_string(), Value::String(req.method().to_string())),
            (keys::PATH.to_string(), Value::String(req.path().to_string())),
        ]))
    }
}

/// 비어있지 않고, 길이 제한 이내이며, 출력 가능한 ASCII 로만 이루어진 값만 허용
pub fn is_acceptable_request_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_INCOMING_REQUEST_ID_LEN
        && id.bytes().all(|b| b.is_ascii_graphic())
}

/// 설정에 맞는 초기화 전략을 만듭니다.
pub fn from_config(config: &RequestContextConfig) -> Arc<dyn ContextInitializer> {
    match config.initializer {
        InitializerKind::Empty => Arc::new(EmptyContextInitializer),
        InitializerKind::Request => Arc::new(
            RequestIdInitializer::new(config.request_id_header.clone(), Arc::new(UuidGenerator))
                .trust_incoming(config.trust_incoming)
                .format(config.id_format),
        ),
    }
}

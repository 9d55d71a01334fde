//! 요청 컨텍스트 설정
//!
//! 요청마다 바인딩되는 초기 컨텍스트를 어떻게 만들지 결정합니다.
//!
//! # Environment Variables
//!
//! | 변수 | 값 | 기본값 |
//! |------|----|--------|
//! | `REQUEST_CONTEXT_INITIALIZER` | `empty` / `request` | `request` |
//! | `REQUEST_ID_HEADER` | HTTP 헤더 이름 | `x-request-id` |
//! | `REQUEST_ID_TRUST_INCOMING` | `true` / `false` | `true` |
//! | `REQUEST_ID_FORMAT` | `v4` / `v7` | `v4` |
//! | `REQUEST_ID_ECHO` | `true` / `false` | `true` |

use std::env;

use actix_web::http::header::HeaderName;
use log::error;

/// 기본 요청 ID 헤더
pub const DEFAULT_REQUEST_ID_HEADER: &str = "x-request-id";

/// 초기 컨텍스트 생성 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitializerKind {
    /// 항상 빈 컨텍스트
    Empty,
    /// 인바운드 요청에서 요청 ID, 메서드, 경로를 채움
    Request,
}

/// 생성되는 요청 ID 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestIdFormat {
    /// 무작위 UUID
    V4,
    /// 시간 순서 UUID
    V7,
}

/// 요청 컨텍스트 미들웨어 설정
#[derive(Debug, Clone)]
pub struct RequestContextConfig {
    pub initializer: InitializerKind,
    pub request_id_header: HeaderName,
    pub trust_incoming: bool,
    pub id_format: RequestIdFormat,
    pub echo_request_id: bool,
}

impl Default for RequestContextConfig {
    fn default() -> Self {
        Self {
            initializer: InitializerKind::Request,
            request_id_header: HeaderName::from_static(DEFAULT_REQUEST_ID_HEADER),
            trust_incoming: true,
            id_format: RequestIdFormat::V4,
            echo_request_id: true,
        }
    }
}

impl RequestContextConfig {
    /// 환경변수에서 설정을 로드합니다.
    ///
    /// 해석할 수 없는 값은 에러 로그를 남기고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            initializer: read_var("REQUEST_CONTEXT_INITIALIZER", parse_initializer_kind)
                .unwrap_or(defaults.initializer),
            request_id_header: read_var("REQUEST_ID_HEADER", parse_header_name)
                .unwrap_or(defaults.request_id_header),
            trust_incoming: read_var("REQUEST_ID_TRUST_INCOMING", parse_bool)
                .unwrap_or(defaults.trust_incoming),
            id_format: read_var("REQUEST_ID_FORMAT", parse_id_format)
                .unwrap_or(defaults.id_format),
            echo_request_id: read_var("REQUEST_ID_ECHO", parse_bool)
                .unwrap_or(defaults.echo_request_id),
        }
    }
}

fn read_var<T>(name: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let raw = env::var(name).ok()?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        error!("{} 파싱 실패: '{}'. 기본값 사용", name, raw);
    }
    parsed
}

pub fn parse_initializer_kind(raw: &str) -> Option<InitializerKind> {
    match raw.trim().to_lowercase().as_str() {
        "empty" | "none" => Some(InitializerKind::Empty),
        "request" | "request_id" => Some(InitializerKind::Request),
        _ => None,
    }
}

pub fn parse_id_format(raw: &str) -> Option<RequestIdFormat> {
    match raw.trim().to_lowercase().as_str() {
        "v4" | "uuid4" => Some(RequestIdFormat::V4),
        "v7" | "uuid7" => Some(RequestIdFormat::V7),
        _ => None,
    }
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn parse_header_name(raw: &str) -> Option<HeaderName> {
    HeaderName::from_bytes(raw.trim().as_bytes()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RequestContextConfig::default();

        assert_eq!(config.initializer, InitializerKind::Request);
        assert_eq!(config.request_id_header.as_str(), DEFAULT_REQUEST_ID_HEADER);
        assert!(config.trust_incoming);
        assert_eq!(config.id_format, RequestIdFormat::V4);
        assert!(config.echo_request_id);
    }

    #[test]
    fn test_parse_initializer_kind() {
        assert_eq!(parse_initializer_kind("empty"), Some(InitializerKind::Empty));
        assert_eq!(parse_initializer_kind(" Request "), Some(InitializerKind::Request));
        assert_eq!(parse_initializer_kind("auth"), None);
    }

    #[test]
    fn test_parse_id_format() {
        assert_eq!(parse_id_format("V7"), Some(RequestIdFormat::V7));
        assert_eq!(parse_id_format("v4"), Some(RequestIdFormat::V4));
        assert_eq!(parse_id_format("v1"), None);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_parse_header_name() {
        assert_eq!(
            parse_header_name("X-Correlation-Id").map(|h| h.as_str().to_string()),
            Some("x-correlation-id".to_string())
        );
        assert!(parse_header_name("bad header").is_none());
    }
}

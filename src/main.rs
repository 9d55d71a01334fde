//! 요청 컨텍스트 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고, 모든 요청을
//! 요청 컨텍스트 미들웨어 안에서 처리합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use request_context_backend::config::{Environment, RequestContextConfig, ServerConfig};
use request_context_backend::middlewares::RequestContextMiddleware;
use request_context_backend::routes::configure_all_routes;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 요청 컨텍스트 서비스 시작중...");

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 요청 컨텍스트 미들웨어는 Rate Limiting, CORS, 라우트를 감싸고,
/// 그 바깥에는 경로 정규화와 액세스 로그만 둡니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류, 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Context: http://{}/api/v1/context", bind_address);

    let context_config = RequestContextConfig::from_env();
    info!("🧵 요청 컨텍스트 설정 로드됨: {:?}", context_config);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 올바르지 않습니다 (0 값은 허용되지 않음)",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    // 응답에 실린 요청 ID 를 액세스 로그에 함께 남긴다
    let log_format = format!(
        "%a \"%r\" %s %b %T request_id=%{{{}}}o",
        context_config.request_id_header.as_str()
    );

    HttpServer::new(move || {
        let cors = configure_cors(&context_config);

        // 마지막에 등록 = 가장 먼저 실행
        // Logger 는 컨텍스트 미들웨어가 요청 ID 헤더를 붙인 뒤의 응답을 봐야 하고,
        // 컨텍스트의 path 는 NormalizePath 가 정리한 경로여야 한다
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(RequestContextMiddleware::from_config(&context_config))
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::new(&log_format))

            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr 로 직접 출력
    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 가 없으면 현재 [`Environment`] 의 기본 필터를 사용합니다.
///
/// ```bash
/// # 컨텍스트 바인딩 로그 확인
/// RUST_LOG=request_context_backend::middlewares=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
    info!("Current environment: {:?}", environment);
}

/// CORS 설정을 구성합니다
///
/// 요청 ID 헤더는 클라이언트가 보낼 수 있고, 응답에서도 읽을 수 있도록 노출합니다.
fn configure_cors(context_config: &RequestContextConfig) -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            context_config.request_id_header.clone(),
        ])
        .expose_headers(vec![context_config.request_id_header.clone()])
        .supports_credentials()
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}

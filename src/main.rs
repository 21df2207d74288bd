//! 비밀번호 재설정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 Identity Backend 연결을 초기화합니다.

use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::info;
use password_reset_service::config::{load_env_file, ServerConfig};
use password_reset_service::middlewares::configure_cors;
use password_reset_service::repositories::identity::build_identity_backend;
use password_reset_service::routes::configure_all_routes;
use password_reset_service::services::password_reset::PasswordResetService;
use password_reset_service::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 로깅을 먼저 초기화해야 .env 로드 결과가 기록됨
    init_logging();
    load_env_file();

    info!("🚀 비밀번호 재설정 서비스 시작중...");

    let identity_backend = build_identity_backend();
    let backend_status = if identity_backend.is_configured() {
        format!("{} (configured)", identity_backend.name())
    } else {
        "unconfigured - every reset will fail".to_string()
    };

    let service = web::Data::new(PasswordResetService::new(identity_backend));

    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();
    print_startup_summary(&bind_address, workers, &backend_status);

    start_http_server(service, &bind_address, workers).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    service: web::Data<PasswordResetService>,
    bind_address: &str,
    workers: usize,
) -> std::io::Result<()> {
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Reset endpoint: http://{}/set-user-password", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 `RUST_LOG`를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 `info,actix_web=info`입니다.
///
/// ```bash
/// # 단계별 실패 원인까지 확인
/// RUST_LOG=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

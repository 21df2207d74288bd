//! # Route Configuration
//!
//! 애플리케이션의 모든 HTTP 라우트를 등록합니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/set-user-password` | [`handlers::password_reset::set_user_password`] |
//! | `OPTIONS` | `/set-user-password` | [`handlers::password_reset::preflight`] |
//!
//! 재설정 라우트는 `/functions/v1/set-user-password`에도 동일하게 등록됩니다.

use actix_web::http::Method;
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::handlers;
use crate::repositories::identity::IdentityBackend;
use crate::services::password_reset::PasswordResetService;

/// 비밀번호 재설정 엔드포인트 경로
pub const RESET_PATHS: [&str; 2] = ["/set-user-password", "/functions/v1/set-user-password"];

/// 모든 라우트를 설정합니다
///
/// `PasswordResetService`는 호출하는 쪽에서 `web::Data`로 등록해야 합니다.
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(service))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_password_reset_routes(cfg);
}

fn configure_password_reset_routes(cfg: &mut web::ServiceConfig) {
    for path in RESET_PATHS {
        cfg.service(
            web::resource(path)
                .app_data(handlers::password_reset::json_config())
                .route(web::post().to(handlers::password_reset::set_user_password))
                .route(web::method(Method::OPTIONS).to(handlers::password_reset::preflight)),
        );
    }
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 서비스 키나 백엔드 URL은 응답에 포함하지 않습니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "password_reset_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "identity_backend": { "name": "supabase", "configured": true }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(service: web::Data<PasswordResetService>) -> HttpResponse {
    let backend = service.identity_backend();
    let status = if backend.is_configured() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(json!({
        "status": status,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "identity_backend": {
            "name": backend.name(),
            "configured": backend.is_configured()
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::repositories::identity::UnconfiguredIdentityBackend;
    use crate::test_support::RecordingIdentityBackend;

    #[actix_web::test]
    async fn test_health_reports_configured_backend() {
        let service = PasswordResetService::new(Arc::new(RecordingIdentityBackend::empty()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["identity_backend"]["name"], "recording");
        assert_eq!(body["identity_backend"]["configured"], true);
    }

    #[actix_web::test]
    async fn test_health_reports_degraded_when_unconfigured() {
        let service = PasswordResetService::new(Arc::new(UnconfiguredIdentityBackend::new(
            "SUPABASE_URL must be set",
        )));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "degraded");
        assert_eq!(body["identity_backend"]["configured"], false);
        assert!(!body.to_string().contains("SUPABASE_URL"));
    }
}

//! # Password Reset HTTP Handlers
//!
//! 관리 도구가 호출하는 비밀번호 재설정 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/set-user-password` | 비밀번호 재설정 | 200 / 400 |
//! | `OPTIONS` | `/set-user-password` | 프리플라이트 응답 (`ok`) | 200 |
//!
//! 같은 핸들러가 `/functions/v1/set-user-password` 경로에도 등록됩니다.

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::password_reset::ResetPasswordRequest;
use crate::domain::models::identity::PasswordResetCommand;
use crate::services::password_reset::PasswordResetService;

/// 비밀번호 재설정 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "target_email": "real@example.com",
///   "new_password": "longenough"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "message": "Password update initiated successfully" }
/// ```
///
/// ## 실패 (400 Bad Request)
/// ```json
/// { "error": "User with email ghost@example.com not found." }
/// ```
///
/// 입력 검증 실패 시 Identity Backend는 호출되지 않습니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/set-user-password \
///   -H "Content-Type: application/json" \
///   -d '{"target_email":"real@example.com","new_password":"longenough"}'
/// ```
pub async fn set_user_password(
    service: web::Data<PasswordResetService>,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    let command = PasswordResetCommand::try_from(payload.into_inner())?;
    let response = service.reset_password(command).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 프리플라이트 요청에 대한 단순 확인 응답
///
/// CORS 미들웨어가 처리하지 않은 OPTIONS 요청(`Access-Control-Request-Method` 없음)이
/// 여기로 옵니다. 검증과 백엔드 호출을 모두 건너뜁니다.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

/// JSON 본문 파싱 실패를 `InvalidInput`으로 변환합니다.
///
/// 잘못된 JSON이나 타입이 맞지 않는 필드도 다른 검증 실패와 같은
/// `{"error": ...}` 형태로 응답하기 위해 `JsonConfig`에 등록합니다.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidInput(format!("request body: {}", err)).into()
}

/// 재설정 엔드포인트용 JSON 추출 설정
///
/// 호출 도구에 따라 `Content-Type`이 빠지는 경우가 있어 요구하지 않습니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

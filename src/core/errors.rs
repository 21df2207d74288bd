//! # 통합 에러 처리
//!
//! 비밀번호 재설정 흐름에서 발생하는 모든 에러를 하나의 타입으로 모읍니다.
//! `thiserror`로 메시지를 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러가 `?`만으로 일관된 JSON 에러 응답을 반환하도록 합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 발생 지점 | 백엔드 호출 여부 |
//! |------|-----------|------------------|
//! | `InvalidInput` | 입력 검증 | 호출 없음 |
//! | `UserNotFound` | 이메일 → ID 조회 결과 없음 | 조회만 수행 |
//! | `BackendError` | 조회 또는 비밀번호 갱신 실패 | 실패한 호출까지 |
//!
//! ## 응답 형식
//!
//! 기존 호출자와의 호환성을 위해 모든 에러는 동일하게
//! `400 Bad Request` + `{"error": "<message>"}` 로 응답합니다.
//! 어느 단계에서 실패했는지 등의 진단 정보는 로그에만 남깁니다.
//!
//! ```json
//! { "error": "User with email ghost@example.com not found." }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 필드 누락, 짧은 비밀번호, 파싱 불가능한 본문
    ///
    /// 내부 문자열은 로그용 상세 정보이며 응답에는 노출되지 않습니다.
    #[error("Invalid input provided.")]
    InvalidInput(String),

    /// 조회는 성공했지만 해당 이메일의 계정이 없음
    #[error("User with email {0} not found.")]
    UserNotFound(String),

    /// Identity Backend가 반환한 에러 (메시지를 그대로 전달)
    #[error("{0}")]
    BackendError(String),
}

impl AppError {
    /// 로그에 남길 분류 이름
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::UserNotFound(_) => "user_not_found",
            AppError::BackendError(_) => "backend_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::BAD_REQUEST
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 에러 종류와 관계없이 400 상태 코드와 `{"error": ...}` 본문을 사용합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        match self {
            AppError::InvalidInput(detail) => {
                log::warn!("Caught an error in the reset flow: [{}] {}", self.kind(), detail)
            }
            _ => log::error!("Caught an error in the reset flow: [{}] {}", self.kind(), self),
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `BackendError`로 변환하는 확장 trait
///
/// reqwest 전송 오류나 응답 파싱 오류처럼 Identity Backend 호출 중에
/// 발생하는 에러를 변환합니다. 어느 단계였는지는 운영 로그에만 남기고,
/// `BackendError`에는 원래 에러 메시지만 담습니다.
pub trait ErrorContext<T> {
    fn backend_context(self, step: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn backend_context(self, step: &str) -> AppResult<T> {
        self.map_err(|e| {
            log::error!("{}: {}", step, e);
            AppError::BackendError(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_invalid_input_hides_detail() {
        let (status, body) =
            body_json(AppError::InvalidInput("new_password: length".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid input provided.");
    }

    #[actix_web::test]
    async fn test_user_not_found_mentions_email() {
        let (status, body) = body_json(AppError::UserNotFound("ghost@example.com".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User with email ghost@example.com not found.");
    }

    #[actix_web::test]
    async fn test_backend_error_is_passed_through() {
        let (status, body) = body_json(AppError::BackendError("permission denied".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "permission denied");
        assert!(body.get("message").is_none());
    }

    #[test]
    fn test_backend_context_trait() {
        let result: Result<(), &str> = Err("connection refused");
        let app_result = result.backend_context("Identity backend lookup failed");

        match app_result {
            Err(AppError::BackendError(msg)) => assert_eq!(msg, "connection refused"),
            other => panic!("Expected BackendError, got {:?}", other),
        }
    }
}

use serde::{Deserialize, Serialize};

/// 성공 응답에 고정으로 사용하는 메시지
pub const PASSWORD_UPDATE_INITIATED: &str = "Password update initiated successfully";

/// 비밀번호 재설정 성공 응답 DTO
///
/// 실패 응답은 `AppError`가 `{"error": ...}` 형태로 직접 만듭니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    pub message: String,
}

impl ResetPasswordResponse {
    pub fn initiated() -> Self {
        Self {
            message: PASSWORD_UPDATE_INITIATED.to_string(),
        }
    }
}

//! 비밀번호 재설정 요청 DTO
//!
//! 관리 도구가 보내는 JSON 본문을 그대로 받는 구조체입니다.
//! 필드 누락을 본문 파싱 실패가 아닌 입력 검증 실패로 처리하기 위해
//! 두 필드 모두 `Option`으로 받고 `validator`로 검증합니다.
//!
//! ```json
//! {
//!   "target_email": "user@example.com",
//!   "new_password": "longenough"
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 비밀번호 최소 길이 (UTF-16 코드 유닛 기준)
pub const MIN_PASSWORD_LEN: usize = 6;

/// 비밀번호 재설정 요청
///
/// # 검증 규칙
///
/// - `target_email`: 필수, 빈 문자열 불가
/// - `new_password`: 필수, UTF-16 코드 유닛 기준 최소 6
///
/// 비밀번호 길이는 기존 관리 도구(JavaScript `length`)와 같은 기준으로 셉니다.
/// 따라서 `"🔑🔑🔑"`처럼 BMP 밖 문자 3개는 길이 6으로 통과합니다.
///
/// 이메일 형식 자체는 검사하지 않습니다. 형식이 맞지 않는 이메일은
/// 조회 단계에서 "not found"로 처리됩니다.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[validate(
        required(message = "target_email은 필수입니다"),
        length(min = 1, message = "target_email은 비어 있을 수 없습니다")
    )]
    pub target_email: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "new_password는 필수입니다"),
        custom(function = "validate_password_length")
    )]
    pub new_password: Option<String>,
}

fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new("password_too_short")
            .with_message("new_password는 최소 6자 이상이어야 합니다".into()));
    }
    Ok(())
}

impl ResetPasswordRequest {
    pub fn new(target_email: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self {
            target_email: Some(target_email.into()),
            new_password: Some(new_password.into()),
        }
    }
}

// 평문 비밀번호가 로그에 남지 않도록 직접 구현
impl fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordRequest")
            .field("target_email", &self.target_email)
            .field("new_password", &self.new_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

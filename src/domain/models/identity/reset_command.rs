use std::fmt;

use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::password_reset::ResetPasswordRequest;

/// 검증을 통과한 비밀번호 재설정 명령
///
/// [`ResetPasswordRequest`]에서 `TryFrom`으로만 만들 수 있으므로
/// 서비스 계층은 검증되지 않은 입력을 받을 수 없습니다.
#[derive(Clone, PartialEq)]
pub struct PasswordResetCommand {
    target_email: String,
    new_password: String,
}

impl PasswordResetCommand {
    pub fn target_email(&self) -> &str {
        &self.target_email
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

impl TryFrom<ResetPasswordRequest> for PasswordResetCommand {
    type Error = AppError;

    fn try_from(request: ResetPasswordRequest) -> Result<Self, Self::Error> {
        request.validate().map_err(|e| {
            let mut fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
            fields.sort();
            AppError::InvalidInput(format!("invalid fields: {}", fields.join(", ")))
        })?;

        match (request.target_email, request.new_password) {
            (Some(target_email), Some(new_password)) => Ok(Self {
                target_email,
                new_password,
            }),
            _ => Err(AppError::InvalidInput("required field missing".to_string())),
        }
    }
}

impl fmt::Debug for PasswordResetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordResetCommand")
            .field("target_email", &self.target_email)
            .field("new_password", &"<redacted>")
            .finish()
    }
}

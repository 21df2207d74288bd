use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::identity::UserIdentifier;
use crate::repositories::identity::IdentityBackend;

/// 연결 설정 없이 기동했을 때 사용하는 Identity Backend
///
/// 모든 호출이 생성 시점의 실패 사유로 `BackendError`를 반환합니다.
pub struct UnconfiguredIdentityBackend {
    reason: String,
}

impl UnconfiguredIdentityBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[async_trait]
impl IdentityBackend for UnconfiguredIdentityBackend {
    fn name(&self) -> &str {
        "unconfigured"
    }

    fn is_configured(&self) -> bool {
        false
    }

    async fn lookup_user_id_by_email(&self, _email: &str) -> AppResult<Option<UserIdentifier>> {
        Err(AppError::BackendError(self.reason.clone()))
    }

    async fn update_password_by_id(&self, _id: &UserIdentifier, _new_password: &str) -> AppResult<()> {
        Err(AppError::BackendError(self.reason.clone()))
    }
}

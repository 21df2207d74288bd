//! # 비밀번호 재설정 서비스
//!
//! 이메일로 사용자 ID를 조회한 뒤 그 ID로 비밀번호를 갱신하는 두 단계 흐름을 담당합니다.
//!
//! ## 상태 전이
//!
//! ```text
//! Received ─▶ Validated ─▶ Resolved ─▶ Updated ─▶ Responded
//!     │           │            │                      ▲
//!     └───────────┴────────────┴──────▶ Errored ──────┘
//! ```
//!
//! - 검증은 [`PasswordResetCommand`] 생성 시점에 끝나므로 이 서비스는 `Validated`부터 시작합니다.
//! - 갱신 단계는 조회 결과에 의존하므로 두 호출은 항상 순차적으로 실행됩니다.
//! - 재시도는 하지 않습니다. 백엔드 에러 한 번으로 요청은 종료됩니다.
//! - 두 단계 사이에 원자성은 없습니다. 조회는 읽기 전용이므로 갱신이 실패해도
//!   되돌릴 상태가 남지 않습니다.

use std::sync::Arc;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::password_reset::ResetPasswordResponse,
        models::identity::{PasswordResetCommand, UserIdentifier},
    },
    repositories::identity::IdentityBackend,
};

/// 비밀번호 재설정 서비스
///
/// 보관하는 상태는 공유 가능한 [`IdentityBackend`] 핸들 하나뿐이며,
/// 요청 간에 조회한 사용자 ID를 캐싱하지 않습니다.
#[derive(Clone)]
pub struct PasswordResetService {
    identity_backend: Arc<dyn IdentityBackend>,
}

impl PasswordResetService {
    pub fn new(identity_backend: Arc<dyn IdentityBackend>) -> Self {
        Self { identity_backend }
    }

    pub fn identity_backend(&self) -> &Arc<dyn IdentityBackend> {
        &self.identity_backend
    }

    /// 비밀번호 재설정을 수행합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(ResetPasswordResponse)` - 조회와 갱신이 모두 성공
    /// * `Err(AppError::UserNotFound)` - 해당 이메일의 계정 없음 (갱신 호출 안 함)
    /// * `Err(AppError::BackendError)` - 조회 또는 갱신 호출 실패
    ///
    /// 같은 명령을 두 번 실행하면 두 번 모두 독립적으로 갱신합니다 (중복 제거 없음).
    pub async fn reset_password(&self, command: PasswordResetCommand) -> AppResult<ResetPasswordResponse> {
        let user_id = self.resolve_user_id(command.target_email()).await?;
        log::info!("Found user with ID: {}", user_id);

        self.identity_backend
            .update_password_by_id(&user_id, command.new_password())
            .await
            .inspect_err(|e| log::warn!("비밀번호 갱신 단계 실패 (user_id={}): {}", user_id, e))?;

        log::info!("Successfully initiated password update for user: {}", user_id);

        Ok(ResetPasswordResponse::initiated())
    }

    async fn resolve_user_id(&self, email: &str) -> AppResult<UserIdentifier> {
        self.identity_backend
            .lookup_user_id_by_email(email)
            .await
            .inspect_err(|e| log::warn!("사용자 조회 단계 실패 ({}): {}", self.identity_backend.name(), e))?
            .ok_or_else(|| AppError::UserNotFound(email.to_string()))
    }
}

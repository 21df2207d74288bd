//! Identity Backend 접근 계층
//!
//! 계정 저장소, 비밀번호 해싱, 세션 무효화는 모두 외부 Identity Backend가 담당합니다.
//! 이 모듈은 그중 두 가지 기능만 [`IdentityBackend`] trait으로 노출합니다.
//!
//! - 이메일로 사용자 ID 조회 (읽기 전용, 부작용 없음)
//! - 사용자 ID로 비밀번호 갱신
//!
//! # 구현체
//!
//! | 구현체 | 용도 |
//! |--------|------|
//! | [`SupabaseIdentityRepository`] | Supabase 호환 REST API (reqwest) |
//! | [`UnconfiguredIdentityBackend`] | 연결 설정이 없을 때 모든 호출을 실패시킴 |

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::models::identity::UserIdentifier;

pub mod identity_repo;
pub mod unconfigured;

pub use identity_repo::SupabaseIdentityRepository;
pub use unconfigured::UnconfiguredIdentityBackend;

/// Identity Backend 포트
///
/// 요청 간에 공유되므로 `Send + Sync`이어야 하며, 구현체는 요청별 상태를 갖지 않습니다.
#[async_trait]
pub trait IdentityBackend: Send + Sync {
    /// 로그에 표시할 백엔드 이름
    fn name(&self) -> &str;

    /// 연결 설정이 갖춰져 있는지 여부 (헬스체크용)
    fn is_configured(&self) -> bool {
        true
    }

    /// 이메일에 해당하는 사용자 ID를 조회합니다.
    ///
    /// * `Ok(Some(id))` - 계정이 존재함
    /// * `Ok(None)` - 조회는 성공했지만 해당 이메일의 계정이 없음
    /// * `Err(AppError::BackendError)` - 전송 실패, 권한 오류 등
    async fn lookup_user_id_by_email(&self, email: &str) -> AppResult<Option<UserIdentifier>>;

    /// 사용자 ID로 비밀번호를 갱신합니다.
    ///
    /// 성공 응답은 최종 결과로 신뢰하며 별도 확인 호출은 하지 않습니다.
    async fn update_password_by_id(&self, id: &UserIdentifier, new_password: &str) -> AppResult<()>;
}

/// 환경 변수로부터 Identity Backend를 구성합니다.
///
/// 설정 누락이나 클라이언트 생성 실패 시 서버를 중단하지 않고
/// [`UnconfiguredIdentityBackend`]를 반환합니다. 이 경우 모든 재설정 요청이
/// 같은 사유의 `BackendError`로 실패합니다.
pub fn build_identity_backend() -> Arc<dyn IdentityBackend> {
    match SupabaseIdentityRepository::from_env() {
        Ok(repository) => {
            log::info!("✅ Identity backend 구성 완료: {}", repository.base_url());
            Arc::new(repository)
        }
        Err(e) => {
            log::error!("❌ Identity backend 구성 실패: {}. 모든 재설정 요청이 실패합니다", e);
            Arc::new(UnconfiguredIdentityBackend::new(e.to_string()))
        }
    }
}

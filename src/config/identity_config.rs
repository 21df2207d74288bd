//! # Identity Backend Configuration Module
//!
//! 비밀번호 재설정에 사용하는 Identity Backend(Supabase 호환) 연결 정보를 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export SUPABASE_URL="https://project-ref.supabase.co"
//! export SUPABASE_SERVICE_ROLE_KEY="service-role-secret"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! # 설정하지 않으면 클라이언트 자체 타임아웃 없음
//! export IDENTITY_BACKEND_TIMEOUT_SECS="10"
//! ```
//!
//! 필수 값이 없어도 서버는 기동됩니다. 대신 모든 재설정 요청이
//! `BackendError`로 실패하며, 그 사유는 시작 로그와 에러 응답에 남습니다.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::mask_secret;

pub const IDENTITY_URL_VAR: &str = "SUPABASE_URL";
pub const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const TIMEOUT_SECS_VAR: &str = "IDENTITY_BACKEND_TIMEOUT_SECS";

/// Identity Backend 연결 설정
///
/// `service_role_key`는 모든 계정을 변경할 수 있는 관리자 자격 증명이므로
/// `Debug` 출력에서도 마스킹됩니다.
#[derive(Clone, PartialEq)]
pub struct IdentityBackendConfig {
    pub url: String,
    pub service_role_key: String,
    pub timeout: Option<Duration>,
}

impl IdentityBackendConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// 임의의 키-값 소스에서 설정을 읽습니다.
    ///
    /// 빈 문자열은 설정되지 않은 것으로 취급합니다.
    /// 타임아웃 값이 숫자가 아니면 무시하고 경고를 남깁니다.
    pub fn from_source<F>(source: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            source(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::BackendError(format!("{} must be set", key)))
        };

        let url = required(IDENTITY_URL_VAR)?
            .trim_end_matches('/')
            .to_string();
        let service_role_key = required(SERVICE_ROLE_KEY_VAR)?;

        let timeout = match source(TIMEOUT_SECS_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    log::warn!("{} 파싱 실패: {}. 타임아웃 없이 진행", TIMEOUT_SECS_VAR, e);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            url,
            service_role_key,
            timeout,
        })
    }

    /// 이메일 → 사용자 ID 조회 RPC 엔드포인트
    pub fn lookup_endpoint(&self) -> String {
        format!("{}/rest/v1/rpc/get_user_id_by_email", self.url)
    }

    /// 관리자 사용자 갱신 엔드포인트
    pub fn admin_user_endpoint(&self, user_id: &str) -> String {
        format!("{}/auth/v1/admin/users/{}", self.url, user_id)
    }
}

impl fmt::Debug for IdentityBackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityBackendConfig")
            .field("url", &self.url)
            .field("service_role_key", &mask_secret(&self.service_role_key))
            .field("timeout", &self.timeout)
            .finish()
    }
}

//! # Supabase 호환 Identity Backend 리포지토리
//!
//! 서비스 역할 키로 인증된 REST 호출 두 개를 수행합니다.
//!
//! ```text
//! POST {SUPABASE_URL}/rest/v1/rpc/get_user_id_by_email
//!      { "target_email": "user@example.com" }
//!   → "7c9e6679-7425-40de-944b-e07fc1f90ae7" | null
//!
//! PUT  {SUPABASE_URL}/auth/v1/admin/users/{id}
//!      { "password": "..." }
//!   → 2xx
//! ```
//!
//! 두 호출 모두 `apikey` 헤더와 `Authorization: Bearer` 헤더에 같은 서비스 키를 사용합니다.
//! 2xx가 아닌 응답은 본문의 에러 메시지를 그대로 담은 `BackendError`가 됩니다.
//! 전송 오류 메시지에서는 백엔드 URL을 제거하고, 실패한 단계는 로그에만 남깁니다.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::{json, Value};

use crate::config::IdentityBackendConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::models::identity::UserIdentifier;
use crate::repositories::identity::IdentityBackend;
use crate::utils::string_utils::truncate_for_log;

/// 에러 메시지를 찾을 때 확인하는 필드 (앞에서부터 우선)
const ERROR_MESSAGE_FIELDS: [&str; 4] = ["msg", "message", "error_description", "error"];

/// 응답 본문을 에러 메시지로 쓸 때의 최대 길이
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Supabase 호환 Identity Backend 리포지토리
///
/// `reqwest::Client`는 내부적으로 커넥션 풀을 공유하므로 기동 시 한 번 만들어
/// 모든 요청에서 재사용합니다. 요청별 상태는 보관하지 않습니다.
pub struct SupabaseIdentityRepository {
    client: Client,
    config: IdentityBackendConfig,
}

impl SupabaseIdentityRepository {
    /// 설정으로부터 리포지토리를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BackendError` - HTTP 클라이언트 생성 실패 (TLS 백엔드 초기화 등)
    pub fn new(config: IdentityBackendConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .backend_context("Identity backend 클라이언트 생성 실패")?;

        Ok(Self { client, config })
    }

    /// 환경 변수에서 설정을 읽어 리포지토리를 생성합니다.
    pub fn from_env() -> AppResult<Self> {
        Self::new(IdentityBackendConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.config.url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", self.config.service_role_key.as_str())
            .bearer_auth(&self.config.service_role_key)
    }

    /// 실패 응답에서 사람이 읽을 수 있는 에러 메시지를 추출합니다.
    async fn error_from_response(response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        AppError::BackendError(extract_error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string())
        }))
    }
}

/// JSON 에러 본문이면 알려진 메시지 필드를, 아니면 본문 텍스트를 반환합니다.
fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(trimmed) {
        let message = ERROR_MESSAGE_FIELDS.iter().find_map(|key| {
            fields
                .get(*key)
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        });
        if message.is_some() {
            return message;
        }
    }

    Some(truncate_for_log(trimmed, MAX_ERROR_BODY_CHARS))
}

#[async_trait]
impl IdentityBackend for SupabaseIdentityRepository {
    fn name(&self) -> &str {
        "supabase"
    }

    async fn lookup_user_id_by_email(&self, email: &str) -> AppResult<Option<UserIdentifier>> {
        let response = self
            .authorized(self.client.post(self.config.lookup_endpoint()))
            .json(&json!({ "target_email": email }))
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .backend_context("Identity backend 사용자 조회 요청 실패")?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let user_id = response
            .json::<Option<UserIdentifier>>()
            .await
            .map_err(reqwest::Error::without_url)
            .backend_context("Identity backend 사용자 조회 응답 파싱 실패")?;

        Ok(user_id.filter(|id| !id.as_str().is_empty()))
    }

    async fn update_password_by_id(&self, id: &UserIdentifier, new_password: &str) -> AppResult<()> {
        let endpoint = self
            .config
            .admin_user_endpoint(&urlencoding::encode(id.as_str()));

        let response = self
            .authorized(self.client.put(endpoint))
            .json(&json!({ "password": new_password }))
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .backend_context("Identity backend 비밀번호 갱신 요청 실패")?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Ok(())
    }
}

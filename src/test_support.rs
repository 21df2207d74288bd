//! 단위 테스트용 Identity Backend 대역

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::identity::UserIdentifier;
use crate::repositories::identity::IdentityBackend;

/// 호출 내역을 기록하는 메모리 기반 Identity Backend
#[derive(Default)]
pub struct RecordingIdentityBackend {
    users: HashMap<String, String>,
    lookup_error: Option<String>,
    update_error: Option<String>,
    lookups: Mutex<Vec<String>>,
    updates: Mutex<Vec<(String, String)>>,
}

impl RecordingIdentityBackend {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_user(email: &str, id: &str) -> Self {
        let mut backend = Self::default();
        backend.users.insert(email.to_string(), id.to_string());
        backend
    }

    pub fn failing_lookup(mut self, message: &str) -> Self {
        self.lookup_error = Some(message.to_string());
        self
    }

    pub fn failing_update(mut self, message: &str) -> Self {
        self.update_error = Some(message.to_string());
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(String, String)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lookups().len() + self.updates().len()
    }
}

#[async_trait]
impl IdentityBackend for RecordingIdentityBackend {
    fn name(&self) -> &str {
        "recording"
    }

    async fn lookup_user_id_by_email(&self, email: &str) -> AppResult<Option<UserIdentifier>> {
        self.lookups.lock().unwrap().push(email.to_string());

        if let Some(message) = &self.lookup_error {
            return Err(AppError::BackendError(message.clone()));
        }

        Ok(self.users.get(email).map(|id| UserIdentifier::new(id.as_str())))
    }

    async fn update_password_by_id(&self, id: &UserIdentifier, new_password: &str) -> AppResult<()> {
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), new_password.to_string()));

        match &self.update_error {
            Some(message) => Err(AppError::BackendError(message.clone())),
            None => Ok(()),
        }
    }
}

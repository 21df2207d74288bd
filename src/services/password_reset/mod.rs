//! 비밀번호 재설정 서비스 모듈
//!
//! Identity Backend에 대한 두 단계 관리자 변경(조회 → 갱신)을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::identity::build_identity_backend;
//! use crate::services::password_reset::PasswordResetService;
//!
//! let service = PasswordResetService::new(build_identity_backend());
//! let response = service.reset_password(command).await?;
//! ```

pub mod password_reset_service;

pub use password_reset_service::PasswordResetService;

//! # Domain Layer
//!
//! 비밀번호 재설정 흐름에서 사용하는 값 타입을 정의합니다.
//!
//! ```text
//! ResetPasswordRequest ──validate──▶ PasswordResetCommand
//!                                          │
//!                          lookup_user_id_by_email
//!                                          ▼
//!                                   UserIdentifier
//!                                          │
//!                           update_password_by_id
//!                                          ▼
//!                               ResetPasswordResponse
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;

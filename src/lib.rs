//! 비밀번호 재설정 서비스
//!
//! 관리 도구가 서비스 자격 증명을 가지고 호출하는 단일 관리자 엔드포인트입니다.
//! 이메일과 새 비밀번호를 받아 외부 Identity Backend에서 사용자 ID를 조회한 뒤
//! 그 ID로 비밀번호를 갱신합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /set-user-password, OPTIONS, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 본문 파싱, 입력 검증, 응답 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 조회 → 갱신 (순차, 재시도 없음)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← IdentityBackend trait (Supabase REST)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use password_reset_service::repositories::identity::build_identity_backend;
//! use password_reset_service::routes::configure_all_routes;
//! use password_reset_service::services::password_reset::PasswordResetService;
//!
//! let service = web::Data::new(PasswordResetService::new(build_identity_backend()));
//! let app = App::new()
//!     .app_data(service.clone())
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
mod test_support;

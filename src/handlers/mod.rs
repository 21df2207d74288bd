//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Admin tool (service credential holder)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 본문 파싱, 검증, 응답 생성   ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 조회 → 갱신 순서 제어               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - Identity Backend 호출          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러 응답 변환은 [`crate::core::errors::AppError`]의 `ResponseError` 구현이 담당합니다.

pub mod password_reset;

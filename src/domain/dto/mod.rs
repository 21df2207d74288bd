//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체를 정의합니다.
//! 요청 DTO는 `validator`로 검증하고, 검증을 통과한 값만
//! 도메인 모델([`crate::domain::models`])로 변환되어 서비스 계층에 전달됩니다.

pub mod password_reset;

pub use password_reset::*;

//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 기반 기능을 제공합니다.
//!
//! - [`errors`] - `AppError`, `AppResult`, HTTP 에러 응답 변환

pub mod errors;

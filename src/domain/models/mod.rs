//! # Domain Models
//!
//! 요청 하나의 수명 동안만 존재하는 도메인 값들입니다.
//! 어떤 모델도 요청 간에 공유되거나 저장되지 않습니다.

pub mod identity;

pub use identity::*;

//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 비밀 값 마스킹, 로그용 문자열 자르기
//! - [`display_terminal`] - 기동 요약 터미널 출력

pub mod string_utils;
pub mod display_terminal;

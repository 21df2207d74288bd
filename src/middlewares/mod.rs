//! HTTP 미들웨어 모듈
//!
//! - [`cors`] - 프리플라이트(OPTIONS) 처리와 CORS 헤더

pub mod cors;

pub use cors::configure_cors;

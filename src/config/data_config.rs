//! # Server Configuration Module
//!
//! HTTP 서버 바인딩과 워커 수처럼 인프라 수준의 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 값이 없거나 파싱에 실패하면 기본값을 사용합니다.

use std::env;

/// HTTP 서버 설정
///
/// | 환경 변수 | 기본값 |
/// |-----------|--------|
/// | `HOST` | `0.0.0.0` |
/// | `PORT` | `8080` |
/// | `WORKERS` | `4` |
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// actix 워커 스레드 수
    ///
    /// 0이나 숫자가 아닌 값은 기본값 4로 대체됩니다.
    pub fn workers() -> usize {
        Self::parse_workers(env::var("WORKERS").ok().as_deref())
    }

    fn parse_workers(raw: Option<&str>) -> usize {
        match raw.and_then(|value| value.trim().parse::<usize>().ok()) {
            Some(workers) if workers > 0 => workers,
            _ => 4,
        }
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

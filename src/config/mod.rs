//! # Configuration Module
//!
//! 환경 변수 기반 설정을 중앙에서 관리합니다.
//!
//! - [`data_config`] - 서버 바인딩, 워커 수
//! - [`identity_config`] - Identity Backend 연결 정보
//! - [`load_env_file`] - `PROFILE`에 따른 `.env` 파일 로드
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export SUPABASE_URL="https://project-ref.supabase.co"
//! export SUPABASE_SERVICE_ROLE_KEY="service-role-secret"
//!
//! # 선택
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//! export IDENTITY_BACKEND_TIMEOUT_SECS="10"
//! export PROFILE="dev"                 # dev → .env.dev, prod → .env.prod
//! export RUST_LOG="info,actix_web=info"
//! ```

pub mod data_config;
pub mod identity_config;

pub use data_config::*;
pub use identity_config::*;

use dotenv::dotenv;
use log::{error, info};

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없어도 실패하지 않습니다. 이미 설정된 환경 변수는 덮어쓰지 않습니다.
pub fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match env_file_for_profile(&profile) {
        Some(file) => match dotenv::from_filename(file) {
            Ok(_) => info!("{} 파일 로드 됨", file),
            Err(e) => error!("{} 파일 로드 실패: {}", file, e),
        },
        None => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn env_file_for_profile(profile: &str) -> Option<&'static str> {
    match profile {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    }
}

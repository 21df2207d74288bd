//! CORS 미들웨어 구성
//!
//! 관리 도구가 브라우저에서 호출하는 경우를 위해 프리플라이트를 처리합니다.
//! 호출자 인증은 서비스 키를 가진 쪽의 책임이므로 Origin은 제한하지 않습니다.

use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};

/// 프리플라이트 응답 캐시 시간 (초)
const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// CORS 설정을 구성합니다
///
/// # 허용 항목
///
/// * Origin: 전체
/// * 메서드: `POST`, `OPTIONS`
/// * 헤더: `authorization`, `x-client-info`, `apikey`, `content-type`
pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
        .max_age(PREFLIGHT_MAX_AGE_SECS)
}

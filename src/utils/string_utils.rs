//! # 문자열 유틸리티
//!
//! 로그와 터미널 출력에서 민감한 값을 다룰 때 사용하는 함수들입니다.

/// 비밀 값을 마스킹합니다.
///
/// 앞 4글자만 남기고 나머지는 `*`로 가립니다. 8글자 미만이면 전부 가립니다.
/// 서비스 키처럼 로그에 그대로 남으면 안 되는 값에 사용합니다.
///
/// ```rust,ignore
/// assert_eq!(mask_secret("eyJhbGciOiJIUzI1NiJ9"), "eyJh****");
/// assert_eq!(mask_secret("short"), "****");
/// ```
pub fn mask_secret(value: &str) -> String {
    if value.chars().count() < 8 {
        return "****".to_string();
    }

    let visible: String = value.chars().take(4).collect();
    format!("{}****", visible)
}

/// 로그용으로 긴 문자열을 자릅니다.
///
/// 백엔드 에러 본문이 HTML 페이지 전체일 때처럼 비정상적으로 긴 경우에 사용합니다.
pub fn truncate_for_log(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }

    let head: String = value.chars().take(max_chars).collect();
    format!("{}…", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("eyJhbGciOiJIUzI1NiJ9"), "eyJh****");
        assert_eq!(mask_secret("12345678"), "1234****");
        assert_eq!(mask_secret("short"), "****");
        assert_eq!(mask_secret(""), "****");
    }

    #[test]
    fn test_mask_secret_multibyte() {
        // 한글처럼 멀티바이트 문자도 글자 단위로 자름
        assert_eq!(mask_secret("비밀키입니다정말로"), "비밀키입****");
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("abc", 5), "abc");
        assert_eq!(truncate_for_log("abcdef", 3), "abc…");
        assert_eq!(truncate_for_log("", 0), "");
    }
}

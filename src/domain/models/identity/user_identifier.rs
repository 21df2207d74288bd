use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity Backend가 계정을 가리키는 데 사용하는 불투명 식별자
///
/// 이메일과는 별개의 안정적인 키입니다. 형식(UUID 등)을 가정하지 않으며
/// 한 요청 안에서 조회 단계와 갱신 단계 사이에만 사용되고 캐싱되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentifier(String);

impl UserIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_bare_json_string() {
        let id: UserIdentifier =
            serde_json::from_str(r#""7c9e6679-7425-40de-944b-e07fc1f90ae7""#).unwrap();

        assert_eq!(id.as_str(), "7c9e6679-7425-40de-944b-e07fc1f90ae7");
        assert_eq!(id.to_string(), "7c9e6679-7425-40de-944b-e07fc1f90ae7");
    }

    #[test]
    fn test_null_deserializes_to_none() {
        let id: Option<UserIdentifier> = serde_json::from_str("null").unwrap();
        assert!(id.is_none());
    }
}

//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 이 서비스는 자체 저장소를 갖지 않습니다. 사용자 계정은 모두 외부
//! Identity Backend에 있으며, [`identity`] 모듈이 그 접근을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::identity::build_identity_backend;
//!
//! let backend = build_identity_backend();
//! let user_id = backend.lookup_user_id_by_email("user@example.com").await?;
//! ```

pub mod identity;

//! Identity Backend와 주고받는 도메인 모델
//!
//! - [`UserIdentifier`]: 이메일 조회 결과로 얻는 계정 식별자
//! - [`PasswordResetCommand`]: 검증이 끝난 재설정 명령

pub mod reset_command;
pub mod user_identifier;

pub use reset_command::PasswordResetCommand;
pub use user_identifier::UserIdentifier;

//! 비밀번호 재설정 엔드포인트의 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::ResetPasswordRequest;
pub use response::{ResetPasswordResponse, PASSWORD_UPDATE_INITIATED};

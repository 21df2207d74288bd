//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 핸들러는 검증된 명령을 서비스에 넘기고, 서비스는 리포지토리(Identity Backend)를
//! 호출해 결과를 DTO로 돌려줍니다.

pub mod password_reset;

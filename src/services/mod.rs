//! 비즈니스 로직 계층
//!
//! 프로바이더와 저장소를 합성하여 유스케이스를 구현합니다.

pub mod mail;
pub mod users;

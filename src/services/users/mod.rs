//! 사용자 유스케이스 모듈
//!
//! 회원가입/이메일 인증 파이프라인과 사용자 조회 유스케이스를 제공합니다.

pub mod user_service;

pub use user_service::UserService;

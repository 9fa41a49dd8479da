//! 도메인 계층
//!
//! 엔티티, 토큰 클레임, 요청/응답 DTO를 정의합니다.

pub mod dto;
pub mod entities;
pub mod token;

//! 프로바이더 모듈
//!
//! 파이프라인이 의존하는 순수 기능 컴포넌트들입니다.
//! 모두 생성 시점에 설정을 주입받으며, 이후에는 읽기 전용으로 동작합니다.

pub mod hash;
pub mod template;
pub mod token;

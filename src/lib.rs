//! 교육 콘텐츠 백엔드
//!
//! Rust 기반의 교육 콘텐츠 관리 서비스입니다.
//! 이메일 인증 기반 회원가입 파이프라인과 카테고리/수업/강좌/과목/
//! 게시물 유형/게시물 콘텐츠의 CRUD를 제공합니다.
//!
//! # Features
//!
//! - **회원가입 파이프라인**: 검증 → 해싱 → 저장 → 서명 토큰 발급 → 인증 메일 발송
//! - **이메일 인증**: 서명·만료·용도를 검증하는 무상태 토큰 (멱등 재호출)
//! - **콘텐츠 관리**: 여섯 엔티티 타입을 아우르는 제네릭 저장소
//! - **MongoDB**: 엔티티 영구 저장, 이메일 유니크 인덱스
//! - **SMTP**: 템플릿 기반 인증 메일 발송
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 파이프라인 (가입/인증/메일)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod providers;
pub mod repositories;
pub mod routes;
pub mod services;

//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경, 비밀번호 해싱 관련 설정
//! - [`token_config`] - 서명 토큰 관련 설정
//! - [`mail_config`] - SMTP 및 템플릿 디렉토리 설정
//!
//! ## 설계 원칙
//!
//! 모든 설정값은 프로세스 시작 시점에 한 번 읽어 컴포넌트 생성자에 주입하며,
//! 이후에는 읽기 전용으로 취급합니다. 민감한 값(토큰 시크릿, SMTP 자격 증명)은
//! 환경 변수로만 제공하고, 기본값은 개발 환경에서만 안전합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export PUBLIC_SERVER_URL="https://api.example.com"
//!
//! # 토큰 설정
//! export TOKEN_SECRET="your-super-secret-key"
//! export EMAIL_VERIFY_EXPIRY_HOURS="2"
//!
//! # 메일 설정
//! export SMTP_HOST="smtp.example.com"
//! export SMTP_PORT="587"
//! export SMTP_USERNAME="mailer@example.com"
//! export SMTP_PASSWORD="app-password"
//! export MAIL_FROM="EduContent <no-reply@example.com>"
//! export TEMPLATE_DIR="templates"
//! ```

pub mod data_config;
pub mod mail_config;
pub mod token_config;

pub use data_config::*;
pub use mail_config::*;
pub use token_config::*;

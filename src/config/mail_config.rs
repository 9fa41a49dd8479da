//! 메일 전송 설정 관리 모듈
//!
//! SMTP 자격 증명과 이메일 템플릿 디렉토리 위치를 관리합니다.

use std::env;

use crate::config::Environment;

/// SMTP 메일 전송 설정
///
/// 프로세스 시작 시점에 `from_env()`로 한 번 로드하여
/// `SmtpMailService` 생성자에 주입합니다.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP 서버 호스트
    pub host: String,
    /// SMTP 서버 포트 (기본값: 587)
    pub port: u16,
    /// SMTP 인증 사용자명
    pub username: String,
    /// SMTP 인증 비밀번호
    pub password: String,
    /// 발신자 주소 (예: "EduContent <no-reply@example.com>")
    pub from: String,
}

impl MailConfig {
    /// 환경 변수에서 메일 설정을 로드합니다.
    ///
    /// # Panics
    ///
    /// 프로덕션/스테이징 환경에서 `SMTP_HOST`, `SMTP_USERNAME`,
    /// `SMTP_PASSWORD` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn from_env() -> Self {
        let required = |key: &str, dev_default: &str| match env::var(key) {
            Ok(value) => value,
            Err(_) => match Environment::current() {
                Environment::Development | Environment::Test => dev_default.to_string(),
                _ => panic!("{} must be set", key),
            },
        };

        Self {
            host: required("SMTP_HOST", "localhost"),
            port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .unwrap_or(587),
            username: required("SMTP_USERNAME", "dev"),
            password: required("SMTP_PASSWORD", "dev"),
            from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "EduContent <no-reply@educontent.dev>".to_string()),
        }
    }
}

/// 이메일 템플릿 설정
pub struct TemplateConfig;

impl TemplateConfig {
    /// 템플릿 파일(`*.hbs`)이 위치한 디렉토리를 반환합니다. 기본값: "templates"
    pub fn template_dir() -> String {
        env::var("TEMPLATE_DIR").unwrap_or_else(|_| "templates".to_string())
    }
}

//! 서명 토큰 설정 관리 모듈
//!
//! 이메일 인증 토큰 등 자체 서명 토큰의 시크릿과 만료 시간을 관리합니다.
//! 시크릿은 프로세스 전역 상태이지만 컴포넌트 생성 시점에 한 번 읽어
//! 주입하는 방식으로만 사용합니다.

use std::env;

use crate::config::Environment;

/// 서명 토큰 설정
pub struct TokenConfig;

impl TokenConfig {
    /// 토큰 서명에 사용할 시크릿을 반환합니다.
    ///
    /// # Panics
    ///
    /// 프로덕션/스테이징 환경에서 `TOKEN_SECRET` 환경 변수가 설정되지 않은
    /// 경우 패닉이 발생합니다. 개발/테스트 환경에서는 고정 기본값을
    /// 사용합니다.
    pub fn secret() -> String {
        match env::var("TOKEN_SECRET") {
            Ok(secret) => secret,
            Err(_) => match Environment::current() {
                Environment::Development | Environment::Test => {
                    "dev-only-token-secret".to_string()
                }
                _ => panic!("TOKEN_SECRET must be set"),
            },
        }
    }

    /// 이메일 인증 토큰의 만료 시간(시간 단위)을 반환합니다.
    ///
    /// 링크 탈취의 공격 창을 제한하기 위해 짧게 유지합니다. 기본값: 2시간
    pub fn email_verify_expiry_hours() -> i64 {
        env::var("EMAIL_VERIFY_EXPIRY_HOURS")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .unwrap_or(2)
    }
}

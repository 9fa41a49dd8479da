//! 서명 토큰 클레임 구조체
//!
//! 서버 측 상태 없이 자체 검증되는 시간 제한 토큰의 페이로드를 정의합니다.

use serde::{Deserialize, Serialize};

/// 토큰 용도 판별자
///
/// 서로 다른 용도로 발급된 토큰의 교차 사용을 막기 위해 검증 시점에
/// 명시적으로 비교됩니다. 이메일 인증용 토큰이 비밀번호 재설정 자리에서
/// 수락되는 일은 없어야 합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// 이메일 인증용
    EmailVerify,
    /// 비밀번호 재설정용
    PasswordReset,
}

/// 서명 토큰의 클레임(Payload) 구조체
///
/// RFC 7519 표준 클레임(`sub`, `iat`, `exp`)과 용도 판별자를 포함합니다.
/// 개인정보 보호를 위해 최소한의 정보만 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 이메일)
    pub sub: String,
    /// 토큰 용도 판별자
    pub token_type: TokenType,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

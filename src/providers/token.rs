//! 서명 토큰 프로바이더
//!
//! HMAC-SHA256 서명 기반의 시간 제한 토큰을 발급하고 검증합니다.
//! 토큰은 서버 측 세션 상태를 갖지 않는 bearer-capability이며,
//! 서명·만료·용도 판별자를 모두 재계산으로만 검증합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::token::{TokenClaims, TokenType};
use crate::errors::AppError;

/// 서명 토큰 프로바이더
///
/// 프로세스 전역 시크릿을 생성 시점에 주입받는 순수 기능 컴포넌트입니다.
pub struct TokenProvider {
    secret: String,
}

impl TokenProvider {
    /// 지정된 서명 시크릿으로 프로바이더를 생성합니다.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// 주어진 이메일과 용도로 서명 토큰을 발급합니다.
    ///
    /// # Arguments
    ///
    /// * `email` - 토큰의 주체가 되는 이메일
    /// * `token_type` - 토큰 용도 판별자
    /// * `expires_in` - 발급 시점부터의 유효 기간
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn sign(
        &self,
        email: &str,
        token_type: TokenType,
        expires_in: Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: email.to_string(),
            token_type,
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// 토큰을 검증하고 클레임을 추출합니다.
    ///
    /// 서명, 만료, 용도 판별자를 순서대로 확인합니다.
    /// 만료 검증에는 leeway를 두지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료 시각 경과
    /// * `AppError::InvalidToken` - 서명 또는 형식이 유효하지 않음
    /// * `AppError::InvalidTokenType` - 기대한 용도와 판별자 불일치
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;

        if claims.token_type != expected {
            return Err(AppError::InvalidTokenType);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> TokenProvider {
        TokenProvider::new("test-secret")
    }

    #[test]
    fn test_round_trip_returns_payload_unchanged() {
        let provider = provider();
        let token = provider
            .sign("a@x.com", TokenType::EmailVerify, Duration::hours(2))
            .unwrap();

        let claims = provider.verify(&token, TokenType::EmailVerify).unwrap();

        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.token_type, TokenType::EmailVerify);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let provider = provider();
        let token = provider
            .sign("a@x.com", TokenType::EmailVerify, Duration::seconds(-60))
            .unwrap();

        let result = provider.verify(&token, TokenType::EmailVerify);

        assert!(matches!(result, Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let provider = provider();
        let token = provider
            .sign("a@x.com", TokenType::EmailVerify, Duration::hours(2))
            .unwrap();

        // 서명 부분 마지막 문자를 변조
        let mut tampered = token.clone();
        let last = if tampered.ends_with('A') { 'B' } else { 'A' };
        tampered.pop();
        tampered.push(last);

        let result = provider.verify(&tampered, TokenType::EmailVerify);

        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let result = provider().verify("not-a-token", TokenType::EmailVerify);

        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let token = TokenProvider::new("other-secret")
            .sign("a@x.com", TokenType::EmailVerify, Duration::hours(2))
            .unwrap();

        let result = provider().verify(&token, TokenType::EmailVerify);

        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_cross_purpose_token_rejected() {
        let provider = provider();
        let token = provider
            .sign("a@x.com", TokenType::PasswordReset, Duration::hours(2))
            .unwrap();

        // 서명과 만료는 유효하지만 용도가 다르면 수락하지 않는다
        let result = provider.verify(&token, TokenType::EmailVerify);

        assert!(matches!(result, Err(AppError::InvalidTokenType)));
    }
}

//! 비밀번호 해시 프로바이더
//!
//! bcrypt 기반의 단방향 해싱과 검증을 제공합니다.
//! 적응형 해시 함수이므로 무차별 대입 공격에 대한 비용이 의도적으로 높고,
//! 솔트가 내부적으로 생성되어 같은 입력이라도 호출마다 다른 다이제스트가
//! 나옵니다.

use bcrypt::{hash, verify};

use crate::errors::AppError;

/// bcrypt 해시 프로바이더
///
/// cost는 환경별 `PasswordConfig` 값을 생성 시점에 주입받습니다.
pub struct HashProvider {
    cost: u32,
}

impl HashProvider {
    /// 지정된 bcrypt cost로 프로바이더를 생성합니다.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 평문 비밀번호를 해싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 빈 평문
    /// * `AppError::InternalError` - bcrypt 해싱 실패
    pub fn generate_hash(&self, plaintext: &str) -> Result<String, AppError> {
        if plaintext.is_empty() {
            return Err(AppError::BadRequest("비밀번호는 필수입니다".to_string()));
        }

        hash(plaintext, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }

    /// 평문 비밀번호가 다이제스트와 일치하는지 검증합니다.
    pub fn compare_hash(&self, plaintext: &str, digest: &str) -> Result<bool, AppError> {
        verify(plaintext, digest)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 테스트에서는 개발 환경과 동일한 최저 cost 사용
    fn provider() -> HashProvider {
        HashProvider::new(4)
    }

    #[test]
    fn test_hash_differs_from_plaintext_and_verifies() {
        let provider = provider();
        let digest = provider.generate_hash("secret123").unwrap();

        assert_ne!(digest, "secret123");
        assert!(provider.compare_hash("secret123", &digest).unwrap());
        assert!(!provider.compare_hash("wrong-password", &digest).unwrap());
    }

    #[test]
    fn test_hash_is_salted_per_call() {
        let provider = provider();
        let first = provider.generate_hash("secret123").unwrap();
        let second = provider.generate_hash("secret123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_empty_plaintext_rejected() {
        let result = provider().generate_hash("");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}

//! 사용자 관련 요청/응답 DTO
//!
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::user::User;

/// 회원가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 검증 실패는 파이프라인 진입 전에 `BadRequest`로 변환됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 표시 이름 (1-100자)
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,
}

/// 이메일 인증 요청 (쿼리 파라미터)
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyEmailQuery {
    /// 인증 메일에 포함된 서명 토큰
    pub token: String,
}

/// 사용자 목록 조회 필터 (쿼리 파라미터)
#[derive(Debug, Clone, Deserialize)]
pub struct UserSearchQuery {
    /// 이름 부분 일치 필터 (없으면 전체 조회)
    pub name: Option<String>,
}

/// 사용자 응답 DTO
///
/// 비밀번호 해시 등 민감 정보를 제거한 안전한 표현입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub email_verified: bool,
    pub created_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            email_verified,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            name,
            email_verified,
            created_at,
        }
    }
}

//! 사용자 저장소 추상화
//!
//! 회원가입/인증 파이프라인이 의존하는 영속성 계약입니다.
//! 프로덕션에서는 MongoDB 구현을, 단위 테스트에서는 인메모리 구현을
//! 주입합니다.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::AppError;

pub mod in_memory;
pub mod mongo;

pub use in_memory::InMemoryUserStore;
pub use mongo::MongoUserStore;

/// 사용자 업데이트 패치
///
/// `None` 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email_verified: Option<bool>,
}

impl UserPatch {
    /// 이메일 인증 완료 표시용 패치
    pub fn verified() -> Self {
        Self {
            name: None,
            email_verified: Some(true),
        }
    }
}

/// 사용자 영속성 계약
///
/// 이메일 유니크 제약은 구현체의 저장 계층에서 보장되어야 합니다.
/// 사전 중복 조회는 최선 노력일 뿐이며, 동시 가입 경쟁의 패자는
/// `insert`에서 `EmailInUse`를 받습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자 조회 (이메일은 소문자 정규화 기준)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 저장
    ///
    /// # Errors
    ///
    /// * `AppError::EmailInUse` - 유니크 제약 위반
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// 사용자 부분 업데이트
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없음
    async fn update(&self, id: &str, patch: UserPatch) -> Result<(), AppError>;

    /// 사용자 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없음
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// 이름 부분 일치 검색 (필터 없으면 전체 조회)
    async fn search(&self, name: Option<&str>) -> Result<Vec<User>, AppError>;
}

//! 사용자 저장소 인메모리 구현
//!
//! 단위 테스트에서 MongoDB 없이 파이프라인을 검증하기 위한 구현입니다.
//! MongoDB 구현과 동일한 계약(이메일 유니크, NotFound 규칙)을 따르며,
//! 유니크 검사와 삽입이 하나의 쓰기 잠금 안에서 이루어지므로
//! check-then-insert 경쟁이 없습니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::user::User;
use crate::errors::AppError;
use crate::repositories::users::{UserPatch, UserStore};

/// 인메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.users.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().unwrap();
        Ok(users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().unwrap();
        Ok(users
            .iter()
            .find(|user| user.id_string().as_deref() == Some(id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.write().unwrap();

        if users
            .iter()
            .any(|existing| existing.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AppError::EmailInUse);
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<(), AppError> {
        let mut users = self.users.write().unwrap();

        let user = users
            .iter_mut()
            .find(|user| user.id_string().as_deref() == Some(id))
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(verified) = patch.email_verified {
            user.email_verified = verified;
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut users = self.users.write().unwrap();

        let position = users
            .iter()
            .position(|user| user.id_string().as_deref() == Some(id))
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        users.remove(position);

        Ok(())
    }

    async fn search(&self, name: Option<&str>) -> Result<Vec<User>, AppError> {
        let users = self.users.read().unwrap();

        Ok(users
            .iter()
            .filter(|user| match name {
                Some(filter) => user.name.to_lowercase().contains(&filter.to_lowercase()),
                None => true,
            })
            .cloned()
            .collect())
    }
}

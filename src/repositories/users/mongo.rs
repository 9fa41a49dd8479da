//! 사용자 저장소 MongoDB 구현
//!
//! `users` 컬렉션에 대한 CRUD를 담당합니다.
//! 이메일 유니크 인덱스가 중복 가입의 최종 방어선이며, check-then-insert
//! 경쟁은 인덱스의 중복 키 거부(11000)를 `EmailInUse`로 변환하여 닫습니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::user::User;
use crate::errors::AppError;
use crate::repositories::users::{UserPatch, UserStore};

/// 사용자 컬렉션 이름
const COLLECTION_NAME: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리 (MongoDB)
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    /// 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection(COLLECTION_NAME),
        }
    }

    /// 사용자 컬렉션 인덱스를 생성합니다.
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. `email` 유니크 인덱스 - 중복 이메일 방지 및 조회 최적화
    /// 2. `created_at` 내림차순 인덱스 - 최근 가입자 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::BadRequest("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// 유니크 인덱스 위반(중복 키) 에러인지 확인합니다.
    fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
        match *err.kind {
            ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => {
                write_error.code == DUPLICATE_KEY_CODE
            }
            ErrorKind::Command(ref command_error) => command_error.code == DUPLICATE_KEY_CODE,
            _ => false,
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if Self::is_duplicate_key(&e) {
                AppError::EmailInUse
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<(), AppError> {
        let object_id = Self::parse_object_id(id)?;

        let mut set = Document::new();
        if let Some(name) = patch.name {
            set.insert("name", name);
        }
        if let Some(verified) = patch.email_verified {
            set.insert("email_verified", verified);
        }

        if set.is_empty() {
            // 변경할 필드가 없어도 존재 확인은 계약대로 수행
            return match self.find_by_id(id).await? {
                Some(_) => Ok(()),
                None => Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string())),
            };
        }

        let result = self
            .collection
            .update_one(doc! { "_id": object_id }, doc! { "$set": set })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let object_id = Self::parse_object_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    async fn search(&self, name: Option<&str>) -> Result<Vec<User>, AppError> {
        let filter = match name {
            Some(name) => doc! { "name": { "$regex": name, "$options": "i" } },
            None => doc! {},
        };

        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

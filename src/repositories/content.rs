//! 콘텐츠 엔티티 공용 리포지토리
//!
//! 일곱 엔티티 타입이 공유하는 CRUD 계약을 엔티티 타입으로 매개변수화한
//! 제네릭 리포지토리로 구현합니다. 엔티티별 어댑터는 타입 별칭이며,
//! 유스케이스는 리포지토리를 합성으로 보유합니다 (상속 체인 없음).

use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use futures_util::TryStreamExt;

use crate::db::Database;
use crate::domain::entities::content::{Category, Class, Course, Post, PostType, Subject};
use crate::errors::AppError;

/// 제네릭 리포지토리에 연결될 수 있는 콘텐츠 엔티티 계약
pub trait ContentEntity: Serialize + DeserializeOwned + Unpin + Send + Sync {
    /// MongoDB 컬렉션 이름
    const COLLECTION: &'static str;

    /// 검색 시 부분 일치 대상이 되는 필드
    const SEARCH_FIELD: &'static str = "name";

    fn id(&self) -> Option<ObjectId>;

    fn set_id(&mut self, id: ObjectId);
}

macro_rules! content_entity {
    ($entity:ty, $collection:literal) => {
        impl ContentEntity for $entity {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> Option<ObjectId> {
                self.id
            }

            fn set_id(&mut self, id: ObjectId) {
                self.id = Some(id);
            }
        }
    };
}

content_entity!(Category, "categories");
content_entity!(Class, "classes");
content_entity!(Course, "courses");
content_entity!(Subject, "subjects");
content_entity!(PostType, "post_types");

impl ContentEntity for Post {
    const COLLECTION: &'static str = "posts";
    const SEARCH_FIELD: &'static str = "title";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

/// 콘텐츠 엔티티 공용 MongoDB 리포지토리
///
/// 업데이트/삭제는 대상이 없으면 `NotFound`로 실패합니다.
/// 단일 문서 원자성 외의 트랜잭션 보장은 제공하지 않습니다.
pub struct ContentRepository<T: ContentEntity> {
    collection: Collection<T>,
}

impl<T: ContentEntity> ContentRepository<T> {
    /// 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection(T::COLLECTION),
        }
    }

    fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::BadRequest("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// ID로 엔티티 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 엔티티 저장 (ID는 저장소가 할당)
    pub async fn insert(&self, mut entity: T) -> Result<T, AppError> {
        let result = self
            .collection
            .insert_one(&entity)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(id) = result.inserted_id.as_object_id() {
            entity.set_id(id);
        }

        Ok(entity)
    }

    /// 엔티티 부분 업데이트 (`$set` 패치)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 엔티티가 없음
    pub async fn update(&self, id: &str, patch: Document) -> Result<(), AppError> {
        let object_id = Self::parse_object_id(id)?;

        let result = self
            .collection
            .update_one(doc! { "_id": object_id }, doc! { "$set": patch })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "{} 엔티티를 찾을 수 없습니다",
                T::COLLECTION
            )));
        }

        Ok(())
    }

    /// 엔티티 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 엔티티가 없음
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let object_id = Self::parse_object_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "{} 엔티티를 찾을 수 없습니다",
                T::COLLECTION
            )));
        }

        Ok(())
    }

    /// 검색 필드 부분 일치 검색 (필터 없으면 전체 조회)
    pub async fn search(&self, term: Option<&str>) -> Result<Vec<T>, AppError> {
        let filter = match term {
            Some(term) => doc! { T::SEARCH_FIELD: { "$regex": term, "$options": "i" } },
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

pub type CategoryRepository = ContentRepository<Category>;
pub type ClassRepository = ContentRepository<Class>;
pub type CourseRepository = ContentRepository<Course>;
pub type SubjectRepository = ContentRepository<Subject>;
pub type PostTypeRepository = ContentRepository<PostType>;
pub type PostRepository = ContentRepository<Post>;

//! 콘텐츠 엔티티 모듈
//!
//! 교육 콘텐츠를 구성하는 여섯 가지 엔티티를 정의합니다.
//! Category / Class / Course / Subject / PostType은 `{id, name, created_at}`
//! 형태의 이름 기반 엔티티이며, Post는 작성자와 분류 참조를 추가로 가집니다.
//! 생명주기는 순수 CRUD이며, 엔티티 간 불변식은 업데이트/삭제 시의
//! 존재 확인 외에는 없습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

macro_rules! named_entity {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $name {
            #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
            pub id: Option<ObjectId>,
            pub name: String,
            pub created_at: DateTime,
        }

        impl $name {
            /// 새 엔티티 생성 (ID는 저장 시 할당)
            pub fn new(name: String) -> Self {
                Self {
                    id: None,
                    name,
                    created_at: DateTime::now(),
                }
            }
        }
    };
}

named_entity!(
    /// 게시물 분류 카테고리
    Category
);
named_entity!(
    /// 수업 (학급) 단위
    Class
);
named_entity!(
    /// 강좌
    Course
);
named_entity!(
    /// 과목
    Subject
);
named_entity!(
    /// 게시물 유형 (공지, 자료, 질문 등)
    PostType
);

/// 게시물 엔티티
///
/// 작성자와 분류 엔티티들을 ID로 참조합니다. 참조 무결성은 생성/수정
/// 유스케이스의 존재 확인으로만 보장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub body: String,
    /// 작성자 사용자 ID
    pub author_id: ObjectId,
    pub category_id: ObjectId,
    pub subject_id: ObjectId,
    pub post_type_id: ObjectId,
    pub created_at: DateTime,
}

impl Post {
    pub fn new(
        title: String,
        body: String,
        author_id: ObjectId,
        category_id: ObjectId,
        subject_id: ObjectId,
        post_type_id: ObjectId,
    ) -> Self {
        Self {
            id: None,
            title,
            body,
            author_id,
            category_id,
            subject_id,
            post_type_id,
            created_at: DateTime::now(),
        }
    }
}

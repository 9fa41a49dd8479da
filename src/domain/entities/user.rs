//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일 인증이 필요한 로컬 계정 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 이메일은 저장 전에 소문자로 정규화되며, 저장소의 유니크 인덱스가
/// 중복을 최종적으로 차단합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 할당하는 식별자 (저장 전에는 None)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique, 소문자 정규화)
    pub email: String,
    /// 표시 이름
    pub name: String,
    /// 해시된 비밀번호 (평문은 절대 저장하지 않음)
    pub password_hash: String,
    /// 이메일 인증 여부
    pub email_verified: bool,
    /// 생성 시간 (생성 이후 불변)
    pub created_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 이메일 인증이 필요한 상태(`email_verified = false`)로 시작됩니다.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: None,
            email,
            name,
            password_hash,
            email_verified: false,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

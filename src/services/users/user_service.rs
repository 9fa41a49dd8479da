//! 사용자 서비스
//!
//! 회원가입과 이메일 인증 파이프라인을 구현합니다.
//! 프로바이더와 저장소를 합성으로 보유하며, 파이프라인의 어떤 단계든
//! 실패하면 즉시 중단하고 에러를 그대로 전파합니다 (보상 트랜잭션 없음).
//! 가입 도중 메일 발송이 실패하면 사용자 레코드는 미인증 상태로 남고,
//! 재발송은 이 파이프라인의 범위 밖입니다.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use log::info;
use validator::Validate;

use crate::domain::dto::users::{SignupRequest, UserResponse};
use crate::domain::entities::user::User;
use crate::domain::token::TokenType;
use crate::errors::AppError;
use crate::providers::hash::HashProvider;
use crate::providers::template::TemplateRenderer;
use crate::providers::token::TokenProvider;
use crate::repositories::users::{UserPatch, UserStore};
use crate::services::mail::{EmailMessage, MailService, Recipient};

/// 인증 메일 템플릿 이름
const VERIFICATION_TEMPLATE: &str = "email-verification";

/// 인증 메일 제목
const VERIFICATION_SUBJECT: &str = "Email verification";

/// 사용자 비즈니스 로직 서비스
pub struct UserService {
    store: Arc<dyn UserStore>,
    hash: Arc<HashProvider>,
    tokens: Arc<TokenProvider>,
    templates: Arc<TemplateRenderer>,
    mail: Arc<dyn MailService>,
    /// 인증 링크의 기반 URL (예: "https://api.example.com")
    server_url: String,
    /// 인증 토큰 유효 기간
    verify_expiry: Duration,
}

impl UserService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<dyn UserStore>,
        hash: Arc<HashProvider>,
        tokens: Arc<TokenProvider>,
        templates: Arc<TemplateRenderer>,
        mail: Arc<dyn MailService>,
        server_url: String,
        verify_expiry: Duration,
    ) -> Self {
        Self {
            store,
            hash,
            tokens,
            templates,
            mail,
            server_url: server_url.trim_end_matches('/').to_string(),
            verify_expiry,
        }
    }

    /// 회원가입 파이프라인
    ///
    /// 입력 검증 → 중복 확인 → 해싱 → 저장 → 토큰 발급 → 링크 조립
    /// → 템플릿 렌더링 → 메일 발송 순서로 진행합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 입력 형식이 유효하지 않음
    /// * `AppError::EmailInUse` - 이미 등록된 이메일
    /// * `AppError::ExternalServiceError` - 인증 메일 발송 실패
    pub async fn signup(&self, request: SignupRequest) -> Result<(), AppError> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        // 이메일 유니크 비교는 소문자 정규화 기준
        let email = request.email.trim().to_lowercase();
        let name = request.name.trim().to_string();

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AppError::EmailInUse);
        }

        let password_hash = self.hash.generate_hash(&request.password)?;

        let user = self
            .store
            .insert(User::new(email.clone(), name.clone(), password_hash))
            .await?;

        let token = self
            .tokens
            .sign(&email, TokenType::EmailVerify, self.verify_expiry)?;

        let link = format!(
            "{}/users/verify?token={}",
            self.server_url,
            urlencoding::encode(&token)
        );

        let mut variables = HashMap::new();
        variables.insert("link".to_string(), link);
        variables.insert("name".to_string(), name.clone());
        let body = self.templates.render(VERIFICATION_TEMPLATE, &variables)?;

        self.mail
            .send_mail(EmailMessage {
                to: Recipient { email, name },
                subject: VERIFICATION_SUBJECT.to_string(),
                body,
            })
            .await?;

        info!("✅ 회원가입 완료, 인증 메일 발송: {:?}", user.id_string());

        Ok(())
    }

    /// 이메일 인증 파이프라인
    ///
    /// 토큰 검증 후 해당 사용자를 인증 완료 상태로 만듭니다.
    /// 이미 인증된 사용자의 토큰 재사용은 성공으로 처리합니다 (멱등).
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` / `TokenExpired` / `InvalidTokenType`
    /// * `AppError::NotFound` - 토큰의 주체 사용자가 존재하지 않음
    pub async fn verify_email(&self, token: &str) -> Result<(), AppError> {
        let claims = self.tokens.verify(token, TokenType::EmailVerify)?;

        let user = self
            .store
            .find_by_email(&claims.sub)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        self.store.update(&id, UserPatch::verified()).await?;

        info!("✅ 이메일 인증 완료: {}", id);

        Ok(())
    }

    /// ID로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 사용자가 없음
    pub async fn get_user(&self, id: &str) -> Result<UserResponse, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 이름 부분 일치로 사용자 목록 조회 (필터 없으면 전체)
    pub async fn search_users(&self, name: Option<&str>) -> Result<Vec<UserResponse>, AppError> {
        let users = self.store.search(name).await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 사용자가 없음
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        self.store.delete(id).await
    }
}

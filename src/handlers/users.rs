//! 사용자 API 핸들러
//!
//! `/users` 스코프 아래의 회원가입/인증/조회 엔드포인트를 제공합니다.

use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::json;

use crate::domain::dto::users::{SignupRequest, UserSearchQuery, VerifyEmailQuery};
use crate::errors::AppError;
use crate::handlers::AppState;

/// 회원가입
///
/// `POST /users`
///
/// 성공 시 201을 반환하며, 인증 메일이 발송되었음을 의미합니다.
#[post("")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    state.users.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "인증 메일이 발송되었습니다"
    })))
}

/// 이메일 인증
///
/// `GET /users/verify?token=...`
///
/// 인증 메일의 링크가 호출하는 엔드포인트입니다. 이미 인증된 사용자의
/// 재호출도 200으로 응답합니다.
#[get("/verify")]
pub async fn verify_email(
    state: web::Data<AppState>,
    query: web::Query<VerifyEmailQuery>,
) -> Result<HttpResponse, AppError> {
    state.users.verify_email(&query.token).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "이메일 인증이 완료되었습니다"
    })))
}

/// 사용자 목록 조회 (이름 부분 일치 필터)
///
/// `GET /users?name=...`
#[get("")]
pub async fn search_users(
    state: web::Data<AppState>,
    query: web::Query<UserSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let users = state.users.search_users(query.name.as_deref()).await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회
///
/// `GET /users/{id}`
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.users.get_user(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제
///
/// `DELETE /users/{id}`
#[delete("/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.users.delete_user(&path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Duration;

    use crate::providers::hash::HashProvider;
    use crate::providers::template::TemplateRenderer;
    use crate::providers::token::TokenProvider;
    use crate::repositories::users::InMemoryUserStore;
    use crate::routes::configure_all_routes;
    use crate::services::mail::{EmailMessage, MailService};
    use crate::services::users::UserService;

    use super::*;

    struct NoopMailService;

    #[async_trait]
    impl MailService for NoopMailService {
        async fn send_mail(&self, _message: EmailMessage) -> Result<(), AppError> {
            Ok(())
        }
    }

    fn app_state() -> web::Data<AppState> {
        let mut templates = HashMap::new();
        templates.insert(
            "email-verification".to_string(),
            "<a href=\"{{link}}\">Verify</a>".to_string(),
        );

        let service = UserService::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(HashProvider::new(4)),
            Arc::new(TokenProvider::new("test-secret")),
            Arc::new(TemplateRenderer::from_templates(templates)),
            Arc::new(NoopMailService),
            "http://localhost:8080".to_string(),
            Duration::hours(2),
        );

        web::Data::new(AppState {
            users: Arc::new(service),
        })
    }

    fn signup_payload() -> serde_json::Value {
        json!({
            "email": "a@x.com",
            "name": "Alice",
            "password": "secret123"
        })
    }

    #[actix_web::test]
    async fn test_signup_returns_created() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(signup_payload())
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), 201);
    }

    #[actix_web::test]
    async fn test_duplicate_signup_returns_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .configure(configure_all_routes),
        )
        .await;

        let first = test::TestRequest::post()
            .uri("/users")
            .set_json(signup_payload())
            .to_request();
        test::call_service(&app, first).await;

        let second = test::TestRequest::post()
            .uri("/users")
            .set_json(signup_payload())
            .to_request();
        let response = test::call_service(&app, second).await;

        assert_eq!(response.status(), 400);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body.get("error").is_some());
    }

    #[actix_web::test]
    async fn test_verify_with_valid_token_returns_ok() {
        let state = app_state();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(configure_all_routes),
        )
        .await;

        let signup_request = test::TestRequest::post()
            .uri("/users")
            .set_json(signup_payload())
            .to_request();
        test::call_service(&app, signup_request).await;

        let token = TokenProvider::new("test-secret")
            .sign(
                "a@x.com",
                crate::domain::token::TokenType::EmailVerify,
                Duration::hours(2),
            )
            .unwrap();

        let request = test::TestRequest::get()
            .uri(&format!(
                "/users/verify?token={}",
                urlencoding::encode(&token)
            ))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), 200);
    }

    #[actix_web::test]
    async fn test_verify_with_garbage_token_returns_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/users/verify?token=garbage")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), 401);
    }

    #[actix_web::test]
    async fn test_get_missing_user_returns_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri(&format!(
                "/users/{}",
                mongodb::bson::oid::ObjectId::new().to_hex()
            ))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), 404);
    }
}

//! 라우트 구성 모듈
//!
//! 모든 엔드포인트를 한 곳에서 등록합니다.

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::handlers::users;

/// 서버 상태 확인 엔드포인트
///
/// `GET /health`
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "edu_content_backend"
    }))
}

/// 전체 라우트를 등록합니다.
///
/// `/users/verify`는 `/users/{id}`보다 먼저 등록되어야 경로가
/// ID 파라미터로 오인되지 않습니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check).service(
        web::scope("/users")
            .service(users::signup)
            .service(users::verify_email)
            .service(users::search_users)
            .service(users::get_user)
            .service(users::delete_user),
    );
}

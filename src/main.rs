//! 교육 콘텐츠 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 컴포넌트를 초기화합니다.
//! MongoDB 연결, SMTP 전송, 템플릿 로딩을 수행한 뒤 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use chrono::Duration;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use edu_content_backend::config::{
    MailConfig, PasswordConfig, ServerConfig, TemplateConfig, TokenConfig,
};
use edu_content_backend::db::Database;
use edu_content_backend::handlers::AppState;
use edu_content_backend::providers::hash::HashProvider;
use edu_content_backend::providers::template::TemplateRenderer;
use edu_content_backend::providers::token::TokenProvider;
use edu_content_backend::repositories::users::MongoUserStore;
use edu_content_backend::routes::configure_all_routes;
use edu_content_backend::services::mail::SmtpMailService;
use edu_content_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 교육 콘텐츠 백엔드 시작중...");

    let state = initialize_services().await;

    info!("✅ 모든 컴포넌트가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(state).await
}

/// 데이터베이스와 서비스 그래프를 초기화합니다
///
/// MongoDB에 연결하고 인덱스를 생성한 뒤, 프로바이더들을 설정값으로
/// 구성하여 사용자 서비스에 주입합니다.
///
/// # Panics
///
/// * MongoDB 연결 또는 인덱스 생성 실패 시
/// * SMTP 설정 또는 템플릿 로딩 실패 시
async fn initialize_services() -> web::Data<AppState> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.expect("데이터베이스 연결 실패");

    info!("✅ MongoDB 연결 성공");

    let user_store = Arc::new(MongoUserStore::new(&database));
    user_store
        .create_indexes()
        .await
        .expect("사용자 인덱스 생성 실패");

    let mail = SmtpMailService::new(&MailConfig::from_env()).expect("SMTP 전송 구성 실패");
    let templates =
        TemplateRenderer::from_dir(TemplateConfig::template_dir()).expect("템플릿 로딩 실패");

    let user_service = UserService::new(
        user_store,
        Arc::new(HashProvider::new(PasswordConfig::bcrypt_cost())),
        Arc::new(TokenProvider::new(TokenConfig::secret())),
        Arc::new(templates),
        Arc::new(mail),
        ServerConfig::public_url(),
        Duration::hours(TokenConfig::email_verify_expiry_hours()),
    );

    web::Data::new(AppState {
        users: Arc::new(user_service),
    })
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 에러 | HTTP Status |
//! |------|-------------|
//! | `BadRequest`, `EmailInUse` | 400 |
//! | `InvalidToken`, `TokenExpired`, `InvalidTokenType` | 401 |
//! | `Unauthorized`, `InvalidCredentials`, `EmailNotVerified` | 401 |
//! | `Forbidden` | 403 |
//! | `NotFound` | 404 |
//! | `ExternalServiceError` | 502 |
//! | `DatabaseError`, `InternalError` | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn signup(request: SignupRequest) -> Result<(), AppError> {
//!     if store.find_by_email(&request.email).await?.is_some() {
//!         return Err(AppError::EmailInUse);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 파이프라인의 각 단계에서 발생할 수 있는 모든 종류의 에러를 포괄하는
/// 열거형입니다. 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
///
/// 로그인 등 인증 플로우에서만 쓰이는 변형(`Unauthorized`, `InvalidCredentials`,
/// `EmailNotVerified`)도 공유 분류 체계의 일부로 함께 정의합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 잘못된 요청 (400 Bad Request)
    #[error("잘못된 요청입니다: {0}")]
    BadRequest(String),

    /// 이메일 중복 (400 Bad Request)
    #[error("이미 사용 중인 이메일입니다")]
    EmailInUse,

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("찾을 수 없습니다: {0}")]
    NotFound(String),

    /// 서명 또는 형식이 유효하지 않은 토큰 (401 Unauthorized)
    #[error("유효하지 않은 토큰입니다")]
    InvalidToken,

    /// 만료된 토큰 (401 Unauthorized)
    #[error("토큰이 만료되었습니다")]
    TokenExpired,

    /// 토큰 용도 불일치 (401 Unauthorized)
    #[error("토큰 타입이 일치하지 않습니다")]
    InvalidTokenType,

    /// 인증 실패 (401 Unauthorized)
    #[error("인증이 필요합니다")]
    Unauthorized,

    /// 이메일 또는 비밀번호 불일치 (401 Unauthorized)
    #[error("이메일 또는 비밀번호가 올바르지 않습니다")]
    InvalidCredentials,

    /// 이메일 미인증 계정 (401 Unauthorized)
    #[error("이메일 인증이 완료되지 않았습니다")]
    EmailNotVerified,

    /// 권한 부족 (403 Forbidden)
    #[error("접근 권한이 없습니다")]
    Forbidden,

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 메일 전송 등 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::BadRequest(_) | AppError::EmailInUse => StatusCode::BAD_REQUEST,
            AppError::InvalidToken
            | AppError::TokenExpired
            | AppError::InvalidTokenType
            | AppError::Unauthorized
            | AppError::InvalidCredentials
            | AppError::EmailNotVerified => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_bad_request_error_response() {
        let error = AppError::BadRequest("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_email_in_use_error_response() {
        let error = AppError::EmailInUse;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_token_errors_map_to_unauthorized() {
        for error in [
            AppError::InvalidToken,
            AppError::TokenExpired,
            AppError::InvalidTokenType,
            AppError::InvalidCredentials,
            AppError::EmailNotVerified,
        ] {
            assert_eq!(
                error.error_response().status(),
                actix_web::http::StatusCode::UNAUTHORIZED
            );
        }
    }

    #[test]
    fn test_forbidden_error_response() {
        let error = AppError::Forbidden;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_external_service_error_response() {
        let error = AppError::ExternalServiceError("SMTP unreachable".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}

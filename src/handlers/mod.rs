//! HTTP 요청 핸들러 계층
//!
//! 요청 파싱과 응답 변환만 담당하는 얇은 계층입니다.
//! 비즈니스 로직은 모두 서비스에 위임하고, 에러는 `AppError`의
//! `ResponseError` 매핑으로 일괄 변환됩니다.

use std::sync::Arc;

use crate::services::users::UserService;

pub mod users;

/// 핸들러가 공유하는 애플리케이션 상태
pub struct AppState {
    pub users: Arc<UserService>,
}

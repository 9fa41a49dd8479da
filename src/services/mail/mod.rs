//! 메일 발송 서비스
//!
//! 발송 계약은 trait로 두어 테스트에서 기록용 더블로 교체합니다.
//! 프로덕션 구현은 SMTP 비동기 전송을 사용하며, 전송 실패는
//! `ExternalServiceError`(502)로 변환되어 호출자에게 그대로 전파됩니다.
//! 재시도나 큐잉은 하지 않습니다 (at-most-once).

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::errors::AppError;

/// 메일 수신자
#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    pub email: String,
    pub name: String,
}

/// 발송할 메일 한 통
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: Recipient,
    pub subject: String,
    /// 렌더링 완료된 HTML 본문
    pub body: String,
}

/// 메일 발송 계약
#[async_trait]
pub trait MailService: Send + Sync {
    /// 메일 한 통을 발송합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - SMTP 전송 실패
    async fn send_mail(&self, message: EmailMessage) -> Result<(), AppError>;
}

/// SMTP 메일 발송 서비스
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailService {
    /// 메일 설정으로부터 SMTP 전송을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 발신자 주소 또는 릴레이 설정이 잘못됨
    pub fn new(config: &MailConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| AppError::InternalError(format!("SMTP 릴레이 설정 실패: {}", e)))?
            .port(config.port)
            .credentials(credentials)
            .build();

        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| AppError::InternalError(format!("발신자 주소 파싱 실패: {}", e)))?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send_mail(&self, message: EmailMessage) -> Result<(), AppError> {
        let to_address = message
            .to
            .email
            .parse()
            .map_err(|_| AppError::BadRequest("유효하지 않은 수신자 주소입니다".to_string()))?;
        let to = Mailbox::new(Some(message.to.name.clone()), to_address);

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&message.subject)
            .header(ContentType::TEXT_HTML)
            .body(message.body)
            .map_err(|e| AppError::InternalError(format!("메일 구성 실패: {}", e)))?;

        self.transport
            .send(email)
            .await
            .map(|_| ())
            .map_err(|e| AppError::ExternalServiceError(format!("메일 발송 실패: {}", e)))
    }
}

use crate::domain::model::SenderIdentity;
use crate::domain::ports::{MailSender, OutboundMessage};
use crate::utils::error::Result;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::time::Duration;

/// SMTPS 寄送通道。`relay` 預設走 TLS wrapper，對應原行為的 465 埠。
pub struct SmtpMailer {
    host: String,
    port: u16,
    timeout: Duration,
}

impl SmtpMailer {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }
}

#[async_trait]
impl MailSender for SmtpMailer {
    async fn send(&self, sender: &SenderIdentity, message: &OutboundMessage) -> Result<()> {
        let email = super::build_message(sender, message)?;

        // 每封信開一個 session，認證資訊來自寄件者身分
        let credentials = Credentials::new(sender.address.clone(), sender.credential.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)?
            .port(self.port)
            .credentials(credentials)
            .timeout(Some(self.timeout))
            .build();

        transport.send(email).await?;

        Ok(())
    }
}

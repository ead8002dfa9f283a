use crate::domain::model::SenderIdentity;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Rendered attachment handed to the mail port. Content is already the final
/// text; the transport only has to wrap it in MIME.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAttachment {
    pub filename: String,
    pub content: String,
    pub content_type: String,
}

/// One outbound notification, fully rendered by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
    pub attachment: Option<MessageAttachment>,
    pub personalization: Option<String>,
}

/// 郵件發送埠：讓 SMTP 與檔案輸出兩種實作可互換。
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, sender: &SenderIdentity, message: &OutboundMessage) -> Result<()>;
}

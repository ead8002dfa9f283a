use crate::domain::model::SenderIdentity;
use crate::domain::ports::{MailSender, OutboundMessage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// 不實際寄送，把組好的 MIME 訊息寫到輸出目錄供檢查。
pub struct FileMailer {
    output_dir: PathBuf,
}

impl FileMailer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl MailSender for FileMailer {
    async fn send(&self, sender: &SenderIdentity, message: &OutboundMessage) -> Result<()> {
        let email = super::build_message(sender, message)?;

        std::fs::create_dir_all(&self.output_dir)?;

        let stem = message
            .personalization
            .clone()
            .or_else(|| message.recipients.first().cloned())
            .unwrap_or_else(|| "message".to_string());
        let path = self.output_dir.join(format!("{}.eml", stem));

        std::fs::write(&path, email.formatted())?;
        tracing::info!("📄 Composed message written to {}", path.display());

        Ok(())
    }
}

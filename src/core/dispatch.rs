use crate::domain::model::{
    Assignment, DispatchFailure, DispatchSummary, Participant, SenderIdentity,
};
use crate::domain::ports::{MailSender, MessageAttachment, OutboundMessage};
use crate::utils::error::{Result, SantaError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const SUBJECT: &str = "Secret Santa";

/// 逐一渲染並寄送通知。抽獎結果與名單在寄送期間皆為唯讀。
pub struct Dispatcher<M: MailSender> {
    mailer: M,
    sender: SenderIdentity,
    spool_dir: PathBuf,
}

impl<M: MailSender> Dispatcher<M> {
    pub fn new(mailer: M, sender: SenderIdentity) -> Self {
        Self {
            mailer,
            sender,
            spool_dir: std::env::temp_dir(),
        }
    }

    pub fn with_spool_dir(
        mailer: M,
        sender: SenderIdentity,
        spool_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            mailer,
            sender,
            spool_dir: spool_dir.into(),
        }
    }

    /// Send one notification per participant in roster order. A failed
    /// delivery is recorded in the summary and the loop moves on; see
    /// DESIGN.md for the policy choice.
    pub async fn dispatch_all(
        &self,
        roster: &[Participant],
        assignment: &Assignment,
    ) -> Result<DispatchSummary> {
        let mut summary = DispatchSummary::default();

        for (giver_index, target_index) in assignment.pairs() {
            let giver = &roster[giver_index];
            let target = &roster[target_index];

            match self.dispatch_one(giver, target).await {
                Ok(()) => {
                    tracing::info!("📧 Notification sent to {}", giver.name);
                    summary.sent += 1;
                }
                Err(e) => {
                    tracing::error!("❌ Delivery to {} failed: {}", giver.name, e);
                    summary.failures.push(DispatchFailure {
                        name: giver.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(summary)
    }

    async fn dispatch_one(&self, giver: &Participant, target: &Participant) -> Result<()> {
        let artifact = self.write_target_sheet(giver, target)?;

        let content = std::fs::read_to_string(artifact.path()).map_err(|e| {
            SantaError::ResourceError {
                message: format!("cannot read artifact for {}: {}", giver.name, e),
            }
        })?;

        let message = OutboundMessage {
            recipients: vec![giver.address.clone()],
            subject: SUBJECT.to_string(),
            body: render_greeting(&giver.name),
            attachment: Some(MessageAttachment {
                filename: format!("{}.txt", giver.name),
                content,
                content_type: "text/plain".to_string(),
            }),
            personalization: Some(giver.name.clone()),
        };

        let send_result = self.mailer.send(&self.sender, &message).await;

        // 無論寄送成敗都移除暫存附件；清除失敗只記 log，不得蓋過寄送錯誤。
        if let Err(e) = artifact.close() {
            tracing::warn!(
                "Failed to remove transient artifact for {}: {}",
                giver.name,
                e
            );
        }

        send_result.map_err(|e| SantaError::DeliveryError {
            recipient: giver.address.clone(),
            reason: e.to_string(),
        })
    }

    // 把目標資訊寫進 spool 目錄下的暫存檔，之後作為附件內容讀回。
    fn write_target_sheet(
        &self,
        giver: &Participant,
        target: &Participant,
    ) -> Result<NamedTempFile> {
        let mut artifact = tempfile::Builder::new()
            .prefix(&format!("{}-", giver.name))
            .suffix(".txt")
            .tempfile_in(&self.spool_dir)
            .map_err(|e| SantaError::ResourceError {
                message: format!("cannot create artifact for {}: {}", giver.name, e),
            })?;

        artifact
            .write_all(render_target_sheet(target).as_bytes())
            .map_err(|e| SantaError::ResourceError {
                message: format!("cannot write artifact for {}: {}", giver.name, e),
            })?;

        Ok(artifact)
    }
}

/// Personalized greeting used as the message body.
pub fn render_greeting(name: &str) -> String {
    format!(
        "Hi {}!\n\nThis is your Secret Santa information.\n\nGood luck, and merry holidays!",
        name
    )
}

/// The attached target sheet: who to gift, where to reach them, and the
/// free-form wish-list entries joined in roster order.
pub fn render_target_sheet(target: &Participant) -> String {
    format!(
        "Name: {}\nEmail address: {}\nAdditional data: {}\n",
        target.name,
        target.address,
        target.metadata.join(", ")
    )
}

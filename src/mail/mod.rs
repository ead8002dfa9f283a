//! 寄送通道實作：正式流程走 SMTP，`--output` 模式改寫出 .eml 檔。

mod file;
mod smtp;

pub use file::FileMailer;
pub use smtp::SmtpMailer;

use crate::domain::model::SenderIdentity;
use crate::domain::ports::OutboundMessage;
use crate::utils::error::{Result, SantaError};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::Message;

/// Compose the MIME message both channels share: a plain-text greeting plus
/// the optional rendered attachment.
pub(crate) fn build_message(
    sender: &SenderIdentity,
    outbound: &OutboundMessage,
) -> Result<Message> {
    let mut builder = Message::builder()
        .from(sender.address.parse::<Mailbox>()?)
        .subject(outbound.subject.clone());

    for recipient in &outbound.recipients {
        builder = builder.to(recipient.parse::<Mailbox>()?);
    }

    let text = SinglePart::builder()
        .header(ContentType::TEXT_PLAIN)
        .body(outbound.body.clone());

    let message = match &outbound.attachment {
        Some(att) => {
            let content_type = ContentType::parse(&att.content_type).map_err(|e| {
                SantaError::DeliveryError {
                    recipient: outbound.recipients.join(", "),
                    reason: format!("bad attachment content type '{}': {}", att.content_type, e),
                }
            })?;

            let attachment =
                Attachment::new(att.filename.clone()).body(att.content.clone(), content_type);

            builder.multipart(MultiPart::mixed().singlepart(text).singlepart(attachment))?
        }
        None => builder.singlepart(text)?,
    };

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MessageAttachment;
    use tokio_test::assert_ok;

    fn sender() -> SenderIdentity {
        SenderIdentity {
            address: "santa@example.com".to_string(),
            credential: "app-password".to_string(),
        }
    }

    fn outbound() -> OutboundMessage {
        OutboundMessage {
            recipients: vec!["alice@example.com".to_string()],
            subject: "Secret Santa".to_string(),
            body: "Hi Alice!".to_string(),
            attachment: Some(MessageAttachment {
                filename: "Alice.txt".to_string(),
                content: "Name: Bob\n".to_string(),
                content_type: "text/plain".to_string(),
            }),
            personalization: Some("Alice".to_string()),
        }
    }

    #[test]
    fn test_build_message_with_attachment() {
        let message = tokio_test::assert_ok!(build_message(&sender(), &outbound()));
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();

        assert!(raw.contains("Subject: Secret Santa"));
        assert!(raw.contains("To: alice@example.com"));
        assert!(raw.contains("Alice.txt"));
        assert!(raw.contains("Name: Bob"));
    }

    #[test]
    fn test_build_message_without_attachment() {
        let mut plain = outbound();
        plain.attachment = None;

        let message = tokio_test::assert_ok!(build_message(&sender(), &plain));
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();

        assert!(raw.contains("Hi Alice!"));
        assert!(!raw.contains("multipart/mixed"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let mut bad = outbound();
        bad.recipients = vec!["not-an-address".to_string()];

        assert!(build_message(&sender(), &bad).is_err());
    }
}

pub mod dispatch;
pub mod draw;
pub mod engine;

pub use crate::domain::model::{
    Assignment, DispatchFailure, DispatchSummary, Participant, SenderIdentity,
};
pub use crate::domain::ports::{MailSender, MessageAttachment, OutboundMessage};
pub use crate::utils::error::Result;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use secret_santa::core::{MailSender, OutboundMessage};
use secret_santa::domain::model::SenderIdentity;
use secret_santa::utils::error::SantaError;
use secret_santa::{RosterConfig, SantaEngine};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct RecordingMailer {
    messages: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl RecordingMailer {
    async fn sent(&self) -> Vec<OutboundMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send(
        &self,
        _sender: &SenderIdentity,
        message: &OutboundMessage,
    ) -> secret_santa::Result<()> {
        self.messages.lock().await.push(message.clone());
        Ok(())
    }
}

const CONFIG: &str = r#"
[sender]
address = "santa@example.com"
credential = "app-password"

[[participants]]
name = "Alice"
address = "alice@example.com"
metadata = ["likes tea", "size M"]

[[participants]]
name = "Bob"
address = "bob@example.com"
metadata = ["board games"]

[[participants]]
name = "Carol"
address = "carol@example.com"
"#;

fn target_name(message: &OutboundMessage) -> String {
    let attachment = message.attachment.as_ref().unwrap();
    let line = attachment.content.lines().next().unwrap();
    line.strip_prefix("Name: ").unwrap().to_string()
}

#[tokio::test]
async fn test_end_to_end_draw_and_dispatch() {
    let (sender, roster) = RosterConfig::from_toml_str(CONFIG).unwrap().into_parts();
    let mailer = RecordingMailer::default();
    let engine = SantaEngine::new(roster.clone(), sender, mailer.clone());

    let mut rng = StdRng::seed_from_u64(42);
    let summary = engine.run(&mut rng).await.unwrap();

    assert_eq!(summary.sent, roster.len());
    assert!(summary.all_sent());

    let messages = mailer.sent().await;
    assert_eq!(messages.len(), roster.len());

    // 每位參加者一封通知，附件裡的目標絕不是自己
    for (participant, message) in roster.iter().zip(messages.iter()) {
        assert_eq!(message.recipients, vec![participant.address.clone()]);
        assert_eq!(message.subject, "Secret Santa");
        assert!(message.body.contains(&format!("Hi {}!", participant.name)));
        assert_ne!(target_name(message), participant.name);
    }
}

#[tokio::test]
async fn test_every_participant_gives_and_receives_exactly_once() {
    let (sender, roster) = RosterConfig::from_toml_str(CONFIG).unwrap().into_parts();
    let mailer = RecordingMailer::default();
    let engine = SantaEngine::new(roster.clone(), sender, mailer.clone());

    let mut rng = StdRng::seed_from_u64(7);
    engine.run(&mut rng).await.unwrap();

    let messages = mailer.sent().await;

    let mut recipients: Vec<String> = messages
        .iter()
        .flat_map(|m| m.recipients.iter().cloned())
        .collect();
    recipients.sort();
    assert_eq!(
        recipients,
        vec!["alice@example.com", "bob@example.com", "carol@example.com"]
    );

    let mut targets: Vec<String> = messages.iter().map(target_name).collect();
    targets.sort();
    assert_eq!(targets, vec!["Alice", "Bob", "Carol"]);
}

#[tokio::test]
async fn test_degenerate_roster_aborts_before_any_send() {
    let config = r#"
[sender]
address = "santa@example.com"
credential = "app-password"

[[participants]]
name = "Alice"
address = "alice@example.com"
"#;

    let (sender, roster) = RosterConfig::from_toml_str(config).unwrap().into_parts();
    let mailer = RecordingMailer::default();
    let engine = SantaEngine::new(roster, sender, mailer.clone());

    let mut rng = StdRng::seed_from_u64(1);
    let err = engine.run(&mut rng).await.unwrap_err();

    assert!(matches!(err, SantaError::DegenerateRosterError { size: 1 }));
    assert!(mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_seeded_runs_are_reproducible() {
    let (sender, roster) = RosterConfig::from_toml_str(CONFIG).unwrap().into_parts();

    let mut outcomes = Vec::new();
    for _ in 0..2 {
        let mailer = RecordingMailer::default();
        let engine = SantaEngine::new(roster.clone(), sender.clone(), mailer.clone());

        let mut rng = StdRng::seed_from_u64(99);
        engine.run(&mut rng).await.unwrap();

        let targets: Vec<String> = mailer.sent().await.iter().map(target_name).collect();
        outcomes.push(targets);
    }

    assert_eq!(outcomes[0], outcomes[1]);
}

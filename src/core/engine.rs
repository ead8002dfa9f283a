use crate::core::dispatch::Dispatcher;
use crate::core::draw;
use crate::domain::model::{DispatchSummary, Participant, SenderIdentity};
use crate::domain::ports::MailSender;
use crate::utils::error::Result;
use rand::Rng;

/// 引擎：先抽獎、再寄送，兩階段循序執行。
pub struct SantaEngine<M: MailSender> {
    roster: Vec<Participant>,
    dispatcher: Dispatcher<M>,
}

impl<M: MailSender> SantaEngine<M> {
    pub fn new(roster: Vec<Participant>, sender: SenderIdentity, mailer: M) -> Self {
        Self {
            roster,
            dispatcher: Dispatcher::new(mailer, sender),
        }
    }

    pub fn with_dispatcher(roster: Vec<Participant>, dispatcher: Dispatcher<M>) -> Self {
        Self { roster, dispatcher }
    }

    /// Draw once, then notify every participant. The RNG is injected so a
    /// seeded run is reproducible in tests.
    pub async fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DispatchSummary> {
        tracing::info!(
            "Drawing assignment for {} participants...",
            self.roster.len()
        );
        let assignment = draw::generate_assignment(rng, self.roster.len())?;

        tracing::info!("Draw complete, dispatching notifications...");
        let summary = self
            .dispatcher
            .dispatch_all(&self.roster, &assignment)
            .await?;

        tracing::info!(
            "Dispatched {} notification(s), {} failure(s)",
            summary.sent,
            summary.failures.len()
        );

        Ok(summary)
    }
}

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// One message in the support chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    Visitor,
    Attendant,
}

/// Simulated chat attendant.
///
/// Replies are canned and keyword-matched; the typing delay runs as an
/// explicit task so a pending reply can be cancelled instead of leaking a
/// fire-and-forget timer.
pub struct ChatSimulator {
    typing_delay: Duration,
}

impl ChatSimulator {
    pub fn new() -> Self {
        Self::with_typing_delay(Duration::from_millis(1200))
    }

    pub fn with_typing_delay(typing_delay: Duration) -> Self {
        Self { typing_delay }
    }

    /// Start a reply to an incoming visitor message. The reply arrives after
    /// the simulated typing delay unless the task is cancelled first.
    pub fn reply(&self, incoming: &str) -> ReplyTask {
        let body = canned_reply(incoming).to_string();
        let delay = self.typing_delay;
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        debug!("Attendant typing, reply due in {delay:?}");
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => Some(ChatMessage {
                    sender: Sender::Attendant,
                    body,
                    sent_at: Utc::now(),
                }),
                _ = cancel_rx.changed() => {
                    info!("Pending chat reply cancelled");
                    None
                }
            }
        });

        ReplyTask { handle, cancel_tx }
    }
}

impl Default for ChatSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a reply that has not arrived yet
pub struct ReplyTask {
    handle: JoinHandle<Option<ChatMessage>>,
    cancel_tx: watch::Sender<bool>,
}

impl ReplyTask {
    /// Cancel the pending reply. `join` will then resolve to `None`.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }

    /// Wait for the reply, or `None` when it was cancelled first.
    pub async fn join(self) -> Result<Option<ChatMessage>> {
        self.handle.await.context("Chat reply task panicked")
    }
}

fn canned_reply(incoming: &str) -> &'static str {
    let incoming = incoming.to_lowercase();
    if incoming.contains("preço") || incoming.contains("preco") || incoming.contains("valor") {
        "O valor anunciado já é o final, mas o proprietário avalia propostas. Quer que eu encaminhe a sua?"
    } else if incoming.contains("visita") || incoming.contains("ver") {
        "Claro! Temos horários disponíveis esta semana. Qual dia fica melhor para você?"
    } else if incoming.contains("financiamento") || incoming.contains("financiar") {
        "Trabalhamos com os principais bancos. Posso simular um financiamento com entrada a partir de 20%."
    } else {
        "Olá! Sou o atendente virtual. Posso ajudar com valores, visitas ou financiamento."
    }
}

//! Cloneable façade for feeding the state manager.
//!
//! [`StateHandle`] hides channel plumbing. Enqueueing never waits;
//! [`StateHandle::snapshot`] waits until everything enqueued before it
//! has been applied.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use super::worker::Command;
use crate::core::{EngineError, GameState, Mutation, Result};

/// Producer side of the state manager queue.
#[derive(Clone)]
pub struct StateHandle {
    command_tx: mpsc::UnboundedSender<Command>,
    snapshot_tx: broadcast::Sender<Arc<GameState>>,
}

impl StateHandle {
    pub(crate) fn new(
        command_tx: mpsc::UnboundedSender<Command>,
        snapshot_tx: broadcast::Sender<Arc<GameState>>,
    ) -> Self {
        Self {
            command_tx,
            snapshot_tx,
        }
    }

    /// Queue one mutation.
    pub fn enqueue(&self, mutation: Mutation) -> Result<()> {
        self.command_tx
            .send(Command::Apply(mutation))
            .map_err(|_| EngineError::ManagerClosed)
    }

    /// Queue mutations back to back, in iteration order.
    pub fn enqueue_all(&self, mutations: impl IntoIterator<Item = Mutation>) -> Result<()> {
        for mutation in mutations {
            self.enqueue(mutation)?;
        }
        Ok(())
    }

    /// The state after everything queued so far.
    pub async fn snapshot(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Snapshot { reply: reply_tx })
            .map_err(|_| EngineError::ManagerClosed)?;

        reply_rx.await.map_err(EngineError::ReplyDropped)
    }

    /// Stream of snapshots, one per applied `GetState`.
    ///
    /// Slow receivers lag rather than stall the worker.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<GameState>> {
        self.snapshot_tx.subscribe()
    }

    /// Live snapshot subscribers.
    #[must_use]
    pub fn viewer_count(&self) -> usize {
        self.snapshot_tx.receiver_count()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.command_tx.is_closed()
    }
}

//! State manager worker that owns the authoritative [`GameState`].
//!
//! Receives mutations from [`StateHandle`]s, applies them strictly in
//! arrival order, and publishes a snapshot every time it applies a
//! `GetState`.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use super::handle::StateHandle;
use crate::core::{GameState, Mutation, ShuffleSource};

/// Commands that can be sent to the state manager.
pub enum Command {
    /// Apply one mutation.
    Apply(Mutation),
    /// Reply with the state once everything queued ahead has been applied.
    Snapshot { reply: oneshot::Sender<GameState> },
}

/// Single consumer of the mutation queue.
pub struct StateManager {
    state: GameState,
    source: ShuffleSource,
    command_rx: mpsc::UnboundedReceiver<Command>,
    snapshot_tx: broadcast::Sender<Arc<GameState>>,
}

impl StateManager {
    pub fn new(
        state: GameState,
        source: ShuffleSource,
        command_rx: mpsc::UnboundedReceiver<Command>,
        snapshot_tx: broadcast::Sender<Arc<GameState>>,
    ) -> Self {
        Self {
            state,
            source,
            command_rx,
            snapshot_tx,
        }
    }

    /// Spawn a manager on the current Tokio runtime.
    ///
    /// The task ends once every handle has been dropped and yields the
    /// final state.
    pub fn spawn(
        state: GameState,
        source: ShuffleSource,
        snapshot_buffer: usize,
    ) -> (StateHandle, JoinHandle<GameState>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, _) = broadcast::channel(snapshot_buffer.max(1));

        let manager = Self::new(state, source, command_rx, snapshot_tx.clone());
        let task = tokio::spawn(manager.run());

        (StateHandle::new(command_tx, snapshot_tx), task)
    }

    /// Main worker loop.
    pub async fn run(mut self) -> GameState {
        while let Some(command) = self.command_rx.recv().await {
            self.handle_command(command);
        }
        debug!(target: "session::worker", actions = self.state.actions.len(), "state manager stopped");
        self.state
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Apply(mutation) => self.apply(mutation),
            Command::Snapshot { reply } => {
                let _ = reply.send(self.state.clone());
            }
        }
    }

    fn apply(&mut self, mutation: Mutation) {
        let publish = mutation.is_get_state();
        trace!(target: "session::worker", ?mutation, "applying mutation");

        if let Err(error) = self.state.apply(mutation, &mut self.source) {
            warn!(target: "session::worker", kind = ?error.kind(), %error, "mutation skipped");
        }

        if publish {
            // No subscribers is not an error; the snapshot is simply dropped.
            let _ = self.snapshot_tx.send(Arc::new(self.state.clone()));
        }
    }
}

//! Game sessions: the rules engine wired to a state manager task.
//!
//! ## Key Types
//!
//! - `StateManager`: Tokio task that owns the game state and applies
//!   mutations one at a time, in submission order
//! - `StateHandle`: Cloneable producer side; enqueue, snapshot, subscribe
//! - `GameSession`: One game; turns client action strings into queued
//!   mutations
//!
//! Transport is out of scope. A host accepts connections, maps each to
//! a seat, forwards action strings to [`GameSession::submit_seat`], and
//! fans out what [`GameSession::subscribe`] yields.

mod handle;
mod worker;

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub use handle::StateHandle;
pub use worker::{Command, StateManager};

use crate::cards::Catalog;
use crate::core::{EngineError, GameConfig, GameState, Mutation, PlayerId, Result, ShuffleSource};
use crate::rules::{Resolution, RulesEngine};

/// One running game.
pub struct GameSession {
    engine: RulesEngine,
    handle: StateHandle,
    worker: JoinHandle<GameState>,
}

impl GameSession {
    /// Set up a fresh game and queue its opening mutations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: GameConfig, catalog: Arc<Catalog>) -> Result<Self> {
        let state = GameState::setup(&catalog, &config);
        let source = ShuffleSource::from_seed(config.shuffle_seed);
        let snapshot_buffer = config.snapshot_buffer;
        let engine = RulesEngine::new(catalog, config);

        let (handle, worker) = StateManager::spawn(state, source, snapshot_buffer);
        handle.enqueue_all(engine.prepare())?;

        info!(
            target: "session",
            cards = engine.catalog().len(),
            seeded = engine.config().shuffle_seed.is_some(),
            "game session started"
        );
        Ok(Self { engine, handle, worker })
    }

    /// A session over the standard catalog with default settings.
    pub fn standard() -> Result<Self> {
        Self::start(GameConfig::default(), Catalog::shared())
    }

    #[must_use]
    pub fn handle(&self) -> &StateHandle {
        &self.handle
    }

    #[must_use]
    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    /// Handle one client action from `player`.
    ///
    /// The action is resolved against a snapshot taken after everything
    /// already queued, and its mutations are queued before this returns.
    /// A rejected action still queues a `GetState`; the error is in the
    /// returned resolution's `outcome`.
    pub async fn submit(&mut self, player: PlayerId, action: &str) -> Result<Resolution> {
        let state = self.handle.snapshot().await?;
        let resolution = self.engine.handle(action, player, &state);
        self.handle.enqueue_all(resolution.mutations.iter().cloned())?;
        Ok(resolution)
    }

    /// Like [`submit`](Self::submit), for a raw wire seat (1 or 2).
    ///
    /// An unknown seat is rejected like any other bad input: nothing
    /// changes and a fresh snapshot is still published.
    pub async fn submit_seat(&mut self, seat: u8, action: &str) -> Result<Resolution> {
        match PlayerId::from_seat(seat) {
            Ok(player) => self.submit(player, action).await,
            Err(error) => {
                warn!(target: "session", seat, action, %error, "action from unknown seat");
                self.handle.enqueue(Mutation::GetState)?;
                Ok(Resolution {
                    mutations: vec![Mutation::GetState],
                    outcome: Err(error),
                })
            }
        }
    }

    /// The state after everything queued so far.
    pub async fn snapshot(&self) -> Result<GameState> {
        self.handle.snapshot().await
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<GameState>> {
        self.handle.subscribe()
    }

    /// Subscribe a new viewer and publish a snapshot for them.
    pub fn register_viewer(&self) -> Result<broadcast::Receiver<Arc<GameState>>> {
        let receiver = self.handle.subscribe();
        self.handle.enqueue(Mutation::GetState)?;
        debug!(target: "session", viewers = self.handle.viewer_count(), "viewer registered");
        Ok(receiver)
    }

    /// Stop accepting input and wait for the queue to drain.
    ///
    /// Returns the final state. Waits for any cloned [`StateHandle`]s to
    /// be dropped as well.
    pub async fn shutdown(self) -> Result<GameState> {
        drop(self.handle);
        let state = self.worker.await.map_err(EngineError::WorkerJoin)?;
        info!(target: "session", actions = state.actions.len(), "game session stopped");
        Ok(state)
    }
}

//! Preview actor: a Tokio task that owns one exam configuration and keeps
//! a seating plan for it up to date.
//!
//! Edits arrive over an mpsc channel and are applied immediately. The
//! engine is re-run once no edit has arrived for the configured debounce
//! window, and the new plan is published on a watch channel. Nothing is
//! shared with callers except through those two channels.
//!
//! # Debounce loop
//!
//! The actor waits on two things at once:
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         cmd = receiver.recv() => { /* apply, push the deadline out */ }
//!         _ = sleep_until(due), if due.is_some() => { /* recompute */ }
//!     }
//! }
//! ```
//!
//! Every accepted edit moves `due` to now plus the debounce window, so a
//! steady stream of edits keeps sliding the deadline and the timer branch
//! only wins once the stream pauses. While nothing is pending the `if`
//! guard disables the timer branch entirely and the loop is idle on
//! `recv()` alone.

use std::sync::Arc;

use seatforge_engine::{SeatingEngine, SeatingPlan};
use seatforge_model::{ExamConfig, ModelError};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{self, Instant};

use crate::{LayoutEdit, PreviewConfig, PreviewError};

/// A published plan and the recompute that produced it.
#[derive(Debug, Clone)]
pub struct PlanUpdate {
    /// 0 for the plan computed at spawn, then +1 per recompute.
    pub revision: u64,
    pub plan: Arc<SeatingPlan>,
}

/// A consistent view of the configuration and its plan.
#[derive(Debug, Clone)]
pub struct PreviewSnapshot {
    pub revision: u64,
    pub config: ExamConfig,
    pub plan: Arc<SeatingPlan>,
}

/// Commands sent to a preview actor.
pub(crate) enum PreviewCommand {
    Edit {
        edit: LayoutEdit,
        reply: oneshot::Sender<Result<(), ModelError>>,
    },

    /// Swap in a whole new configuration (e.g. reloaded from storage).
    ReplaceConfig { config: ExamConfig },

    /// Flush any pending recompute and return the current state.
    Snapshot {
        reply: oneshot::Sender<PreviewSnapshot>,
    },

    Shutdown,
}

/// Handle to a running preview actor.
///
/// Cheap to clone: an `mpsc::Sender` plus a `watch::Receiver`.
#[derive(Clone)]
pub struct PreviewHandle {
    sender: mpsc::Sender<PreviewCommand>,
    plans: watch::Receiver<PlanUpdate>,
}

impl PreviewHandle {
    /// Spawns a preview actor for `config` on the current Tokio runtime.
    ///
    /// The first plan is computed before this returns.
    pub fn spawn(config: ExamConfig, preview: PreviewConfig) -> Self {
        spawn_preview(config, preview)
    }

    /// Applies an edit. Returns once the edit is applied (or rejected);
    /// the matching plan follows after the debounce window.
    pub async fn edit(&self, edit: LayoutEdit) -> Result<(), PreviewError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(PreviewCommand::Edit {
                edit,
                reply: reply_tx,
            })
            .await
            .map_err(|_| PreviewError::Unavailable)?;
        reply_rx.await.map_err(|_| PreviewError::Unavailable)??;
        Ok(())
    }

    /// Replaces the whole configuration.
    pub async fn replace_config(&self, config: ExamConfig) -> Result<(), PreviewError> {
        self.sender
            .send(PreviewCommand::ReplaceConfig { config })
            .await
            .map_err(|_| PreviewError::Unavailable)
    }

    /// Returns the current configuration and an up-to-date plan,
    /// recomputing first if edits are pending.
    pub async fn snapshot(&self) -> Result<PreviewSnapshot, PreviewError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(PreviewCommand::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| PreviewError::Unavailable)?;
        reply_rx.await.map_err(|_| PreviewError::Unavailable)
    }

    /// Subscribes to plan updates.
    pub fn subscribe(&self) -> watch::Receiver<PlanUpdate> {
        self.plans.clone()
    }

    /// The most recently published plan, without waiting.
    pub fn current(&self) -> PlanUpdate {
        self.plans.borrow().clone()
    }

    /// Tells the actor to stop.
    pub async fn shutdown(&self) -> Result<(), PreviewError> {
        self.sender
            .send(PreviewCommand::Shutdown)
            .await
            .map_err(|_| PreviewError::Unavailable)
    }
}

/// The internal actor state. Runs inside a Tokio task.
struct PreviewActor {
    config: ExamConfig,
    settings: PreviewConfig,
    engine: SeatingEngine,
    revision: u64,
    plan: Arc<SeatingPlan>,
    /// When set, a recompute is due at this instant.
    due: Option<Instant>,
    receiver: mpsc::Receiver<PreviewCommand>,
    publisher: watch::Sender<PlanUpdate>,
}

impl PreviewActor {
    /// Main loop. Ends on `Shutdown` or when every handle has been dropped.
    ///
    /// `select!` polls both branches on each turn and runs whichever is
    /// ready first; the losing future is dropped. Dropping a `sleep_until`
    /// is free, and a fresh one is built from `self.due` on the next turn,
    /// so a deadline moved by an edit takes effect immediately.
    async fn run(mut self) {
        tracing::info!(rooms = self.config.rooms.len(), "preview actor started");

        loop {
            let due = self.due;
            tokio::select! {
                cmd = self.receiver.recv() => {
                    let Some(cmd) = cmd else { break };
                    if !self.handle(cmd) {
                        break;
                    }
                }
                // The guard is checked before the future is polled, so the
                // fallback instant is never actually slept on.
                _ = time::sleep_until(due.unwrap_or_else(Instant::now)), if due.is_some() => {
                    self.recompute();
                }
            }
        }

        tracing::info!(revision = self.revision, "preview actor stopped");
    }

    /// Handles one command. Returns `false` when the actor should stop.
    fn handle(&mut self, cmd: PreviewCommand) -> bool {
        match cmd {
            PreviewCommand::Edit { edit, reply } => {
                let result = self.handle_edit(edit);
                let _ = reply.send(result);
            }
            PreviewCommand::ReplaceConfig { config } => {
                tracing::debug!(
                    batches = config.batches.len(),
                    rooms = config.rooms.len(),
                    "configuration replaced"
                );
                self.config = config;
                self.schedule();
            }
            PreviewCommand::Snapshot { reply } => {
                if self.due.is_some() {
                    self.recompute();
                }
                let _ = reply.send(PreviewSnapshot {
                    revision: self.revision,
                    config: self.config.clone(),
                    plan: Arc::clone(&self.plan),
                });
            }
            PreviewCommand::Shutdown => {
                tracing::info!("preview shutting down");
                return false;
            }
        }
        true
    }

    fn handle_edit(&mut self, edit: LayoutEdit) -> Result<(), ModelError> {
        tracing::debug!(?edit, "applying edit");
        // Apply to a copy so a rejected edit leaves no partial change.
        let mut next = self.config.clone();
        if let Err(e) = edit.apply(&mut next) {
            tracing::warn!(error = %e, "edit rejected");
            return Err(e);
        }
        self.config = next;
        self.schedule();
        Ok(())
    }

    /// Pushes the recompute deadline out by one debounce window.
    fn schedule(&mut self) {
        self.due = Some(Instant::now() + self.settings.effective_debounce());
    }

    fn recompute(&mut self) {
        self.due = None;
        self.revision += 1;
        self.plan = Arc::new(self.engine.compute(&self.config));
        tracing::debug!(
            revision = self.revision,
            seated = self.plan.seated_count(),
            "preview recomputed"
        );
        // Send fails only when every receiver is gone, including the
        // handle's own; nothing to publish to then.
        let _ = self.publisher.send(PlanUpdate {
            revision: self.revision,
            plan: Arc::clone(&self.plan),
        });
    }
}

/// Spawns a new preview actor task and returns a handle to it.
pub(crate) fn spawn_preview(config: ExamConfig, settings: PreviewConfig) -> PreviewHandle {
    let engine = SeatingEngine::new();
    let plan = Arc::new(engine.compute(&config));
    let (tx, rx) = mpsc::channel(settings.channel_size.max(1));
    let (publisher, plans) = watch::channel(PlanUpdate {
        revision: 0,
        plan: Arc::clone(&plan),
    });

    let actor = PreviewActor {
        config,
        settings,
        engine,
        revision: 0,
        plan,
        due: None,
        receiver: rx,
        publisher,
    };

    tokio::spawn(actor.run());

    PreviewHandle { sender: tx, plans }
}

//! Runs a controller on its own task, fed by a command queue.

use super::{GameSessionController, SessionSnapshot};
use crate::gateway::BackendGateway;
use anyhow::{Context, Result};
use proset_cards::SlotIndex;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// A player action, mapped 1:1 onto a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a fresh game.
    Restart,
    /// Ask for a hint.
    Solve,
    /// Submit the selected cards.
    Submit,
    /// Flip selection of a slot.
    Toggle(SlotIndex),
}

/// Handle to a controller running on a background task.
///
/// The task initializes the game, then applies commands strictly in
/// arrival order: a command sent while another is in flight waits its
/// turn instead of interleaving with it.
#[derive(Debug)]
pub struct SessionHandle<G> {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
    task: JoinHandle<GameSessionController<G>>,
}

impl<G: BackendGateway + 'static> SessionHandle<G> {
    /// Spawns the controller task and starts the first game.
    #[instrument(skip(controller))]
    pub fn spawn(mut controller: GameSessionController<G>) -> Self {
        let snapshots = controller.subscribe();
        let (commands, mut queue) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            controller.initialize().await;
            while let Some(command) = queue.recv().await {
                debug!(?command, "Applying command");
                match command {
                    Command::Restart => {
                        controller.restart().await;
                    }
                    Command::Solve => {
                        controller.request_solve().await;
                    }
                    Command::Submit => {
                        controller.submit_selection().await;
                    }
                    Command::Toggle(index) => {
                        controller.toggle_selection(index);
                    }
                }
            }
            info!("Command queue closed, session task ending");
            controller
        });

        Self {
            commands,
            snapshots,
            task,
        }
    }

    /// Queues a command.
    pub fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .context("Session task is no longer running")
    }

    /// Latest published state.
    pub fn current(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Returns a receiver for state changes.
    pub fn snapshots(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Closes the queue, waits for queued commands to finish, and returns
    /// the controller.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<GameSessionController<G>> {
        drop(self.commands);
        self.task.await.context("Session task panicked")
    }
}

//! Single-task dialogue worker.
//!
//! The engine is owned by one tokio task that processes commands strictly
//! one after another, so two handlers never interleave mid-mutation and no
//! locks are needed. Transports talk to it through a cloneable
//! [`DialogueHandle`]; each request carries a `oneshot` for the answer.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use worklog_types::entry::{LogEntry, UserId};
use worklog_types::error::DialogueError;
use worklog_types::event::Event;
use worklog_types::reply::Reply;

use crate::category::CategoryRepository;

use super::engine::DialogueEngine;
use super::summary::render_summary;

/// Buffer size for the worker's command queue.
const COMMAND_BUFFER: usize = 256;

enum Command {
    Handle {
        user: UserId,
        event: Event,
        respond: oneshot::Sender<Result<Option<Reply>, DialogueError>>,
    },
    Entries {
        user: UserId,
        respond: oneshot::Sender<Vec<LogEntry>>,
    },
    Categories {
        respond: oneshot::Sender<Result<Vec<String>, DialogueError>>,
    },
}

/// Cloneable sender side of the dialogue worker.
#[derive(Clone)]
pub struct DialogueHandle {
    tx: mpsc::Sender<Command>,
}

impl DialogueHandle {
    /// Apply an event for `user` and wait for the reply.
    pub async fn handle(&self, user: UserId, event: Event) -> Result<Option<Reply>, DialogueError> {
        let (respond, rx) = oneshot::channel();
        self.send(Command::Handle {
            user,
            event,
            respond,
        })
        .await?;
        rx.await.map_err(|_| worker_gone())?
    }

    /// Snapshot of `user`'s entries.
    pub async fn entries(&self, user: UserId) -> Result<Vec<LogEntry>, DialogueError> {
        let (respond, rx) = oneshot::channel();
        self.send(Command::Entries { user, respond }).await?;
        rx.await.map_err(|_| worker_gone())
    }

    /// Rendered summary of `user`'s entries (empty string if none).
    pub async fn summary(&self, user: UserId) -> Result<String, DialogueError> {
        Ok(render_summary(&self.entries(user).await?))
    }

    /// Current category list.
    pub async fn categories(&self) -> Result<Vec<String>, DialogueError> {
        let (respond, rx) = oneshot::channel();
        self.send(Command::Categories { respond }).await?;
        rx.await.map_err(|_| worker_gone())?
    }

    async fn send(&self, command: Command) -> Result<(), DialogueError> {
        self.tx.send(command).await.map_err(|_| worker_gone())
    }
}

fn worker_gone() -> DialogueError {
    DialogueError::WorkerUnavailable("worker task has stopped".to_string())
}

/// Move `engine` onto its own task and return a handle to it.
///
/// The task exits once every handle has been dropped.
pub fn spawn_dialogue_worker<R>(engine: DialogueEngine<R>) -> (DialogueHandle, JoinHandle<()>)
where
    R: CategoryRepository + 'static,
{
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    let task = tokio::spawn(run(engine, rx));
    (DialogueHandle { tx }, task)
}

async fn run<R: CategoryRepository>(mut engine: DialogueEngine<R>, mut rx: mpsc::Receiver<Command>) {
    info!("dialogue worker started");
    while let Some(command) = rx.recv().await {
        match command {
            Command::Handle {
                user,
                event,
                respond,
            } => {
                let result = engine.handle(user, event).await;
                if respond.send(result).is_err() {
                    debug!(%user, "caller dropped before reply");
                }
            }
            Command::Entries { user, respond } => {
                let _ = respond.send(engine.records().list(user).to_vec());
            }
            Command::Categories { respond } => {
                let result = engine.categories().load().await.map_err(DialogueError::from);
                let _ = respond.send(result);
            }
        }
    }
    info!("dialogue worker stopped");
}

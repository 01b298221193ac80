use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::client::{ClientSettings, LookupBackend, ReqwestBackend};
use crate::{EngineEvent, Generation};

enum EngineCommand {
    Lookup {
        generation: Generation,
        endpoint: String,
        request: Value,
    },
}

/// Handle to the lookup worker: commands in, settled events out. The worker
/// thread owns the tokio runtime so the UI side stays synchronous.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let backend = Arc::new(ReqwestBackend::new(settings));

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    log::error!("failed to start lookup runtime: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues one lookup. Single-flight is the caller's concern: the submit
    /// control stays disabled until the matching settled event arrives.
    pub fn lookup(&self, generation: Generation, endpoint: impl Into<String>, request: Value) {
        let _ = self.cmd_tx.send(EngineCommand::Lookup {
            generation,
            endpoint: endpoint.into(),
            request,
        });
    }

    /// Blocks up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    backend: &dyn LookupBackend,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Lookup {
            generation,
            endpoint,
            request,
        } => {
            let result = backend.lookup(&endpoint, &request).await;
            let _ = event_tx.send(EngineEvent::LookupSettled { generation, result });
        }
    }
}

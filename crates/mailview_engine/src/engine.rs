use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use mailview_logging::{mail_info, mail_warn};

use crate::{EngineEvent, MailApi, RequestId};

/// Receives engine results. Called from the engine's runtime threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    FetchMessages { request_id: RequestId },
    DeleteAll { request_id: RequestId },
}

/// Runs mail store requests on a background tokio runtime.
///
/// Commands never block the caller; every command produces exactly one
/// [`EngineEvent`] on the sink. Dropping the handle stops the worker.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn MailApi>, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("mailview-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(api.as_ref(), command, sink.as_ref()).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn fetch_messages(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::FetchMessages { request_id });
    }

    pub fn delete_all(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::DeleteAll { request_id });
    }
}

async fn handle_command(api: &dyn MailApi, command: EngineCommand, sink: &dyn EventSink) {
    let event = match command {
        EngineCommand::FetchMessages { request_id } => {
            let result = api.list_messages().await;
            match &result {
                Ok(records) => mail_info!(
                    "request {} loaded {} messages",
                    request_id,
                    records.len()
                ),
                Err(err) => mail_warn!("request {} failed to list messages: {}", request_id, err),
            }
            EngineEvent::MessagesFetched { request_id, result }
        }
        EngineCommand::DeleteAll { request_id } => {
            let result = api.delete_all().await;
            match &result {
                Ok(()) => mail_info!("request {} deleted all messages", request_id),
                Err(err) => mail_warn!("request {} failed to delete messages: {}", request_id, err),
            }
            EngineEvent::DeleteCompleted { request_id, result }
        }
    };
    sink.emit(event);
}

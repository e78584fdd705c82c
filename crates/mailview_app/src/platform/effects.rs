use std::io;
use std::sync::{mpsc, Arc};

use mailview_core::{Effect, Message, Msg};
use mailview_engine::{EngineEvent, EngineHandle, EventSink, MailApi};
use mailview_logging::{mail_info, mail_warn};

use super::app::AppEvent;

/// Executes core effects on the engine and feeds engine results back as `Msg`s.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn MailApi>, event_tx: mpsc::Sender<AppEvent>) -> io::Result<Self> {
        let sink = Arc::new(MsgSink { event_tx });
        let engine = EngineHandle::new(api, sink)?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchMessages { request_id } => {
                    mail_info!("FetchMessages request_id={}", request_id);
                    self.engine.fetch_messages(request_id);
                }
                Effect::DeleteAll { request_id } => {
                    mail_info!("DeleteAll request_id={}", request_id);
                    self.engine.delete_all(request_id);
                }
            }
        }
    }
}

struct MsgSink {
    event_tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(AppEvent::Core(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::MessagesFetched { request_id, result } => Msg::MessagesLoaded {
            request_id,
            result: result
                .map(|records| records.into_iter().map(Message::from_json).collect())
                .map_err(|err| {
                    mail_warn!("List request {} failed: {}", request_id, err);
                    err.kind.to_string()
                }),
        },
        EngineEvent::DeleteCompleted { request_id, result } => Msg::DeleteAllCompleted {
            request_id,
            result: result.map_err(|err| {
                mail_warn!("Delete request {} failed: {}", request_id, err);
                err.kind.to_string()
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailview_engine::{ApiError, FailureKind};
    use serde_json::json;

    #[test]
    fn fetched_records_become_messages_in_order() {
        let msg = map_event(EngineEvent::MessagesFetched {
            request_id: 4,
            result: Ok(vec![json!({"ID": "b"}), json!({"ID": "a"})]),
        });

        assert_eq!(
            msg,
            Msg::MessagesLoaded {
                request_id: 4,
                result: Ok(vec![
                    Message::from_json(json!({"ID": "b"})),
                    Message::from_json(json!({"ID": "a"})),
                ]),
            }
        );
    }

    #[test]
    fn failures_carry_the_failure_kind() {
        let msg = map_event(EngineEvent::DeleteCompleted {
            request_id: 9,
            result: Err(ApiError {
                kind: FailureKind::HttpStatus(502),
                message: "502 Bad Gateway".to_string(),
            }),
        });

        assert_eq!(
            msg,
            Msg::DeleteAllCompleted {
                request_id: 9,
                result: Err("http status 502".to_string()),
            }
        );
    }
}

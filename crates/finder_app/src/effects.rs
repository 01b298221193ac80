use std::time::Duration;

use finder_core::{Effect, Generation, LookupFailure, LookupPayload, Msg};
use finder_engine::{ClientSettings, EngineEvent, EngineHandle, FailureKind};

/// Executes core effects against the lookup engine and maps settled events
/// back into core messages.
pub struct EffectRunner {
    engine: EngineHandle,
    settle_deadline: Duration,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Self {
        // The engine's request timeout bounds every lookup; the deadline only
        // guards against the worker itself going away.
        let settle_deadline = settings.request_timeout + Duration::from_secs(15);
        Self {
            engine: EngineHandle::new(settings),
            settle_deadline,
        }
    }

    /// Executes effects; returns the generation of the dispatched lookup, if
    /// one went out.
    pub fn run(&self, effects: Vec<Effect>) -> Option<Generation> {
        let mut dispatched = None;
        for effect in effects {
            match effect {
                Effect::DispatchLookup {
                    generation,
                    endpoint,
                    request,
                } => match serde_json::to_value(&request) {
                    Ok(body) => {
                        log::info!("dispatching lookup generation={generation} endpoint={endpoint}");
                        self.engine.lookup(generation, endpoint, body);
                        dispatched = Some(generation);
                    }
                    Err(err) => log::error!("failed to encode lookup request: {err}"),
                },
            }
        }
        dispatched
    }

    /// Blocks until the lookup dispatched for `generation` settles and
    /// returns the completion message for the core.
    pub fn wait_settled(&self, generation: Generation) -> Msg {
        let mut waited = Duration::ZERO;
        let step = Duration::from_millis(200);
        while waited < self.settle_deadline {
            if let Some(event) = self.engine.recv_timeout(step) {
                let EngineEvent::LookupSettled {
                    generation: settled,
                    result,
                } = event;
                let result = match result {
                    Ok(body) => Ok(LookupPayload::from_value(&body)),
                    Err(err) => {
                        log::warn!("lookup failed: {} ({})", err.message, err.kind);
                        Err(match err.kind {
                            FailureKind::HttpStatus(_) => LookupFailure::Status { body: err.message },
                            _ => LookupFailure::Transport,
                        })
                    }
                };
                return Msg::LookupCompleted {
                    generation: settled,
                    result,
                };
            }
            waited += step;
        }

        log::error!("lookup generation={generation} never settled");
        Msg::LookupCompleted {
            generation,
            result: Err(LookupFailure::Transport),
        }
    }
}

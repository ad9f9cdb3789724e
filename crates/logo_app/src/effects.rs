use engine_logging::{engine_info, engine_warn};
use logo_core::{Effect, Msg, RunResult};
use logo_engine::{EngineHandle, HarvestEvent, HarvestOutcome};

use crate::settings::Settings;

/// Executes controller effects against the engine and relays its events.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, settings: &Settings, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartHarvest {
                    page_url,
                    destination,
                } => {
                    engine_info!(
                        "StartHarvest url={} dest={}",
                        page_url,
                        destination.display()
                    );
                    self.engine
                        .start(settings.harvest_config(page_url, destination));
                }
                Effect::CancelHarvest => {
                    engine_info!("CancelHarvest");
                    self.engine.cancel();
                }
            }
        }
    }

    pub fn try_recv(&self) -> Option<HarvestEvent> {
        self.engine.try_recv()
    }
}

/// Translate an engine event into a controller message.
pub fn map_event(event: HarvestEvent) -> Msg {
    match event {
        HarvestEvent::Progress(value) => Msg::HarvestProgress(value),
        HarvestEvent::Status(text) => Msg::HarvestStatus(text),
        HarvestEvent::Finished { result } => Msg::HarvestFinished {
            result: match result {
                Ok(HarvestOutcome::Completed { saved }) => RunResult::Completed { saved },
                Ok(HarvestOutcome::NoImagesFound) => RunResult::NoImagesFound,
                Ok(HarvestOutcome::Canceled) => RunResult::Canceled,
                Err(err) => {
                    engine_warn!("Harvest failed: {} ({})", err.message, err.kind);
                    RunResult::Failed
                }
            },
        },
    }
}

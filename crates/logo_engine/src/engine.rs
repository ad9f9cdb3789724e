use std::sync::mpsc;
use std::thread;

use crate::fetch::{ChannelEventSink, FetchSettings, ReqwestFetcher};
use crate::harvest::{harvest, HarvestConfig};
use crate::types::{CancelFlag, HarvestEvent};

enum EngineCommand {
    Start { config: HarvestConfig },
}

/// Handle to the background harvest thread.
///
/// Exactly one session runs at a time: commands queue on an mpsc channel and
/// the worker runs each harvest to completion before taking the next. Events
/// come back on a second channel in production order, so the controller can
/// poll without ever blocking.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<HarvestEvent>,
    cancel: CancelFlag,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancelFlag::new();
        let worker_cancel = cancel.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let fetcher = ReqwestFetcher::new(settings);
            while let Ok(EngineCommand::Start { config }) = cmd_rx.recv() {
                let sink = ChannelEventSink::new(event_tx.clone());
                let result = runtime.block_on(harvest(&fetcher, &config, &sink, &worker_cancel));
                let _ = event_tx.send(HarvestEvent::Finished { result });
            }
        });

        Self {
            cmd_tx,
            event_rx,
            cancel,
        }
    }

    /// Begin a session. Clears any cancellation left over from the last run.
    pub fn start(&self, config: HarvestConfig) {
        self.cancel.reset();
        let _ = self.cmd_tx.send(EngineCommand::Start { config });
    }

    /// Request cooperative cancellation of the running session. The session
    /// acknowledges with a canceled status and a `Finished` event.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Non-blocking event poll for the controller's frame loop.
    pub fn try_recv(&self) -> Option<HarvestEvent> {
        self.event_rx.try_recv().ok()
    }
}

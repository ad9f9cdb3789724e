use url::Url;

use crate::{AppState, Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DestinationChosen(path) => {
            // Folder choice is locked while a session runs; the engine
            // already holds the session's destination.
            if state.session() == SessionState::Idle {
                state.set_destination(path);
                state.set_status("Selected save folder.");
            }
            Vec::new()
        }
        Msg::DownloadClicked => {
            if state.session() != SessionState::Idle {
                return (state, Vec::new());
            }
            let Some(destination) = state.destination().cloned() else {
                state.set_status("Please select a save folder first!");
                return (state, Vec::new());
            };
            if Url::parse(state.page_url()).is_err() {
                state.set_status(format!("Invalid page URL: {}", state.page_url()));
                return (state, Vec::new());
            }
            let effect = Effect::StartHarvest {
                page_url: state.page_url().to_string(),
                destination,
            };
            state.start_session();
            state.set_status("Downloading...");
            vec![effect]
        }
        Msg::CancelClicked => {
            if state.session() == SessionState::Running {
                state.request_cancel();
                vec![Effect::CancelHarvest]
            } else {
                Vec::new()
            }
        }
        Msg::HarvestProgress(value) => {
            if state.session() != SessionState::Idle {
                state.apply_progress(value);
            }
            Vec::new()
        }
        Msg::HarvestStatus(text) => {
            if state.session() != SessionState::Idle {
                state.set_status(text);
            }
            Vec::new()
        }
        Msg::HarvestFinished { result } => {
            state.finish_session(result);
            Vec::new()
        }
    };

    (state, effects)
}

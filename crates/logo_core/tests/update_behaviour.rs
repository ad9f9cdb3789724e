use std::sync::Once;

use logo_core::{update, AppState, Effect, Msg, SessionState};

const PAGE: &str = "https://wiki.example/wiki/Companies";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn ready_state() -> AppState {
    let (state, _) = update(
        AppState::new(PAGE),
        Msg::DestinationChosen("/tmp/logos".to_string()),
    );
    state
}

#[test]
fn folder_choice_updates_state_and_status() {
    init_logging();
    let state = ready_state();
    let view = state.view();

    assert_eq!(view.destination.as_deref(), Some("/tmp/logos"));
    assert_eq!(view.status, "Selected save folder.");
    assert_eq!(view.session, SessionState::Idle);
}

#[test]
fn download_requires_a_destination() {
    init_logging();
    let (state, effects) = update(AppState::new(PAGE), Msg::DownloadClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().session, SessionState::Idle);
    assert_eq!(state.view().status, "Please select a save folder first!");
}

#[test]
fn download_rejects_unparsable_page_url() {
    init_logging();
    let (state, _) = update(
        AppState::new("not a url"),
        Msg::DestinationChosen("/tmp/logos".to_string()),
    );
    let (state, effects) = update(state, Msg::DownloadClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().session, SessionState::Idle);
    assert!(state.view().status.starts_with("Invalid page URL"));
}

#[test]
fn download_starts_a_session() {
    init_logging();
    let (state, effects) = update(ready_state(), Msg::DownloadClicked);
    let view = state.view();

    assert_eq!(view.session, SessionState::Running);
    assert_eq!(view.status, "Downloading...");
    assert_eq!(view.progress, 0);
    assert_eq!(
        effects,
        vec![Effect::StartHarvest {
            page_url: PAGE.to_string(),
            destination: "/tmp/logos".into(),
        }]
    );
}

#[test]
fn second_click_while_running_is_ignored() {
    init_logging();
    let (state, _) = update(ready_state(), Msg::DownloadClicked);
    let (state, effects) = update(state, Msg::DownloadClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().session, SessionState::Running);
}

#[test]
fn folder_choice_is_ignored_while_running() {
    init_logging();
    let (state, _) = update(ready_state(), Msg::DownloadClicked);
    let (state, _) = update(state, Msg::DestinationChosen("/elsewhere".to_string()));

    assert_eq!(state.view().destination.as_deref(), Some("/tmp/logos"));
}

#[test]
fn cancel_requests_cooperative_stop() {
    init_logging();
    let (state, _) = update(ready_state(), Msg::DownloadClicked);
    let (state, effects) = update(state, Msg::CancelClicked);

    // The session stays alive until the engine acknowledges.
    assert_eq!(state.view().session, SessionState::Cancelling);
    assert_eq!(effects, vec![Effect::CancelHarvest]);
}

#[test]
fn cancel_when_idle_is_ignored() {
    init_logging();
    let (state, effects) = update(ready_state(), Msg::CancelClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().session, SessionState::Idle);
}

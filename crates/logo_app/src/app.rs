use std::error::Error;
use std::time::Duration;

use eframe::egui;
use engine_logging::engine_info;
use logo_core::{update, AppState, Msg, SessionState};
use logo_engine::{EngineHandle, FetchSettings};

use crate::effects::EffectRunner;
use crate::settings::Settings;

pub fn run(settings: Settings) -> Result<(), Box<dyn Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 260.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Company Logo Harvester",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(settings)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    state: AppState,
    runner: EffectRunner,
    settings: Settings,

    // folder text field UX; committed via the select button
    folder_text: String,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let mut state = AppState::new(settings.page_url.clone());
        let folder_text = settings.destination.clone().unwrap_or_default();
        if let Some(dest) = settings.destination.clone() {
            state = update(state, Msg::DestinationChosen(dest)).0;
        }
        engine_info!("Harvester ready, page={}", settings.page_url);

        Self {
            state,
            runner: EffectRunner::new(EngineHandle::new(FetchSettings::default())),
            settings,
            folder_text,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let (state, effects) = update(std::mem::take(&mut self.state), msg);
        self.state = state;
        self.runner.run(&self.settings, effects);
    }

    fn commit_folder(&mut self) {
        let folder = self.folder_text.trim().to_string();
        if folder.is_empty() {
            return;
        }
        self.settings.destination = Some(folder.clone());
        self.settings.save();
        self.dispatch(Msg::DestinationChosen(folder));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Engine events first, so this frame renders the freshest state.
        while let Some(event) = self.runner.try_recv() {
            let msg = crate::effects::map_event(event);
            self.dispatch(msg);
        }

        let view = self.state.view();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Company Logo Harvester");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Save folder:");
                ui.add_enabled(
                    view.can_choose_folder,
                    egui::TextEdit::singleline(&mut self.folder_text)
                        .desired_width(280.0)
                        .hint_text("where the logos land"),
                );
                if ui
                    .add_enabled(
                        view.can_choose_folder,
                        egui::Button::new("Select Save Folder"),
                    )
                    .clicked()
                {
                    self.commit_folder();
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(view.can_start, egui::Button::new("Download Logos"))
                    .clicked()
                {
                    self.dispatch(Msg::DownloadClicked);
                }
                if ui
                    .add_enabled(view.can_cancel, egui::Button::new("Cancel Download"))
                    .clicked()
                {
                    self.dispatch(Msg::CancelClicked);
                }
            });

            ui.add_space(12.0);
            ui.add(egui::ProgressBar::new(f32::from(view.progress) / 100.0).show_percentage());
            ui.add_space(8.0);
            ui.label(format!("Status: {}", view.status));
        });

        // Keep polling while a session runs; idle frames render on demand.
        if view.session != SessionState::Idle {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

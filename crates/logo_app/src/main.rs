#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod effects;
mod logging;
mod settings;

fn main() {
    logging::initialize(logging::LogDestination::Both);
    let settings = settings::Settings::load_or_default();

    if let Err(e) = app::run(settings) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

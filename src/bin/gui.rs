// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use champ_scrape::{gui, logging};
use eframe::egui::ViewportBuilder;

fn main() {
    logging::init(log::LevelFilter::Info);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([520.0, 720.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {e}");
        std::process::exit(1);
    }
}

// src/gui/app.rs
use eframe::egui;
use log::{debug, info};

use crate::{
    config::options::AppOptions,
    data::{Sort, Table},
    file,
};

pub fn run(native: eframe::NativeOptions) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Champion Winrates",
        native,
        Box::new(|_cc| Ok(Box::new(App::new(AppOptions::default())))),
    )
}

pub struct App {
    pub options: AppOptions,

    // text fields, mapped onto options when an action runs
    pub input_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub table: Table,
    pub search: String,
    pub sort: Sort,

    pub status: String,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let input_text = options.extract.input.to_string_lossy().into_owned();
        let out_path = options.export.out_path();
        let out_path_text = out_path.to_string_lossy().into_owned();

        // Show the last export if there is one
        let (table, status) = match file::read_table(&out_path, options.export.format) {
            Ok(records) => {
                info!("Init: loaded {} row(s) from {}", records.len(), out_path.display());
                let status = format!("Loaded {}", out_path.display());
                (Table::new(records), status)
            }
            Err(e) => {
                debug!("Init: no previous table ({e})");
                (Table::default(), "Idle".to_string())
            }
        };

        Self {
            options,
            input_text,
            out_path_text,
            out_path_dirty: false,
            table,
            search: String::new(),
            sort: Sort::default(),
            status,
        }
    }

    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Push a hand-edited output path into the export options.
    pub fn commit_out_path(&mut self) {
        if self.out_path_dirty {
            self.options.export.set_path(&self.out_path_text);
            self.out_path_dirty = false;
            debug!("UI: out path → {}", self.options.export.out_path().display());
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::export_bar::draw(ui, self);

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Search:");
                ui.text_edit_singleline(&mut self.search);
                let shown = self.table.view(&self.search, self.sort).len();
                ui.label(format!("{shown} of {} row(s)", self.table.len()));
            });

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}

// src/gui/components/export_bar.rs

use std::path::PathBuf;

use eframe::egui;
use log::{error, info};

use crate::{
    config::options::ExportFormat,
    data::Table,
    file,
    gui::app::App,
    runner,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Input + format ---
    ui.horizontal(|ui| {
        ui.label("Input:");
        ui.add(egui::TextEdit::singleline(&mut app.input_text).font(egui::TextStyle::Monospace));

        let prev = app.options.export.format;
        let mut fmt = prev;
        ui.label("Format:");
        ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");
        if fmt != prev {
            app.options.export.format = fmt;
            info!("UI: export format → {fmt:?}");
            if !app.out_path_dirty && !app.options.export.has_explicit_path() {
                app.out_path_text = app.options.export.out_path().to_string_lossy().into_owned();
            }
        }
    });

    // --- Output ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }
    });

    // --- Actions (Extract / Export / Copy) ---
    ui.horizontal(|ui| {
        if ui.button("Extract").clicked() {
            extract(app);
        }

        if ui.button("Export").clicked() {
            export(app);
        }

        if ui.button("Copy").clicked() {
            if app.table.is_empty() {
                app.status("Nothing to copy");
            } else {
                match file::to_export_string(&app.table.records, app.options.export.format) {
                    Ok(txt) => {
                        ui.ctx().copy_text(txt);
                        app.status(format!("Copied {} row(s)", app.table.len()));
                    }
                    Err(e) => {
                        error!("Copy: {e}");
                        app.status(format!("Copy error: {e}"));
                    }
                }
            }
        }

        ui.label(format!("Status: {}", app.status));
    });
}

fn extract(app: &mut App) {
    app.options.extract.input = PathBuf::from(app.input_text.trim());
    info!("Extract: begin {}", app.options.extract.input.display());

    match runner::load_records(&app.options) {
        Ok(records) => {
            let n = records.len();
            app.table = Table::new(records);
            app.status(format!("Extracted {n} row(s)"));
        }
        Err(e) => {
            error!("Extract: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

fn export(app: &mut App) {
    app.commit_out_path();
    let export = &app.options.export;
    let path = export.out_path();

    match file::write_table(&path, &app.table.records, export.format) {
        Ok(p) => {
            info!("Export: OK rows={} → {}", app.table.len(), p.display());
            app.status(format!("Exported {}", p.display()));
        }
        Err(e) => {
            error!("Export: {e}");
            app.status(format!("Export error: {e}"));
        }
    }
}

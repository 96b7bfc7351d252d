// src/gui/components/data_table.rs
//
// Live table. Reads the canonical table through a filtered, sorted index view;
// header clicks change the sort.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::data::{SortDir, SortKey};
use crate::gui::app::App;

fn header_label(app: &App, key: SortKey, text: &str) -> String {
    if app.sort.key != key {
        return text.to_string();
    }
    match app.sort.dir {
        SortDir::Asc => format!("{text} ▲"),
        SortDir::Desc => format!("{text} ▼"),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = app.table.view(&app.search, app.sort);
    let mut clicked: Option<SortKey> = None;

    let name_hdr = header_label(app, SortKey::Name, "Name");
    let win_hdr = header_label(app, SortKey::Win, "Win %");

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(220.0).resizable(true).clip(true).at_least(60.0))
        .column(Column::remainder().at_least(60.0))
        .header(24.0, |mut header| {
            for (key, text) in [(SortKey::Name, name_hdr), (SortKey::Win, win_hdr)] {
                header.col(|ui| {
                    let btn = egui::Button::new(RichText::new(text).strong()).frame(false);
                    if ui.add(btn).clicked() {
                        clicked = Some(key);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(rec) = view.get(row.index()).and_then(|&i| app.table.records.get(i)) else {
                    return;
                };
                row.col(|ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.label(&rec.name);
                    });
                });
                row.col(|ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("{:.2}", rec.win));
                    });
                });
            });
        });

    if let Some(key) = clicked {
        app.sort.toggle(key);
    }
}

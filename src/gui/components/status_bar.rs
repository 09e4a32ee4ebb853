// src/gui/components/status_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if app.is_loading() {
            ui.add(Spinner::new());
        }
        ui.label(app.status_text());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if app.corpus_len() > 0 {
                ui.weak(format!("{} verbs", app.corpus_len()));
            }
        });
    });
}

/// Central panel while there is nothing to quiz on yet (or the load failed).
pub fn draw_waiting(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        if app.is_loading() {
            ui.heading("Preparing verbs…");
            ui.add_space(8.0);
            ui.label("The first run downloads every verb once; later runs read the local cache.");
            ui.add(Spinner::new().size(32.0));
            return;
        }
        ui.heading("No verbs available");
        ui.add_space(8.0);
        ui.label(format!("Cache: {}", app.state.options.cache_dir().display()));
        if ui.button("Retry").clicked() {
            logf!("UI: Retry load");
            actions::start_loading(app);
        }

        ui.add_space(16.0);
        ui.label("Or build the cache from a saved verb-list page or an \"infinitive<TAB>gloss\" file:");
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut app.verb_list_text).hint_text("path to file (blank = web)"));
            if ui.button("Load list").clicked() {
                actions::load_from_list_field(app);
            }
        });
    });
}

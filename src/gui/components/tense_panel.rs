// src/gui/components/tense_panel.rs
//
// Tense menu: radio list in canonical order plus Select. Also shows the score
// of the round that just ended.

use eframe::egui::{self, RichText};
use crate::{gui::{actions, app::App}, verb::Tense};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(score) = app.last_score {
        ui.label(RichText::new(format!("Your score was {score}%!")).heading().strong());
        ui.separator();
    }

    ui.heading("Choose tense to practice:");
    ui.add_space(6.0);

    let before = app.state.gui.tense_choice;
    for (i, t) in Tense::ALL.iter().enumerate() {
        ui.radio_value(&mut app.state.gui.tense_choice, i, t.name());
    }
    if app.state.gui.tense_choice != before {
        logd!("UI: tense_choice → {}", app.state.gui.tense_choice);
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Select").clicked() {
            actions::start_round(app);
        }
        if ui.button("Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

// src/gui/components/question_panel.rs

use eframe::egui::{self, Color32, Key, RichText};
use crate::{
    gui::{actions, app::App, components::forms_table},
    quiz::Phase,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(q) = app.session.question().cloned() else { return };
    let awaiting = app.session.phase() == Phase::AwaitingAnswer;

    ui.label(format!(
        "Question {} of {}",
        app.session.asked() + usize::from(awaiting),
        app.session.round_length()
    ));
    ui.add_space(4.0);
    ui.label(RichText::new(q.prompt().trim_end()).size(16.0));
    ui.add_space(6.0);

    let mut submit = false;
    ui.horizontal(|ui| {
        let resp = ui.add_enabled(
            awaiting,
            egui::TextEdit::singleline(&mut app.answer_text).hint_text(q.person.label()),
        );
        if awaiting && resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submit = true;
        }
        if ui.add_enabled(awaiting, egui::Button::new("OK")).clicked() {
            submit = true;
        }
    });
    if submit {
        actions::submit_answer(app);
    }

    if let Some(outcome) = &app.last_outcome {
        let color = if outcome.correct { Color32::from_rgb(0x3C, 0xB4, 0x4B) } else { Color32::from_rgb(0xDC, 0x61, 0x49) };
        ui.label(RichText::new(outcome.message()).color(color).strong());
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(!awaiting && app.session.phase() == Phase::Scored, egui::Button::new("Next")).clicked() {
            actions::next_question(app);
        }
        if ui.button("Choose Tense").clicked() {
            actions::choose_tense(app);
        }
        if ui.button("Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });

    if app.last_outcome.is_some() && app.state.gui.show_table_after_answer {
        ui.separator();
        if let Some(vt) = app.corpus.as_ref().and_then(|c| c.get(q.verb.key())) {
            forms_table::draw(ui, vt, q.tense, Some(q.person));
        }
    }
    ui.checkbox(&mut app.state.gui.show_table_after_answer, "Show the full tense after answering");
}

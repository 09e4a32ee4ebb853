// src/gui/components/forms_table.rs
//
// One tense of one verb, person per row. Purely a view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::verb::{Person, Tense, VerbTable};

pub fn draw(ui: &mut egui::Ui, vt: &VerbTable, tense: Tense, highlight: Option<Person>) {
    ui.label(RichText::new(format!("{} ({}) · {}", vt.verb.infinitive, vt.verb.gloss, tense)).strong());

    TableBuilder::new(ui)
        .id_salt(("forms", vt.key(), tense))
        .striped(true)
        .vscroll(false)
        .column(Column::initial(90.0).at_least(60.0))
        .column(Column::remainder().at_least(120.0))
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Person"); });
            header.col(|ui| { ui.strong("Form"); });
        })
        .body(|mut body| {
            for p in Person::ALL {
                let form = vt.table.form(tense, p);
                let hit = highlight == Some(p);
                body.row(18.0, |mut row| {
                    row.col(|ui| { ui.label(p.label()); });
                    row.col(|ui| {
                        let rt = RichText::new(form);
                        ui.label(if hit { rt.strong().underline() } else { rt });
                    });
                });
            }
        });
}

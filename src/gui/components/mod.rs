// src/gui/components/mod.rs
pub mod forms_table;
pub mod question_panel;
pub mod status_bar;
pub mod tense_panel;

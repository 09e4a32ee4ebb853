// src/gui/actions/mod.rs
//
// Folder module facade: button handlers live in the submodules, the
// components only call these.

mod load;   // src/gui/actions/load.rs
mod quiz;   // src/gui/actions/quiz.rs

pub use load::{load_from_list_field, poll_loader, start_loading};
pub use quiz::{choose_tense, next_question, start_round, submit_answer};

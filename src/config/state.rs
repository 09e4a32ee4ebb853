// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Radio selection on the tense screen (0-based into `Tense::ALL`)
    pub tense_choice: usize,

    /// Show the full table for the tense after each answer
    pub show_table_after_answer: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 640,
            window_h: 420,
            tense_choice: 0,
            show_table_after_answer: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

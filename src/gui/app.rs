// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    quiz::{Outcome, Phase, QuizSession},
    verb::Corpus,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "French Verb Conjugation",
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::default(), cc.egui_ctx.clone())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub ctx: egui::Context,

    // status/progress (loader thread writes here)
    pub status: Arc<Mutex<String>>,
    pub loader: Option<Receiver<crate::Result<Corpus>>>,

    // snapshot handed over by the loader; None until it arrives
    pub corpus: Option<Corpus>,

    pub session: QuizSession,
    pub answer_text: String,
    pub last_outcome: Option<Outcome>,
    pub last_score: Option<u32>,

    // first-run screen: offline verb list path (blank = remote list)
    pub verb_list_text: String,
}

impl App {
    pub fn new(state: AppState, ctx: egui::Context) -> Self {
        crate::log::init(&state.options.log_path());
        logf!("Init: cache={}", state.options.cache_dir().display());

        let verb_list_text = state.options.source.verb_list_text();
        let mut app = Self {
            state,
            ctx,
            status: Arc::new(Mutex::new(s!("Idle"))),
            loader: None,
            corpus: None,
            session: QuizSession::new(),
            answer_text: s!(),
            last_outcome: None,
            last_score: None,
            verb_list_text,
        };
        actions::start_loading(&mut app);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    pub fn corpus_len(&self) -> usize {
        self.corpus.as_ref().map_or(0, |c| c.len())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_loader(self);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.corpus_len() == 0 {
                components::status_bar::draw_waiting(ui, self);
                return;
            }
            match self.session.phase() {
                Phase::ChoosingTense | Phase::RoundComplete => components::tense_panel::draw(ui, self),
                Phase::AwaitingAnswer | Phase::Scored => components::question_panel::draw(ui, self),
            }
        });
    }
}

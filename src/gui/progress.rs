// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{error::Error, progress::Progress, verb::Verb};

/// Mirrors cache population into the shared status line. Runs on the loader
/// thread; each update asks the UI for a repaint.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: Option<egui::Context>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: Option<egui::Context>) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }

    fn counter(&self) -> String {
        format!("{}/{}", self.done + self.failed, self.total)
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Downloading {} verbs…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, verb: &Verb) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({})", verb.infinitive, self.counter()));
    }
    fn item_failed(&mut self, verb: &Verb, _err: &Error) {
        self.failed += 1;
        self.set_status(format!("Skipped {} ({})", verb.infinitive, self.counter()));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Download complete"));
        } else {
            self.set_status(format!("Download complete ({} saved, {} skipped)", self.done, self.failed));
        }
    }
}

// src/gui/actions/load.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use crate::{
    fetch::{self, HttpVerbPages},
    gui::{app::App, progress::GuiProgress},
    store::VerbStore,
};

/// Load the cache (populating it on first run) on a worker thread.
pub fn start_loading(app: &mut App) {
    if app.is_loading() {
        return;
    }
    let opts = app.state.options.clone();
    let status = app.status.clone();
    let ctx = app.ctx.clone();
    let (tx, rx) = mpsc::channel();

    logf!("Load: begin cache={}", opts.cache_dir().display());
    app.status("Loading verbs…");

    thread::spawn(move || {
        let store = VerbStore::new(opts.cache_dir());
        let mut list = fetch::list_source(&opts.source);
        let mut pages = HttpVerbPages::from_options(&opts.source);
        let mut prog = GuiProgress::new(status, Some(ctx.clone()));

        // → the only long-running call in the app ←
        let res = store.load_or_populate(list.as_mut(), &mut pages, Some(&mut prog));
        let _ = tx.send(res);
        ctx.request_repaint();
    });
    app.loader = Some(rx);
}

/// Switch the verb list to the path typed on the first-run screen and load again.
pub fn load_from_list_field(app: &mut App) {
    let text = app.verb_list_text.clone();
    app.state.options.source.set_verb_list_text(&text);
    logf!("UI: verb list → {:?}", app.state.options.source.verb_list);
    start_loading(app);
}

/// Pick up the loader's result, if it has arrived.
pub fn poll_loader(app: &mut App) {
    let Some(rx) = &app.loader else { return };
    match rx.try_recv() {
        Err(TryRecvError::Empty) => return,
        Ok(Ok(corpus)) => {
            logf!("Load: OK verbs={}", corpus.len());
            if corpus.is_empty() {
                app.status("No verbs could be downloaded");
            } else {
                app.status(format!("{} verbs ready", corpus.len()));
            }
            app.corpus = Some(corpus);
        }
        Ok(Err(e)) => {
            loge!("Load: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
        Err(TryRecvError::Disconnected) => {
            loge!("Load: worker exited without a result");
            app.status("Error: loader stopped unexpectedly");
        }
    }
    app.loader = None;
}

// src/gui/actions/quiz.rs
//
// Thin wrappers over QuizSession steps. Each one updates the status line and
// the bits of App the panels read (answer box, last outcome, last score).

use crate::{gui::app::App, verb::Tense};

/// Radio selection → new round.
pub fn start_round(app: &mut App) {
    let Some(corpus) = app.corpus.as_ref() else { return };
    let Some(&tense) = Tense::ALL.get(app.state.gui.tense_choice) else {
        app.status("Choose a tense first");
        return;
    };

    let started = app.session.start_round(tense, corpus).map(|_| ());
    match started {
        Ok(()) => {
            logf!("UI: Round start tense={}", tense);
            app.answer_text.clear();
            app.last_outcome = None;
            app.last_score = None;
            app.status(format!("Practising {}", tense));
        }
        Err(e) => {
            loge!("UI: Round start failed: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn submit_answer(app: &mut App) {
    let given = s!(app.answer_text.trim());
    if let Some(outcome) = app.session.answer(&given) {
        logd!("UI: answer='{}' correct={}", given, outcome.correct);
        app.status(format!("{} / {} correct", app.session.correct(), app.session.asked()));
        app.last_outcome = Some(outcome);
    }
}

/// Next question, or close the round and show the score.
pub fn next_question(app: &mut App) {
    let Some(corpus) = app.corpus.as_ref() else { return };
    let next = app.session.next_question(corpus).map(|q| q.is_some());
    match next {
        Ok(true) => {
            app.answer_text.clear();
            app.last_outcome = None;
        }
        Ok(false) => {
            let score = app.session.finish_round();
            logf!("UI: Round done score={}%", score);
            app.last_score = Some(score);
            app.last_outcome = None;
            app.status(format!("Your score was {score}%!"));
        }
        Err(e) => {
            loge!("UI: Next question failed: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}

/// Abandon the round and go back to the tense list.
pub fn choose_tense(app: &mut App) {
    if let Some(t) = app.session.tense() {
        app.state.gui.tense_choice = t.index();
    }
    app.session.reset();
    app.answer_text.clear();
    app.last_outcome = None;
    app.status(format!("Choose one of {} tenses", Tense::COUNT));
}

// src/progress.rs
use crate::{error::Error, verb::Verb};

/// Lightweight progress reporting used by cache population.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of verbs to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A verb was fetched, parsed and saved.
    fn item_done(&mut self, _verb: &Verb) {}

    /// A verb was skipped; `err` says why.
    fn item_failed(&mut self, _verb: &Verb, _err: &Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}


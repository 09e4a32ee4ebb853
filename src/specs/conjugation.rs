// src/specs/conjugation.rs
//
// Conjugation page (conjf.cactus2000.de `showverb`).
//
// Layout: all forms live in the first `<table class="conjtab">`. Its rows
// (nested tables included, see `core::html::table_rows`) are read
// positionally; `Tense::offset` holds the only site-specific numbers.

use crate::config::consts::{CONJ_TABLE_CLASS, NOT_FOUND_MARKER};
use crate::core::html;
use crate::error::{Error, Result};
use crate::verb::{ConjugationTable, PersonForms, Tense};

/// Whole-page entry point for one verb.
///
/// The not-found check runs on the raw markup before any row logic, so a
/// missing verb is reported as `VerbNotFound` even if the page also carries
/// an (empty) table.
pub fn parse_page(verb: &str, markup: &str) -> Result<ConjugationTable> {
    if markup.contains(NOT_FOUND_MARKER) {
        return Err(Error::VerbNotFound(s!(verb)));
    }
    let rows = html::table_rows(markup, CONJ_TABLE_CLASS)
        .ok_or_else(|| Error::not_parsable(verb, "no conjugation table on page"))?;
    parse_rows(verb, &rows)
}

/// Positional extraction. All or nothing: if any tense is short a row or a
/// cell, the verb is rejected (typically impersonal verbs such as falloir).
pub fn parse_rows(verb: &str, rows: &[Vec<String>]) -> Result<ConjugationTable> {
    let mut forms: Vec<PersonForms> = Vec::with_capacity(Tense::COUNT);
    for tense in Tense::ALL {
        forms.push(read_tense(verb, rows, tense)?);
    }
    let forms = forms
        .try_into()
        .map_err(|_| Error::not_parsable(verb, "tense count mismatch"))?;
    Ok(ConjugationTable::from_forms(forms))
}

/// Minimum number of rows a page needs for every tense to be readable.
pub fn rows_required() -> usize {
    Tense::ALL.iter().map(|t| t.offset().0 + 6).max().unwrap_or(0)
}

fn read_tense(verb: &str, rows: &[Vec<String>], tense: Tense) -> Result<PersonForms> {
    let (down, right) = tense.offset();
    let mut out: PersonForms = Default::default();
    for (n, slot) in out.iter_mut().enumerate() {
        let cell = rows
            .get(down + n)
            .and_then(|row| row.get(right))
            .ok_or_else(|| {
                Error::not_parsable(
                    verb,
                    format!("{}: no cell at row {}, column {}", tense.name(), down + n, right),
                )
            })?;
        *slot = cell.clone();
    }
    Ok(out)
}

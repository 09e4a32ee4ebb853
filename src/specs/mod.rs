// src/specs/mod.rs
//! # Page specs
//!
//! One module per remote page. Each knows *where the data lives in the
//! markup* and turns raw text into typed values; none of them fetch, cache
//! or log beyond debug notes.
//!
//! - `verb_list` – the popular-verb listing (French, English) and the
//!   offline TSV form of the same list.
//! - `conjugation` – a verb's conjugation page → `ConjugationTable`, via
//!   `core::html::table_rows` and the fixed offsets on `Tense`.
//!
//! Both are pure and tested against literal markup; nothing here touches
//! the network.
pub mod conjugation;
pub mod verb_list;

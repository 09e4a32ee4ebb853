// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use conj_quiz::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run().map_err(|e| eyre!("{e}"))
}

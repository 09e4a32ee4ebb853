// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;
pub mod verb;

pub mod cli;
pub mod fetch;
pub mod gui;
pub mod progress;
pub mod quiz;
pub mod store;

pub use error::{Error, Result};

//! Command Line Interface (CLI) layer for iconfix.
//!
//! This module owns the fixed list of asset paths and the stdout contract
//! (one line per converted or failed file), and wires them to the library
//! functionality exposed via `iconfix::api`.
//!
//! If you are embedding iconfix into another application, prefer using
//! the high-level `iconfix::api` module instead of calling the CLI code.
pub mod runner;

pub use runner::run;

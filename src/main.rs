//! iconfix CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: set up logging and run the
//! fixed asset conversion pass. For programmatic use, prefer the library API
//! (`iconfix::api`).

mod cli;

fn main() {
    cli::run();
}

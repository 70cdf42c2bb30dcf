//! # Shelf CLI Architecture
//!
//! `shelf` is the command-line client for the `shelfapp` library. The binary is
//! intentionally thin: the CLI lives in `src/cli/`, while this file only invokes
//! `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/shelfapp/`: core library (model, filter compiler, storage, commands)
//! - `crates/shelf/`: this CLI tool, depends on the `shelfapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/shelf/src/cli/)                          │
//! │  - clap argument parsing, filter flag tokens (setup.rs)     │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering with console styles (render.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/shelfapp/src/api.rs)                     │
//! │  - Fills in configured defaults                             │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer + Query Compiler (crates/shelfapp/src/...)   │
//! │  - Pure business logic + data access                        │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns every
//! user-facing concern: argument parsing, logging setup, dispatch, error
//! reporting and rendering.
//!
//! ## Output
//!
//! Text output is styled with `console` and degrades to plain text when stdout
//! is not a terminal. `--output json` prints the raw `CmdResult` instead, so
//! scripts can consume search results. Logs always go to stderr.
//!
//! ## Testing Approach
//!
//! - **Commands and compiler (`crates/shelfapp`)**: unit tests next to the
//!   code, scenario and property tests under `tests/`.
//! - **CLI layer**: unit tests for flag token parsing and rendering, and
//!   end-to-end tests in `tests/` that run the binary against a temporary
//!   data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

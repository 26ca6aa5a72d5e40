//! Strictly Reversi console - play the `strictly_reversi` engine in a terminal.
//!
//! # Architecture
//!
//! - **View**: `ConsoleView` borrows a board read-only and renders it as text
//! - **Turn loop**: `TurnLoop` alternates players over any `BufRead`/`Write` pair
//! - **Config**: `ConsoleConfig` loaded from TOML, overridden by CLI flags
//!
//! # Example
//!
//! ```
//! use strictly_reversi::Board;
//! use strictly_reversi_console::ConsoleView;
//!
//! let board = Board::new();
//! let text = ConsoleView::new(&board).render();
//! assert_eq!(text.lines().nth(3), Some("* * * X O * * *"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod turn_loop;
mod view;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, ConsoleConfig};

// Crate-level exports - Driving loop
pub use turn_loop::{LoopError, TurnLoop};

// Crate-level exports - Presentation
pub use view::{ConsoleView, Glyphs};

//! # Connect Four
//!
//! Rules engine for two-player Connect Four with a terminal front end built
//! on Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Board, move application, win detection, game state machine
//! - [`config`]: TOML player settings loading and validation
//! - [`ui`]: Terminal UI: board view and key handling
//! - [`logging`]: File-backed tracing subscriber
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;

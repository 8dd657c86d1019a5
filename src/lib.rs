//! # Minimax Connect Four
//!
//! Connect Four in the terminal against a classic minimax opponent. The
//! engine scores positions by scanning four-cell windows and searches a
//! fixed number of plies ahead; the front end is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, four-in-a-row scanning, state machine
//! - [`ai`] — Agent trait, window heuristic, minimax search
//! - [`ui`] — Terminal UI: game view and event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;

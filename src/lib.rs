//! Wordle Game
//!
//! A Wordle rules engine with hard mode and hints, served over a session-based
//! JSON API or played in the terminal.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wordle_game::game::{Game, GameConfig};
//! use wordle_game::wordlists::WordList;
//!
//! let words = Arc::new(WordList::embedded().unwrap());
//! let mut game = Game::with_answer(words, GameConfig::default(), "bells").unwrap();
//!
//! let record = game.make_guess("shell").unwrap();
//! println!("{record}");
//! ```

// Core domain types
pub mod core;

// Game rules
pub mod game;

// Word lists
pub mod wordlists;

// Per-client games
pub mod session;

// HTTP API
pub mod server;

// Command implementations
pub mod commands;

// CLI and environment settings
pub mod config;

// Logging setup
pub mod telemetry;

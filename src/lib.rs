//! # Genome Explorer - Terminal DNA Sequence Viewer
//!
//! A terminal-based viewer for single DNA sequences using ratatui.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture with clear separation:
//! - `fasta`: loading a sequence file into one flat sequence
//! - `stats`: base composition and GC content, computed once
//! - `model`: sequence, scroll state, and application state
//! - `event`: decoding terminal events into actions
//! - `ui`: TUI rendering with ratatui
//! - `controller`: terminal setup and the event loop
//! - `logging`: file-backed tracing setup
//!
//! Everything except `controller` and `logging` is pure and can be driven
//! without a terminal.

pub mod controller;
pub mod event;
pub mod fasta;
pub mod logging;
pub mod model;
pub mod stats;
pub mod ui;

//! Data model for the sequence viewer.
//!
//! This module contains the data structures for:
//! - The loaded sequence (immutable for the whole session)
//! - The scroll state over that sequence
//! - The complete application state driven by the event loop

use std::ops::Range;

use crate::stats::{compute_stats, Stats};

/// Number of characters shown at once unless configured otherwise.
pub const DEFAULT_WINDOW_WIDTH: usize = 200;
/// Terminal width assumed until the first resize event arrives.
pub const DEFAULT_VIEWPORT_WIDTH: u16 = 80;
/// Terminal height assumed until the first resize event arrives.
pub const DEFAULT_VIEWPORT_HEIGHT: u16 = 24;

/// A DNA sequence held entirely in memory.
///
/// Positions are character positions. For ASCII data (the normal case)
/// they coincide with byte offsets and slicing is constant time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    data: String,
    len: usize,
}

impl Sequence {
    /// Creates a new sequence.
    pub fn new(data: impl Into<String>) -> Self {
        let data = data.into();
        let len = data.chars().count();
        Self { data, len }
    }

    /// Returns the length of the sequence in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Gets the characters in `range`, clamped to the sequence bounds.
    pub fn slice(&self, range: Range<usize>) -> &str {
        let start = range.start.min(self.len);
        let end = range.end.clamp(start, self.len);
        if self.is_ascii() {
            &self.data[start..end]
        } else {
            let start_byte = self.byte_offset(start);
            let end_byte = self.byte_offset(end);
            &self.data[start_byte..end_byte]
        }
    }

    fn is_ascii(&self) -> bool {
        self.data.len() == self.len
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.data
            .char_indices()
            .nth(pos)
            .map_or(self.data.len(), |(i, _)| i)
    }
}

/// Options that shape the view, usually taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Fixed number of characters in the window
    pub window_width: usize,
    /// Size the window from the terminal instead of `window_width`
    pub fit_width: bool,
    /// Use ASCII-only glyphs
    pub ascii: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            fit_width: false,
            ascii: false,
        }
    }
}

/// Scroll position and terminal dimensions.
///
/// `cursor` is the index of the first visible character. It always stays in
/// `0..len` for a non-empty sequence and at `0` for an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub cursor: usize,
    /// Number of characters in the window (always at least 1)
    pub window_width: usize,
    pub fit_width: bool,
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ViewState {
    /// Creates a view at the start of the sequence with default dimensions.
    pub fn new(window_width: usize, fit_width: bool) -> Self {
        Self {
            cursor: 0,
            window_width: window_width.max(1),
            fit_width,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }

    /// Moves the window one position back, stopping at the start.
    pub fn scroll_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the window one position forward, stopping at the last character.
    pub fn scroll_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Stores new terminal dimensions.
    ///
    /// `panel_capacity` is the number of cells the renderer has for bases at
    /// this size; it only replaces the window width when `fit_width` is set.
    pub fn resize(&mut self, width: u16, height: u16, panel_capacity: usize) {
        self.viewport_width = width;
        self.viewport_height = height;
        if self.fit_width {
            self.window_width = panel_capacity.max(1);
        }
    }

    /// Returns the range of visible positions for a sequence of `len`.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.cursor.min(len);
        let end = self.cursor.saturating_add(self.window_width).min(len);
        start..end
    }
}

/// Lifecycle of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Terminated,
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    /// The loaded sequence
    pub sequence: Sequence,
    /// Statistics computed once at load time
    pub stats: Stats,
    /// Scroll position and dimensions
    pub view: ViewState,
    pub run_state: RunState,
    /// Decorate with emoji and arrows instead of plain ASCII
    pub fancy_glyphs: bool,
}

impl AppState {
    /// Creates a new application state with default options.
    pub fn new(sequence: Sequence) -> Self {
        Self::with_options(sequence, ViewOptions::default())
    }

    /// Creates a new application state, computing the statistics once.
    pub fn with_options(sequence: Sequence, options: ViewOptions) -> Self {
        let stats = compute_stats(sequence.as_str());
        Self {
            sequence,
            stats,
            view: ViewState::new(options.window_width, options.fit_width),
            run_state: RunState::Running,
            fancy_glyphs: !options.ascii,
        }
    }

    pub fn scroll_up(&mut self) {
        self.view.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.view.scroll_down(self.sequence.len());
    }

    /// Updates the stored terminal dimensions.
    pub fn resize(&mut self, width: u16, height: u16, panel_capacity: usize) {
        self.view.resize(width, height, panel_capacity);
    }

    /// Ends the session.
    pub fn quit(&mut self) {
        self.run_state = RunState::Terminated;
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Returns the range of positions currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        self.view.visible_range(self.sequence.len())
    }

    /// Returns the characters currently on screen.
    pub fn visible_window(&self) -> &str {
        self.sequence.slice(self.visible_range())
    }
}

//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Title and composition statistics
//! - Colored nucleotide window, one character per cell, split into rows
//! - Static key hint footer
//!
//! The formatting helpers are pure so they can be tested without a
//! terminal; [`render`] only lays them out on a frame.

pub mod glyphs;

use std::ops::Range;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::trace;

use crate::model::AppState;
use crate::stats::Stats;
use glyphs::Glyphs;

/// Height of the title line.
const TITLE_HEIGHT: u16 = 1;
/// Height of the statistics line.
const STATS_HEIGHT: u16 = 1;
/// Height of the key hint footer.
const FOOTER_HEIGHT: u16 = 1;
/// Minimum height of the sequence panel (borders plus one row).
const MIN_SEQ_PANEL_HEIGHT: u16 = 3;
/// Border cells taken by the sequence panel on each axis.
const PANEL_BORDER: u16 = 2;

const TITLE_COLOR: Color = Color::Indexed(205);

/// Maps a residue to a display color.
///
/// Characters without an entry are rendered unstyled.
pub trait ColorScheme {
    fn color(&self, c: char) -> Option<Color>;
}

/// Immutable per-base color lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseColors {
    entries: [(char, Color); 4],
}

impl BaseColors {
    pub const fn new(entries: [(char, Color); 4]) -> Self {
        Self { entries }
    }
}

impl ColorScheme for BaseColors {
    fn color(&self, c: char) -> Option<Color> {
        self.entries
            .iter()
            .find(|(base, _)| *base == c)
            .map(|&(_, color)| color)
    }
}

/// DNA base colors (256-color palette). Lookup is case sensitive.
pub const DNA_COLORS: BaseColors = BaseColors::new([
    ('A', Color::Indexed(82)),
    ('T', Color::Indexed(45)),
    ('G', Color::Indexed(214)),
    ('C', Color::Indexed(199)),
]);

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(STATS_HEIGHT),
            Constraint::Min(MIN_SEQ_PANEL_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let range = state.visible_range();
    trace!(cursor = state.view.cursor, start = range.start, end = range.end, "render");

    let glyphs = glyphs::select(state.fancy_glyphs);
    frame.render_widget(Paragraph::new(title_line(&glyphs)), layout[0]);
    frame.render_widget(Paragraph::new(stats_line(&state.stats)), layout[1]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(window_title(range, state.sequence.len()));
    let row_width = layout[2].width.saturating_sub(PANEL_BORDER) as usize;
    let paragraph = Paragraph::new(sequence_rows(
        state.visible_window(),
        row_width,
        &DNA_COLORS,
    ))
    .block(block);
    frame.render_widget(paragraph, layout[2]);

    frame.render_widget(Paragraph::new(footer_line(&glyphs)), layout[3]);
}

/// Builds the bold title line.
pub fn title_line(glyphs: &Glyphs) -> Line<'static> {
    Line::from(Span::styled(
        format!("{} Genome Explorer", glyphs.title_icon),
        Style::default()
            .fg(TITLE_COLOR)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Formats the one-line statistics summary.
pub fn stats_line(stats: &Stats) -> String {
    format!(
        "Length: {} | GC: {:.2}% | A:{} T:{} G:{} C:{}",
        stats.length, stats.gc_percent, stats.count_a, stats.count_t, stats.count_g, stats.count_c
    )
}

/// Builds the static key hint.
pub fn footer_line(glyphs: &Glyphs) -> String {
    format!(
        "{} {} to scroll {} q to quit",
        glyphs.arrow_up, glyphs.arrow_down, glyphs.separator
    )
}

/// Formats the sequence panel title as a 1-based inclusive range.
pub fn window_title(range: Range<usize>, len: usize) -> String {
    if range.is_empty() {
        "[empty]".to_string()
    } else {
        format!("[{}-{} of {}]", range.start + 1, range.end, len)
    }
}

/// Maps each character of `window` to a span, colored by `scheme`.
///
/// Characters the scheme does not know are passed through unstyled.
pub fn sequence_spans<'a>(window: &'a str, scheme: &dyn ColorScheme) -> Vec<Span<'a>> {
    window
        .char_indices()
        .map(|(i, c)| {
            let text = &window[i..i + c.len_utf8()];
            match scheme.color(c) {
                Some(color) => Span::styled(text, Style::default().fg(color)),
                None => Span::raw(text),
            }
        })
        .collect()
}

/// Splits the colored window into rows of exactly `row_width` characters.
///
/// Rows break at character boundaries only, so every character of the
/// window lands in its own cell whatever it is (spaces included).
pub fn sequence_rows<'a>(
    window: &'a str,
    row_width: usize,
    scheme: &dyn ColorScheme,
) -> Vec<Line<'a>> {
    if row_width == 0 {
        return Vec::new();
    }
    sequence_spans(window, scheme)
        .chunks(row_width)
        .map(|row| Line::from(row.to_vec()))
        .collect()
}

/// Number of cells available for bases in the sequence panel.
pub fn sequence_panel_capacity(terminal_width: u16, terminal_height: u16) -> usize {
    let cols = terminal_width.saturating_sub(PANEL_BORDER) as usize;
    let rows = terminal_height
        .saturating_sub(TITLE_HEIGHT + STATS_HEIGHT + FOOTER_HEIGHT + PANEL_BORDER)
        as usize;
    cols * rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_stats;

    #[test]
    fn test_dna_colors() {
        assert_eq!(DNA_COLORS.color('A'), Some(Color::Indexed(82)));
        assert_eq!(DNA_COLORS.color('T'), Some(Color::Indexed(45)));
        assert_eq!(DNA_COLORS.color('G'), Some(Color::Indexed(214)));
        assert_eq!(DNA_COLORS.color('C'), Some(Color::Indexed(199)));
        assert_eq!(DNA_COLORS.color('N'), None);
        assert_eq!(DNA_COLORS.color('a'), None); // Case sensitive
    }

    #[test]
    fn test_stats_line() {
        let stats = compute_stats("ACGTACGTN");
        assert_eq!(
            stats_line(&stats),
            "Length: 9 | GC: 44.44% | A:2 T:2 G:2 C:2"
        );
    }

    #[test]
    fn test_stats_line_empty() {
        let stats = compute_stats("");
        assert_eq!(stats_line(&stats), "Length: 0 | GC: 0.00% | A:0 T:0 G:0 C:0");
    }

    #[test]
    fn test_sequence_spans_styles() {
        let spans = sequence_spans("AN-C", &DNA_COLORS);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].content, "A");
        assert_eq!(spans[0].style.fg, Some(Color::Indexed(82)));
        assert_eq!(spans[1].style, Style::default());
        assert_eq!(spans[2].style, Style::default());
        assert_eq!(spans[3].style.fg, Some(Color::Indexed(199)));
    }

    #[test]
    fn test_sequence_spans_non_ascii() {
        let spans = sequence_spans("GÉ", &DNA_COLORS);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].content, "É");
    }

    #[test]
    fn test_sequence_rows_break_by_character() {
        let rows = sequence_rows("ACG TA CGT", 4, &DNA_COLORS);
        let text: Vec<String> = rows.iter().map(|line| line.to_string()).collect();
        assert_eq!(text, ["ACG ", "TA C", "GT"]);
        assert_eq!(rows[1].spans[3].style.fg, Some(Color::Indexed(199)));
    }

    #[test]
    fn test_sequence_rows_zero_width() {
        assert!(sequence_rows("ACGT", 0, &DNA_COLORS).is_empty());
    }

    #[test]
    fn test_window_title() {
        assert_eq!(window_title(0..200, 400), "[1-200 of 400]");
        assert_eq!(window_title(399..400, 400), "[400-400 of 400]");
        assert_eq!(window_title(0..0, 0), "[empty]");
    }

    #[test]
    fn test_footer() {
        assert_eq!(footer_line(&glyphs::select(true)), "↑ ↓ to scroll | q to quit");
        assert_eq!(footer_line(&glyphs::select(false)), "^ v to scroll | q to quit");
    }

    #[test]
    fn test_panel_capacity() {
        // 100 - 2 (borders) = 98 cols
        // 30 - 3 (title, stats, footer) - 2 (borders) = 25 rows
        assert_eq!(sequence_panel_capacity(100, 30), 98 * 25);
        assert_eq!(sequence_panel_capacity(1, 1), 0);
    }
}

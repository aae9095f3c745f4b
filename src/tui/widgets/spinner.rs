//! Loading spinner widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::tui::theme::Theme;

/// Spinner animation frames
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// App branding
const APP_NAME: &str = "contribgraph";
const TAGLINE: &str = "Contribution heatmap for the terminal";

/// Loading spinner widget
pub struct Spinner<'a> {
    frame: usize,
    source: &'a str,
    theme: Theme,
}

impl<'a> Spinner<'a> {
    pub fn new(frame: usize, source: &'a str, theme: Theme) -> Self {
        Self {
            frame,
            source,
            theme,
        }
    }

    /// Get the current spinner character
    pub fn current_char(&self) -> char {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }

    /// Advance to next frame, returning the new frame index
    pub fn next_frame(frame: usize) -> usize {
        (frame + 1) % SPINNER_FRAMES.len()
    }

    pub fn message(&self) -> String {
        format!("{} Loading {}...", self.current_char(), self.source)
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 5 || area.width < 35 {
            return;
        }

        // 4 lines: name, tagline, empty, spinner
        let center_y = area.y + area.height / 2;

        let name_y = center_y.saturating_sub(2);
        let name_x = area.x + (area.width.saturating_sub(APP_NAME.len() as u16)) / 2;
        buf.set_string(
            name_x,
            name_y,
            APP_NAME,
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        );

        let tag_y = name_y + 1;
        let tag_x = area.x + (area.width.saturating_sub(TAGLINE.len() as u16)) / 2;
        buf.set_string(tag_x, tag_y, TAGLINE, Style::default().fg(self.theme.muted()));

        let spinner_text = self.message();
        let spinner_y = tag_y + 2;
        let spinner_width = spinner_text.chars().count() as u16;
        let spinner_x = area.x + (area.width.saturating_sub(spinner_width)) / 2;
        buf.set_string(
            spinner_x,
            spinner_y,
            &spinner_text,
            Style::default().fg(self.theme.accent()),
        );
    }
}

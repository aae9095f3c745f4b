//! Bucket color legend: Less ██ ██ ██ ██ ██ More

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::graph::Bucket;
use crate::tui::theme::Theme;

const LESS: &str = "Less ";
const MORE: &str = " More";
const SWATCH: &str = "██";
const SWATCH_GAP: u16 = 1;

pub struct Legend {
    theme: Theme,
}

impl Legend {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Width needed to draw the full legend
    pub fn min_width() -> u16 {
        let swatches = Bucket::all().len() as u16;
        LESS.len() as u16 + swatches * 2 + (swatches - 1) * SWATCH_GAP + MORE.len() as u16
    }
}

impl Widget for Legend {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < Self::min_width() {
            return;
        }

        let muted = Style::default().fg(self.theme.muted());
        let mut x = area.x;
        buf.set_string(x, area.y, LESS, muted);
        x += LESS.len() as u16;

        for (i, bucket) in Bucket::all().iter().enumerate() {
            if i > 0 {
                x += SWATCH_GAP;
            }
            buf.set_string(
                x,
                area.y,
                SWATCH,
                Style::default().fg(self.theme.bucket_color(*bucket)),
            );
            x += 2;
        }

        buf.set_string(x, area.y, MORE, muted);
    }
}

//! Contribution heatmap widget (rows = weekday slots, columns = weeks)

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::graph::{DayCell, RenderedGraph, DAYS_PER_WEEK};
use crate::tui::theme::Theme;

/// Cell dimensions for grid layout with borders
const CELL_HEIGHT: u16 = 2; // 1 row content + 1 row border
const CELL_WIDTH: u16 = 3; // 2 chars content + 1 border
const LABEL_WIDTH: u16 = 4; // "Mon " prefix

/// Rows used by the bordered grid: top border + content/separator per day
pub const GRID_HEIGHT: u16 = 1 + DAYS_PER_WEEK as u16 * CELL_HEIGHT;

/// Grid plus the month label row
pub const HEATMAP_HEIGHT: u16 = GRID_HEIGHT + 1;

/// Box drawing characters for grid border
const BOX_TOP_LEFT: &str = "┌";
const BOX_TOP_RIGHT: &str = "┐";
const BOX_BOTTOM_LEFT: &str = "└";
const BOX_BOTTOM_RIGHT: &str = "┘";
const BOX_HORIZONTAL: &str = "─";
const BOX_VERTICAL: &str = "│";
const BOX_T_DOWN: &str = "┬";
const BOX_T_UP: &str = "┴";
const BOX_T_RIGHT: &str = "├";
const BOX_T_LEFT: &str = "┤";
const BOX_CROSS: &str = "┼";

/// Cell glyphs
const CELL_PLAIN: &str = "██";
const CELL_SELECTED: &str = "▓▓";

/// 2-character cell content; selected cells use a distinct shade
pub fn cell_str(cell: &DayCell) -> &'static str {
    if cell.selected {
        CELL_SELECTED
    } else {
        CELL_PLAIN
    }
}

/// Heatmap widget for ratatui
pub struct Heatmap<'a> {
    graph: &'a RenderedGraph,
    cursor: Option<NaiveDate>,
    theme: Theme,
}

impl<'a> Heatmap<'a> {
    pub fn new(graph: &'a RenderedGraph, theme: Theme) -> Self {
        Self {
            graph,
            cursor: None,
            theme,
        }
    }

    /// Highlight the cell under the keyboard cursor
    pub fn with_cursor(mut self, cursor: Option<NaiveDate>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Number of week columns that fit in `width` (at least 1)
    pub fn weeks_for_width(width: u16) -> usize {
        // Account for label + left border (1 char)
        let available = width.saturating_sub(LABEL_WIDTH + 1);
        ((available / CELL_WIDTH) as usize).max(1)
    }

    /// Week index of the cursor within the full graph
    fn cursor_week(&self) -> Option<usize> {
        let cursor = self.cursor?;
        let first = self.graph.weeks.first()?.first()?.date;
        let offset = (cursor - first).num_days();
        if offset < 0 {
            return None;
        }
        let idx = offset as usize / DAYS_PER_WEEK;
        (idx < self.graph.weeks.len()).then_some(idx)
    }

    /// Weeks that fit in `width`: the most recent ones, shifted back if
    /// the cursor sits further in the past
    fn visible_weeks(&self, width: u16) -> &'a [Vec<DayCell>] {
        let total = self.graph.weeks.len();
        let count = Self::weeks_for_width(width).min(total);
        let mut start = total - count;
        if let Some(idx) = self.cursor_week() {
            if idx < start {
                start = idx;
            }
        }
        &self.graph.weeks[start..start + count]
    }

    /// Calculate x_offset for centering the heatmap
    fn calculate_x_offset(area: Rect, weeks: usize) -> u16 {
        let heatmap_width = LABEL_WIDTH + 1 + (weeks as u16 * CELL_WIDTH);
        area.width.saturating_sub(heatmap_width) / 2
    }

    /// Render the top border row: ┌──┬──┬──┐
    fn render_top_border(&self, area: Rect, buf: &mut Buffer, weeks: usize, x_offset: u16) {
        let start_x = area.x + x_offset + LABEL_WIDTH;
        let y = area.y;
        let max_x = area.x + area.width;
        let border_style = Style::default().fg(self.theme.muted());

        if start_x < max_x {
            buf.set_string(start_x, y, BOX_TOP_LEFT, border_style);
        }

        for col in 0..weeks {
            let x = start_x + 1 + (col as u16 * CELL_WIDTH);
            if x + 2 >= max_x {
                break;
            }
            buf.set_string(x, y, BOX_HORIZONTAL, border_style);
            buf.set_string(x + 1, y, BOX_HORIZONTAL, border_style);

            if col < weeks - 1 {
                buf.set_string(x + 2, y, BOX_T_DOWN, border_style);
            } else {
                buf.set_string(x + 2, y, BOX_TOP_RIGHT, border_style);
            }
        }
    }

    /// Render a content row: Mon │██│██│██│
    #[allow(clippy::too_many_arguments)]
    fn render_content_row(
        &self,
        area: Rect,
        buf: &mut Buffer,
        y: u16,
        day_idx: usize,
        label: &str,
        weeks: &[Vec<DayCell>],
        x_offset: u16,
    ) {
        let start_x = area.x + x_offset + LABEL_WIDTH;
        let max_x = area.x + area.width;
        let border_style = Style::default().fg(self.theme.muted());
        let cursor_style = Style::default()
            .fg(self.theme.accent())
            .add_modifier(Modifier::BOLD);

        buf.set_string(
            area.x + x_offset,
            y,
            label,
            Style::default().fg(self.theme.muted()),
        );

        if start_x < max_x {
            buf.set_string(start_x, y, BOX_VERTICAL, border_style);
        }

        let mut cursor_x = None;
        for (col_idx, week) in weeks.iter().enumerate() {
            let x = start_x + 1 + (col_idx as u16 * CELL_WIDTH);
            if x + 2 >= max_x {
                break;
            }

            if let Some(cell) = week.get(day_idx) {
                let mut style = Style::default().fg(self.theme.bucket_color(cell.bucket));
                if cell.selected {
                    style = style.bg(self.theme.selection());
                }
                buf.set_string(x, y, cell_str(cell), style);

                if self.cursor == Some(cell.date) {
                    cursor_x = Some(x);
                }
            }

            buf.set_string(x + 2, y, BOX_VERTICAL, border_style);
        }

        // Cursor: accent both borders of the cell
        if let Some(x) = cursor_x {
            buf.set_string(x - 1, y, BOX_VERTICAL, cursor_style);
            buf.set_string(x + 2, y, BOX_VERTICAL, cursor_style);
        }
    }

    /// Render a separator row: ├──┼──┼──┤
    fn render_separator_row(
        &self,
        area: Rect,
        buf: &mut Buffer,
        y: u16,
        weeks: usize,
        x_offset: u16,
    ) {
        let start_x = area.x + x_offset + LABEL_WIDTH;
        let max_x = area.x + area.width;
        let border_style = Style::default().fg(self.theme.muted());

        if start_x < max_x {
            buf.set_string(start_x, y, BOX_T_RIGHT, border_style);
        }

        for col in 0..weeks {
            let x = start_x + 1 + (col as u16 * CELL_WIDTH);
            if x + 2 >= max_x {
                break;
            }
            buf.set_string(x, y, BOX_HORIZONTAL, border_style);
            buf.set_string(x + 1, y, BOX_HORIZONTAL, border_style);

            if col < weeks - 1 {
                buf.set_string(x + 2, y, BOX_CROSS, border_style);
            } else {
                buf.set_string(x + 2, y, BOX_T_LEFT, border_style);
            }
        }
    }

    /// Render the bottom border row: └──┴──┴──┘
    fn render_bottom_border(
        &self,
        area: Rect,
        buf: &mut Buffer,
        y: u16,
        weeks: usize,
        x_offset: u16,
    ) {
        let start_x = area.x + x_offset + LABEL_WIDTH;
        let max_x = area.x + area.width;
        let border_style = Style::default().fg(self.theme.muted());

        if start_x < max_x {
            buf.set_string(start_x, y, BOX_BOTTOM_LEFT, border_style);
        }

        for col in 0..weeks {
            let x = start_x + 1 + (col as u16 * CELL_WIDTH);
            if x + 2 >= max_x {
                break;
            }
            buf.set_string(x, y, BOX_HORIZONTAL, border_style);
            buf.set_string(x + 1, y, BOX_HORIZONTAL, border_style);

            if col < weeks - 1 {
                buf.set_string(x + 2, y, BOX_T_UP, border_style);
            } else {
                buf.set_string(x + 2, y, BOX_BOTTOM_RIGHT, border_style);
            }
        }
    }

    /// Spread the twelve month labels evenly under the grid. Decorative:
    /// positions do not track the dates in each column.
    fn render_month_labels(&self, area: Rect, buf: &mut Buffer, start_x: u16, y: u16, weeks: usize) {
        let style = Style::default().fg(self.theme.muted());
        let months = &self.graph.month_labels;
        let mut next_free = start_x;

        for (i, label) in months.iter().enumerate() {
            let col = i * weeks / months.len();
            let x = start_x + (col as u16 * CELL_WIDTH);
            if x < next_free {
                continue;
            }
            if x + label.len() as u16 > area.x + area.width {
                break;
            }
            buf.set_string(x, y, label, style);
            next_free = x + label.len() as u16 + 1;
        }
    }
}

impl Widget for Heatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.graph.weeks.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let visible = self.visible_weeks(area.width);
        let weeks = visible.len();
        let x_offset = Self::calculate_x_offset(area, weeks);
        let start_x = area.x + x_offset + LABEL_WIDTH;

        // Row 0: Top border (┌──┬──┬──┐)
        self.render_top_border(area, buf, weeks, x_offset);

        // Rows 1-14: Alternating content and separator
        for (day_idx, label) in self.graph.weekday_labels.iter().enumerate() {
            let content_y = area.y + 1 + (day_idx as u16 * CELL_HEIGHT);
            if content_y >= area.y + area.height {
                break;
            }

            self.render_content_row(area, buf, content_y, day_idx, label, visible, x_offset);

            let separator_y = content_y + 1;
            if separator_y < area.y + area.height {
                if day_idx < DAYS_PER_WEEK - 1 {
                    self.render_separator_row(area, buf, separator_y, weeks, x_offset);
                } else {
                    self.render_bottom_border(area, buf, separator_y, weeks, x_offset);
                }
            }
        }

        // Month labels below the grid
        let month_label_y = area.y + GRID_HEIGHT;
        if month_label_y < area.y + area.height {
            self.render_month_labels(area, buf, start_x + 1, month_label_y, weeks);
        }
    }
}

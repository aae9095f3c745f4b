//! Overview layout widget: summary, heatmap, legend and cursor details

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::heatmap::{Heatmap, HEATMAP_HEIGHT};
use super::legend::Legend;
use crate::graph::{DayCell, RenderedGraph};
use crate::tui::theme::Theme;

/// Format a number with thousand separators (e.g., 1234567 -> "1,234,567")
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);

    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in s.bytes().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch as char);
    }

    result
}

/// Data for the overview display (references to avoid cloning)
#[derive(Debug)]
pub struct OverviewData<'a> {
    pub graph: &'a RenderedGraph,
    pub cursor: Option<&'a DayCell>,
    pub selected_count: usize,
    pub source: &'a str,
}

/// Maximum content width (50 weeks * 3-char cells + label/border = 155)
const MAX_CONTENT_WIDTH: u16 = 165;

/// Overview widget combining all elements
pub struct Overview<'a> {
    data: OverviewData<'a>,
    theme: Theme,
}

impl<'a> Overview<'a> {
    pub fn new(data: OverviewData<'a>, theme: Theme) -> Self {
        Self { data, theme }
    }
}

impl Widget for Overview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = area.width.min(MAX_CONTENT_WIDTH);
        let x_offset = (area.width.saturating_sub(content_width)) / 2;
        let centered_area = Rect {
            x: area.x + x_offset,
            y: area.y,
            width: content_width,
            height: area.height,
        };

        let chunks = Layout::vertical([
            Constraint::Length(1),              // [0] Title
            Constraint::Length(1),              // [1] Separator
            Constraint::Length(2),              // [2] Hero stat
            Constraint::Length(1),              // [3] Sub-stats
            Constraint::Length(1),              // [4] Blank
            Constraint::Length(HEATMAP_HEIGHT), // [5] Heatmap
            Constraint::Length(1),              // [6] Legend
            Constraint::Length(1),              // [7] Blank
            Constraint::Length(2),              // [8] Cursor details
            Constraint::Fill(1),                // [9] Remaining
            Constraint::Length(1),              // [10] Separator
            Constraint::Length(1),              // [11] Keybindings
        ])
        .split(centered_area);

        self.render_title(chunks[0], buf);
        self.render_separator(chunks[1], buf);
        self.render_hero_stat(chunks[2], buf);
        self.render_sub_stats(chunks[3], buf);

        Heatmap::new(self.data.graph, self.theme)
            .with_cursor(self.data.cursor.map(|c| c.date))
            .render(chunks[5], buf);
        self.render_legend(chunks[6], buf);

        self.render_cursor_details(chunks[8], buf);
        self.render_separator(chunks[10], buf);
        self.render_keybindings(chunks[11], buf);
    }
}

impl Overview<'_> {
    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "contribgraph",
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", self.data.source),
                Style::default().fg(self.theme.muted()),
            ),
        ]))
        .alignment(Alignment::Center);

        title.render(area, buf);
    }

    fn render_separator(&self, area: Rect, buf: &mut Buffer) {
        let line = "─".repeat(area.width as usize);
        buf.set_string(
            area.x,
            area.y,
            &line,
            Style::default().fg(self.theme.muted()),
        );
    }

    fn render_hero_stat(&self, area: Rect, buf: &mut Buffer) {
        let weeks = self.data.graph.weeks.len();
        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                format_number(self.data.graph.total),
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("contributions in the last {} weeks", weeks),
                Style::default().fg(self.theme.muted()),
            )),
        ])
        .alignment(Alignment::Center);

        hero.render(area, buf);
    }

    fn render_sub_stats(&self, area: Rect, buf: &mut Buffer) {
        let stats = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} active days", self.data.graph.active_days),
                Style::default().fg(self.theme.text()),
            ),
            Span::styled("  ·  ", Style::default().fg(self.theme.muted())),
            Span::styled(
                format!("{} selected", self.data.selected_count),
                Style::default().fg(self.theme.selection()),
            ),
        ]))
        .alignment(Alignment::Center);

        stats.render(area, buf);
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let width = Legend::min_width();
        if area.width < width {
            return;
        }
        let legend_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y,
            width,
            height: 1,
        };
        Legend::new(self.theme).render(legend_area, buf);
    }

    /// Tooltip of the cell under the cursor
    fn render_cursor_details(&self, area: Rect, buf: &mut Buffer) {
        let Some(cell) = self.data.cursor else {
            return;
        };

        let mut title = vec![Span::styled(
            cell.tooltip.title.clone(),
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        )];
        if cell.selected {
            title.push(Span::styled(
                "  [selected]",
                Style::default().fg(self.theme.selection()),
            ));
        }

        // Empty days carry no date in their tooltip; show it dimmed anyway
        let date_line = match &cell.tooltip.date {
            Some(date) => Span::styled(date.clone(), Style::default().fg(self.theme.date())),
            None => Span::styled(
                cell.date.format("%Y-%m-%d").to_string(),
                Style::default().fg(self.theme.muted()),
            ),
        };

        Paragraph::new(vec![Line::from(title), Line::from(date_line)])
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_keybindings(&self, area: Rect, buf: &mut Buffer) {
        let key = Style::default().fg(self.theme.accent());
        let desc = Style::default().fg(self.theme.muted());
        let bindings = Paragraph::new(Line::from(vec![
            Span::styled("←↑↓→", key),
            Span::styled(": Move", desc),
            Span::raw("  "),
            Span::styled("Space", key),
            Span::styled(": Select", desc),
            Span::raw("  "),
            Span::styled("r", key),
            Span::styled(": Reload", desc),
            Span::raw("  "),
            Span::styled("?", key),
            Span::styled(": Help", desc),
            Span::raw("  "),
            Span::styled("q", key),
            Span::styled(": Quit", desc),
        ]))
        .alignment(Alignment::Center);

        bindings.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphView;
    use crate::types::ActivityRecord;
    use chrono::NaiveDate;

    // ========== format_number tests ==========

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn test_format_number_small() {
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn test_format_number_thousand() {
        assert_eq!(format_number(1000), "1,000");
    }

    #[test]
    fn test_format_number_large() {
        assert_eq!(format_number(1234567), "1,234,567");
    }

    // ========== Overview rendering tests ==========

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_overview_shows_total_and_cursor_tooltip() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let mut activity = ActivityRecord::new();
        activity.insert(today, 1200).unwrap();
        let view = GraphView::build(today, 4, &activity).unwrap();
        let graph = view.render();
        let cursor = graph.cells().last();

        let data = OverviewData {
            graph: &graph,
            cursor,
            selected_count: 0,
            source: "calendar.json",
        };
        let area = Rect::new(0, 0, 80, 32);
        let mut buf = Buffer::empty(area);
        Overview::new(data, Theme::Dark).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("1,200"));
        assert!(text.contains("contributions in the last 4 weeks"));
        assert!(text.contains("30+ contributions"));
        assert!(text.contains("Sunday, January 7, 2024"));
    }
}

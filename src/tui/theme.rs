//! Terminal theme detection and color definitions

use ratatui::style::Color;

use crate::graph::Bucket;

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Must be called **before** entering raw mode (ratatui::init).
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Primary text color (headers, body text)
    pub fn text(self) -> Color {
        match self {
            Self::Dark => Color::White,
            Self::Light => Color::Black,
        }
    }

    /// Active/accent color (cursor, keybinding keys, selection)
    pub fn accent(self) -> Color {
        match self {
            Self::Dark => Color::Cyan,
            Self::Light => Color::Indexed(25), // dark blue (ANSI 256)
        }
    }

    /// Secondary/muted text (borders, axis labels, hints)
    pub fn muted(self) -> Color {
        match self {
            Self::Dark => Color::DarkGray,
            Self::Light => Color::Gray,
        }
    }

    /// Date text color
    pub fn date(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::Indexed(130), // dark orange/yellow (ANSI 256)
        }
    }

    /// Error/negative indicator color
    pub fn error(self) -> Color {
        match self {
            Self::Dark => Color::Red,
            Self::Light => Color::Indexed(124), // dark red (ANSI 256)
        }
    }

    /// Background behind selected cells
    pub fn selection(self) -> Color {
        match self {
            Self::Dark => Color::Indexed(220), // gold (ANSI 256)
            Self::Light => Color::Indexed(208), // orange (ANSI 256)
        }
    }

    /// Cell color for a bucket. Uses the bucket's color token, except the
    /// empty bucket on dark terminals where near-white would glare.
    pub fn bucket_color(self, bucket: Bucket) -> Color {
        match (self, bucket) {
            (Self::Dark, Bucket::None) => Color::Indexed(236),
            _ => {
                let (r, g, b) = bucket.rgb();
                Color::Rgb(r, g, b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_colors() {
        let t = Theme::Dark;
        assert_eq!(t.text(), Color::White);
        assert_eq!(t.accent(), Color::Cyan);
        assert_eq!(t.muted(), Color::DarkGray);
        assert_eq!(t.date(), Color::Yellow);
        assert_eq!(t.error(), Color::Red);
        assert_eq!(t.selection(), Color::Indexed(220));
    }

    #[test]
    fn test_light_theme_colors() {
        let t = Theme::Light;
        assert_eq!(t.text(), Color::Black);
        assert_eq!(t.accent(), Color::Indexed(25));
        assert_eq!(t.muted(), Color::Gray);
        assert_eq!(t.date(), Color::Indexed(130));
        assert_eq!(t.error(), Color::Indexed(124));
        assert_eq!(t.selection(), Color::Indexed(208));
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_light_bucket_colors_follow_tokens() {
        let t = Theme::Light;
        assert_eq!(t.bucket_color(Bucket::None), Color::Rgb(0xED, 0xED, 0xED));
        assert_eq!(t.bucket_color(Bucket::Low), Color::Rgb(0xAC, 0xD5, 0xF2));
        assert_eq!(t.bucket_color(Bucket::Medium), Color::Rgb(0x7F, 0xA8, 0xC9));
        assert_eq!(t.bucket_color(Bucket::High), Color::Rgb(0x52, 0x7B, 0xA0));
        assert_eq!(
            t.bucket_color(Bucket::Saturated),
            Color::Rgb(0x25, 0x4E, 0x77)
        );
    }

    #[test]
    fn test_dark_empty_bucket_is_dimmed() {
        let t = Theme::Dark;
        assert_eq!(t.bucket_color(Bucket::None), Color::Indexed(236));
        assert_eq!(t.bucket_color(Bucket::Low), Color::Rgb(0xAC, 0xD5, 0xF2));
    }
}

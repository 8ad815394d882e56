use lawyer_common::NotificationLevel;
use lawyer_config::colors::parse_color;
use lawyer_config::schema::ColorConfig;
use ratatui::style::Color;

/// Resolved terminal colours for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Theme {
    pub user: Color,
    pub assistant: Color,
    pub citation: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub border: Color,
}

impl Theme {
    /// Unparseable entries fall back to the built-in palette.
    pub(crate) fn from_config(colors: &ColorConfig) -> Self {
        let d = ColorConfig::default();
        Self {
            user: resolve(&colors.user, &d.user),
            assistant: resolve(&colors.assistant, &d.assistant),
            citation: resolve(&colors.citation, &d.citation),
            success: resolve(&colors.success, &d.success),
            warning: resolve(&colors.warning, &d.warning),
            error: resolve(&colors.error, &d.error),
            muted: resolve(&colors.muted, &d.muted),
            border: resolve(&colors.border, &d.border),
        }
    }

    pub(crate) fn for_level(&self, level: NotificationLevel) -> Color {
        match level {
            NotificationLevel::Info => self.border,
            NotificationLevel::Success => self.success,
            NotificationLevel::Warning => self.warning,
            NotificationLevel::Error => self.error,
        }
    }
}

fn resolve(value: &str, fallback: &str) -> Color {
    parse_color(value)
        .or_else(|_| parse_color(fallback))
        .map(|c| Color::Rgb(c.r, c.g, c.b))
        .unwrap_or(Color::Reset)
}

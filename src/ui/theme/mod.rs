//! Color palettes for the dashboard

use ratatui::style::{Color, Modifier, Style};

/// Complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub styles: ThemeStyles,
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Base colors
    pub bg_primary: Color,
    pub fg_primary: Color,
    pub fg_muted: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub border: Color,

    // Graphs
    pub cpu_load: Color,
    pub cpu_temp: Color,
    /// One per memory field, reused when there are more fields.
    pub memory: [Color; 5],
    pub io_upper: Color,
    pub io_lower: Color,
    pub battery: Color,
    /// Thread load from idle to busy.
    pub load: [Color; 4],
}

#[derive(Debug, Clone)]
pub struct ThemeStyles {
    pub info_line: Style,
    pub panel_title: Style,
    pub panel_border: Style,
    pub cpu_border: Style,
    pub box_border: Style,
    pub table_header: Style,
    pub table_accent: Style,
    pub text: Style,
    pub usage_warning: Style,
    pub usage_critical: Style,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "tokyo-night" | "tokyo_night" => Self::tokyo_night(),
            "default" => Self::ansi(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::ansi()
            }
        }
    }

    /// Terminal palette colors, so the dashboard follows the user's scheme
    pub fn ansi() -> Self {
        let colors = ThemeColors {
            bg_primary: Color::Reset,
            fg_primary: Color::Reset,
            fg_muted: Color::DarkGray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            border: Color::White,

            cpu_load: Color::Blue,
            cpu_temp: Color::Magenta,
            memory: [
                Color::Yellow,
                Color::Green,
                Color::Blue,
                Color::Magenta,
                Color::Red,
            ],
            io_upper: Color::Green,
            io_lower: Color::Blue,
            battery: Color::Yellow,
            load: [Color::Blue, Color::Cyan, Color::Cyan, Color::Green],
        };

        Self::from_colors("default", colors)
    }

    /// Tokyo Night theme
    pub fn tokyo_night() -> Self {
        let colors = ThemeColors {
            bg_primary: Color::Rgb(26, 27, 38),
            fg_primary: Color::Rgb(192, 202, 245),
            fg_muted: Color::Rgb(86, 95, 137),

            success: Color::Rgb(158, 206, 106),
            warning: Color::Rgb(224, 175, 104),
            error: Color::Rgb(247, 118, 142),

            border: Color::Rgb(65, 72, 104),

            cpu_load: Color::Rgb(122, 162, 247),
            cpu_temp: Color::Rgb(187, 154, 247),
            memory: [
                Color::Rgb(224, 175, 104),
                Color::Rgb(158, 206, 106),
                Color::Rgb(122, 162, 247),
                Color::Rgb(187, 154, 247),
                Color::Rgb(247, 118, 142),
            ],
            io_upper: Color::Rgb(158, 206, 106),
            io_lower: Color::Rgb(122, 162, 247),
            battery: Color::Rgb(224, 175, 104),
            load: [
                Color::Rgb(122, 162, 247),
                Color::Rgb(125, 207, 255),
                Color::Rgb(125, 207, 255),
                Color::Rgb(158, 206, 106),
            ],
        };

        Self::from_colors("tokyo-night", colors)
    }

    fn from_colors(name: &str, colors: ThemeColors) -> Self {
        let styles = ThemeStyles {
            info_line: Style::default().fg(colors.fg_primary),
            panel_title: Style::default()
                .fg(colors.fg_primary)
                .add_modifier(Modifier::BOLD),
            panel_border: Style::default().fg(colors.border),
            cpu_border: Style::default().fg(colors.cpu_load),
            box_border: Style::default().fg(colors.border),
            table_header: Style::default()
                .fg(colors.fg_primary)
                .add_modifier(Modifier::BOLD),
            table_accent: Style::default().fg(colors.success),
            text: Style::default().fg(colors.fg_primary),
            usage_warning: Style::default().fg(colors.warning),
            usage_critical: Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD),
        };

        Self {
            name: name.to_string(),
            colors,
            styles,
        }
    }

    /// Color for a value in `[min, max]`, by nearest quartile.
    pub fn load_color(&self, value: f64, min: f64, max: f64) -> Color {
        let t = if max > min { (value - min) / (max - min) } else { 0.0 };
        let index = (t * 3.0).round();
        let index = if index.is_nan() { 0 } else { index.clamp(0.0, 3.0) as usize };
        self.colors.load[index]
    }

    pub fn memory_color(&self, field: usize) -> Color {
        self.colors.memory[field % self.colors.memory.len()]
    }

    /// Mount usage styling: critical when nearly full, warning when close.
    pub fn usage_style(&self, percent: f64) -> Style {
        if percent > 99.0 {
            self.styles.usage_critical
        } else if percent > 95.0 {
            self.styles.usage_warning
        } else {
            self.styles.text
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_quartiles() {
        let theme = Theme::ansi();
        assert_eq!(theme.load_color(0.0, 0.0, 100.0), Color::Blue);
        assert_eq!(theme.load_color(16.0, 0.0, 100.0), Color::Blue);
        assert_eq!(theme.load_color(17.0, 0.0, 100.0), Color::Cyan);
        assert_eq!(theme.load_color(60.0, 0.0, 100.0), Color::Cyan);
        assert_eq!(theme.load_color(90.0, 0.0, 100.0), Color::Green);
        assert_eq!(theme.load_color(250.0, 0.0, 100.0), Color::Green);
        assert_eq!(theme.load_color(f64::NAN, 0.0, 100.0), Color::Blue);
    }

    #[test]
    fn names_resolve() {
        assert_eq!(Theme::from_name("Tokyo-Night").name, "tokyo-night");
        assert_eq!(Theme::from_name("default").name, "default");
        assert_eq!(Theme::from_name("nope").name, "default");
    }

    #[test]
    fn usage_thresholds() {
        let theme = Theme::ansi();
        assert_eq!(theme.usage_style(50.0), theme.styles.text);
        assert_eq!(theme.usage_style(96.0), theme.styles.usage_warning);
        assert_eq!(theme.usage_style(99.5), theme.styles.usage_critical);
    }
}

//! Info line widget

use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::panels::InfoLine;
use crate::ui::theme::Theme;

pub struct InfoBar<'a> {
    info: &'a InfoLine,
    theme: &'a Theme,
}

impl<'a> InfoBar<'a> {
    pub fn new(info: &'a InfoLine, theme: &'a Theme) -> Self {
        Self { info, theme }
    }
}

impl<'a> Widget for InfoBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        // Background
        buf.set_style(area, self.theme.styles.info_line);

        let style = self.theme.styles.info_line;
        let left = self.info.left();
        buf.set_span(area.x, area.y, &Span::styled(&left, style), area.width);

        if let Some(clock) = self.info.center(area.width) {
            let x = area.x + area.width.saturating_sub(clock.width() as u16) / 2;
            buf.set_span(x, area.y, &Span::styled(&clock, style), area.right() - x);
        }

        // Uptime on the right
        let right = self.info.right();
        let right_width = (right.width() as u16).min(area.width);
        let x = area.right() - right_width;
        buf.set_span(x, area.y, &Span::styled(&right, style), right_width);
    }
}

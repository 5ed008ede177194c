//! Memory panel widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::{draw_rows, panel_block};
use crate::core::panels::MemoryPanel;
use crate::ui::theme::Theme;

pub struct MemoryWidget<'a> {
    panel: &'a MemoryPanel,
    theme: &'a Theme,
}

impl<'a> MemoryWidget<'a> {
    pub fn new(panel: &'a MemoryPanel, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }
}

impl<'a> Widget for MemoryWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.panel.title(), self.theme.styles.panel_border, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        for (i, rows) in self.panel.field_rows().iter().enumerate() {
            let style = Style::default().fg(self.theme.memory_color(i));
            y = draw_rows(buf, inner, y, rows, style);
        }
    }
}

//! Battery panel widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::{draw_rows, panel_block};
use crate::core::panels::BatteryPanel;
use crate::ui::theme::Theme;

pub struct BatteryWidget<'a> {
    panel: &'a BatteryPanel,
    theme: &'a Theme,
}

impl<'a> BatteryWidget<'a> {
    pub fn new(panel: &'a BatteryPanel, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }
}

impl<'a> Widget for BatteryWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.panel.is_critical() {
            self.theme.styles.usage_critical
        } else {
            self.theme.styles.panel_border
        };
        let block = panel_block(self.panel.title(), border, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        draw_rows(
            buf,
            inner,
            inner.y,
            &self.panel.rows(),
            Style::default().fg(self.theme.colors.battery),
        );
    }
}

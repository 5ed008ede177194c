//! Network panel widget

use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};

use super::{panel_block, render_throughput};
use crate::core::panels::NetworkPanel;
use crate::ui::theme::Theme;

pub struct NetworkWidget<'a> {
    panel: &'a NetworkPanel,
    theme: &'a Theme,
}

impl<'a> NetworkWidget<'a> {
    pub fn new(panel: &'a NetworkPanel, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }
}

impl<'a> Widget for NetworkWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.panel.title(), self.theme.styles.panel_border, self.theme)
            .title_bottom(Span::styled(
                format!(" {} ", self.panel.version()),
                self.theme.styles.text,
            ));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let y = render_throughput(&self.panel.io, inner, buf, self.theme);
        if y < inner.bottom() {
            buf.set_stringn(
                inner.x,
                y,
                self.panel.address_line(),
                usize::from(inner.width),
                self.theme.styles.text,
            );
        }
    }
}

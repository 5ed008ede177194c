//! CPU panel widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use super::{draw_rows, panel_block};
use crate::core::panels::CpuPanel;
use crate::ui::theme::Theme;

pub struct CpuWidget<'a> {
    panel: &'a CpuPanel,
    theme: &'a Theme,
}

impl<'a> CpuWidget<'a> {
    pub fn new(panel: &'a CpuPanel, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }

    fn render_thread_box(&self, inner: Rect, buf: &mut Buffer) {
        let rows = self.panel.thread_rows();
        let box_width = (self.panel.thread_box_width() as u16).min(inner.width);
        let box_height = (rows.len() as u16 + 2).min(inner.height);
        // Centered vertically next to the graphs
        let top = inner.y + (inner.height - box_height) / 2;
        let box_area = Rect::new(inner.right() - box_width, top, box_width, box_height);

        let mut block = Block::default()
            .title(Span::styled(self.panel.box_title(), self.theme.styles.text))
            .borders(Borders::ALL)
            .border_style(self.theme.styles.box_border);
        if let Some(frequency) = self.panel.frequency() {
            block = block.title_bottom(Span::styled(frequency, self.theme.styles.text));
        }
        let box_inner = block.inner(box_area);
        block.render(box_area, buf);

        for (i, row) in rows.iter().enumerate().take(usize::from(box_inner.height)) {
            let load_style = Style::default().fg(self.theme.load_color(row.load, 0.0, 100.0));
            let mut spans = vec![Span::styled(format!("{} {:3.0}%", row.graph, row.load), load_style)];
            if let Some((graph, temp)) = &row.core_temp {
                spans.push(Span::styled(
                    format!(" {graph} {temp:3.0}°C"),
                    Style::default().fg(self.theme.colors.cpu_temp),
                ));
            }
            buf.set_line(box_inner.x, box_inner.y + i as u16, &Line::from(spans), box_inner.width);
        }
    }
}

impl<'a> Widget for CpuWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.panel.title(), self.theme.styles.cpu_border, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let y = draw_rows(
            buf,
            inner,
            inner.y,
            &self.panel.load_rows(),
            Style::default().fg(self.theme.colors.cpu_load),
        );
        draw_rows(
            buf,
            inner,
            y,
            &self.panel.temp_rows(),
            Style::default().fg(self.theme.colors.cpu_temp),
        );

        self.render_thread_box(inner, buf);
    }
}

//! UI Widgets

pub mod battery_panel;
pub mod cpu_panel;
pub mod disk_panel;
pub mod info_bar;
pub mod memory_panel;
pub mod network_panel;
pub mod process_table;

pub use battery_panel::BatteryWidget;
pub use cpu_panel::CpuWidget;
pub use disk_panel::DiskWidget;
pub use info_bar::InfoBar;
pub use memory_panel::MemoryWidget;
pub use network_panel::NetworkWidget;
pub use process_table::ProcessTable;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::panels::{Throughput, BOX_WIDTH};
use crate::ui::theme::Theme;

/// Square bordered panel with a left aligned title.
fn panel_block<'a>(title: String, border: Style, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {title} "), theme.styles.panel_title))
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(theme.colors.bg_primary))
}

/// Draw `rows` top down from `(area.x, y)`, clipped to `area`. Returns the
/// row below the last one drawn.
fn draw_rows(buf: &mut Buffer, area: Rect, mut y: u16, rows: &[String], style: Style) -> u16 {
    for row in rows {
        if y >= area.bottom() {
            break;
        }
        buf.set_stringn(area.x, y, row, usize::from(area.width), style);
        y += 1;
    }
    y
}

/// Two opposed rate graphs with their side boxes. Returns the row below
/// the lower graph.
fn render_throughput(io: &Throughput, area: Rect, buf: &mut Buffer, theme: &Theme) -> u16 {
    let height = io.graph_height();
    let rows = io.graph_rows();
    let (upper, lower) = rows.split_at(height.min(rows.len()));

    let y = draw_rows(buf, area, area.y, upper, Style::default().fg(theme.colors.io_upper));
    let bottom = draw_rows(buf, area, y, lower, Style::default().fg(theme.colors.io_lower));

    let box_width = (BOX_WIDTH as u16).min(area.width);
    let box_x = area.right().saturating_sub(box_width);
    for (index, top) in [(0, area.y), (1, y)] {
        if top >= area.bottom() {
            continue;
        }
        let box_height = (area.bottom() - top).min(5);
        let box_area = Rect::new(box_x, top, box_width, box_height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.styles.box_border);
        let inner = block.inner(box_area);
        block.render(box_area, buf);

        let color = if index == 0 {
            theme.colors.io_upper
        } else {
            theme.colors.io_lower
        };
        draw_rows(buf, inner, inner.y, &io.side_box(index), Style::default().fg(color));
    }
    bottom
}

/// Cut or pad `text` to exactly `width` terminal columns.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        let pad = width - text.width();
        return format!("{text}{}", " ".repeat(pad));
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
        used += 1;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_cuts() {
        assert_eq!(fit("/", 4), "/   ");
        assert_eq!(fit("/home/ada", 6), "/home…");
        assert_eq!(fit("日本語", 4), "日… ");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn rows_clip_to_area() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        let rows = vec!["abcdef".to_string(), "gh".to_string(), "ij".to_string()];
        let next = draw_rows(&mut buf, area, 0, &rows, Style::default());
        assert_eq!(next, 2);
        assert_eq!(buf, Buffer::with_lines(vec!["abcd", "gh  "]));
    }
}

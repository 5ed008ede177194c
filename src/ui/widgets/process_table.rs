//! Process table widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::{fit, panel_block};
use crate::core::panels::ProcessPanel;
use crate::ui::format;
use crate::ui::theme::Theme;

const PID: usize = 7;
const THREADS: usize = 4;
const USER: usize = 8;
const MEM: usize = 6;
const CPU: usize = 5;
/// Fixed columns plus one space after each of the six leading columns.
const FIXED: usize = PID + THREADS + USER + MEM + CPU + 6;

pub struct ProcessTable<'a> {
    panel: &'a ProcessPanel,
    theme: &'a Theme,
}

impl<'a> ProcessTable<'a> {
    pub fn new(panel: &'a ProcessPanel, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }
}

/// Program gets a third of the flexible width, arguments the rest.
fn flexible_widths(width: usize) -> (usize, usize) {
    let flexible = width.saturating_sub(FIXED).max(2);
    let program = (flexible / 3).max(1);
    (program, flexible - program)
}

impl<'a> Widget for ProcessTable<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.panel.title(), self.theme.styles.panel_border, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let (program, args) = flexible_widths(usize::from(inner.width));
        let header = format!(
            "{:>PID$} {} {} {:>THREADS$} {} {:>MEM$} {:>CPU$}",
            "pid",
            fit("program", program),
            fit("args", args),
            "thr",
            fit("user", USER),
            "mem",
            "cpu%",
        );
        buf.set_stringn(inner.x, inner.y, header, usize::from(inner.width), self.theme.styles.table_header);

        let accent = self.theme.styles.table_accent;
        let text = self.theme.styles.text;
        for (i, process) in self.panel.visible().iter().enumerate() {
            let y = inner.y + 1 + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let threads = process
                .num_threads
                .map(|n| n.to_string())
                .unwrap_or_default();
            let line = Line::from(vec![
                Span::styled(format!("{:>PID$} ", process.pid), text),
                Span::styled(format!("{} ", fit(&process.name, program)), accent),
                Span::styled(format!("{} ", fit(&process.cmdline, args)), text),
                Span::styled(format!("{threads:>THREADS$} "), accent),
                Span::styled(format!("{} ", fit(&process.username, USER)), text),
                Span::styled(
                    format!("{:>MEM$} ", format::bytes_compact(process.memory_bytes)),
                    accent,
                ),
                Span::styled(format!("{:>CPU$.1}", process.cpu_percent), text),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::processes::{summarize, ProcessRecord};

    #[test]
    fn flexible_columns_share_width() {
        assert_eq!(flexible_widths(FIXED + 30), (10, 20));
        assert_eq!(flexible_widths(10), (1, 1));
    }

    #[test]
    fn renders_header_and_rows() {
        let mut panel = ProcessPanel::default();
        panel.update(summarize(vec![ProcessRecord {
            pid: 42,
            name: "sshd".to_string(),
            cmdline: "-D".to_string(),
            cpu_percent: 3.3,
            num_threads: Some(1),
            username: "root".to_string(),
            memory_bytes: 8 * 1024 * 1024,
            sleeping: true,
        }]));
        let area = Rect::new(0, 0, 80, 6);
        panel.resize(area);

        let theme = Theme::ansi();
        let mut buf = Buffer::empty(area);
        ProcessTable::new(&panel, &theme).render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(0).contains("proc - 1 (1 thr), 1 slp"));
        assert!(row(1).contains("pid program"));
        assert!(row(2).contains("     42 sshd"));
        // Inside the right border
        assert!(row(2).trim_end_matches('│').trim_end().ends_with("3.3"));
    }
}

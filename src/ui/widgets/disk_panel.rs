//! Disk panel widget: throughput graphs over a mount usage table

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::{fit, panel_block, render_throughput};
use crate::core::panels::DiskPanel;
use crate::ui::format;
use crate::ui::theme::Theme;

/// used, total and percent columns with their separators
const FIXED_COLUMNS: u16 = 1 + 9 + 1 + 9 + 1 + 5;

pub struct DiskWidget<'a> {
    panel: &'a DiskPanel,
    theme: &'a Theme,
}

impl<'a> DiskWidget<'a> {
    pub fn new(panel: &'a DiskPanel, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }
}

impl<'a> Widget for DiskWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block("disk".to_string(), self.theme.styles.panel_border, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let mut y = render_throughput(&self.panel.io, inner, buf, self.theme);

        let mount_width = usize::from(inner.width.saturating_sub(FIXED_COLUMNS).max(5));
        let header = format!(
            "{} {:>9} {:>9} {:>5}",
            fit("mount", mount_width),
            "used",
            "total",
            "use%"
        );
        if y < inner.bottom() {
            buf.set_stringn(inner.x, y, header, usize::from(inner.width), self.theme.styles.table_header);
            y += 1;
        }

        for mount in self.panel.mounts() {
            if y >= inner.bottom() {
                break;
            }
            let line = format!(
                "{} {:>9} {:>9} {:>4.0}%",
                fit(&mount.mount_point, mount_width),
                format::bytes(mount.used),
                format::bytes(mount.total),
                mount.percent
            );
            buf.set_stringn(
                inner.x,
                y,
                line,
                usize::from(inner.width),
                self.theme.usage_style(mount.percent),
            );
            y += 1;
        }
    }
}

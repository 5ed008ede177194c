//! Main UI renderer

use ratatui::{layout::Rect, Frame};

use crate::core::state::AppState;
use crate::ui::widgets::*;

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let theme = &state.theme;
        let panels = &state.panels;
        let layout = &state.layout;

        // Clear background
        frame.render_widget(
            ratatui::widgets::Block::default()
                .style(ratatui::style::Style::default().bg(theme.colors.bg_primary)),
            area,
        );

        // The layout follows the last resize event and may briefly be larger
        // than the frame.
        let clip = |rect: Rect| rect.intersection(area);

        frame.render_widget(InfoBar::new(&panels.info, theme), clip(layout.info));
        frame.render_widget(CpuWidget::new(&panels.cpu, theme), clip(layout.cpu));
        frame.render_widget(ProcessTable::new(&panels.processes, theme), clip(layout.processes));
        frame.render_widget(MemoryWidget::new(&panels.memory, theme), clip(layout.memory));
        frame.render_widget(DiskWidget::new(&panels.disk, theme), clip(layout.disk));

        if let (Some(panel), Some(net_area)) = (&panels.network, layout.network) {
            frame.render_widget(NetworkWidget::new(panel, theme), clip(net_area));
        }

        if let (Some(panel), Some(battery_area)) = (&panels.battery, layout.battery) {
            frame.render_widget(BatteryWidget::new(panel, theme), clip(battery_area));
        }
    }
}

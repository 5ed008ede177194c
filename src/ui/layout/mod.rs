//! Layout management system

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout rects for all panels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedLayout {
    pub info: Rect,
    pub cpu: Rect,
    pub processes: Rect,
    pub memory: Rect,
    pub disk: Rect,
    pub network: Option<Rect>,
    pub battery: Option<Rect>,
}

pub struct LayoutManager;

impl LayoutManager {
    /// Info line on top; CPU over processes on the left; memory, disk,
    /// network and battery stacked on the right.
    pub fn compute(area: Rect, has_network: bool, has_battery: bool) -> ComputedLayout {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Info line
                Constraint::Min(0),    // Body
            ])
            .split(area);

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(55), Constraint::Fill(34)])
            .split(main_chunks[1]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(3), Constraint::Fill(2)])
            .split(body_chunks[0]);

        let mut right_constraints = vec![
            Constraint::Fill(3), // Memory
            Constraint::Fill(3), // Disk
        ];
        if has_network {
            right_constraints.push(Constraint::Fill(3));
        }
        if has_battery {
            right_constraints.push(Constraint::Fill(2));
        }
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(right_constraints)
            .split(body_chunks[1]);

        let mut right = right_chunks.iter().copied().skip(2);
        let network = if has_network { right.next() } else { None };
        let battery = if has_battery { right.next() } else { None };

        ComputedLayout {
            info: main_chunks[0],
            cpu: left_chunks[0],
            processes: left_chunks[1],
            memory: right_chunks[0],
            disk: right_chunks[1],
            network,
            battery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_panels_share_right_column() {
        let area = Rect::new(0, 0, 120, 40);
        let full = LayoutManager::compute(area, true, true);
        assert_eq!(full.info.height, 1);
        assert!(full.cpu.width > full.memory.width);
        assert_eq!(full.cpu.x, 0);
        assert_eq!(full.memory.x, full.cpu.width);
        let battery = full.battery.unwrap();
        assert_eq!(battery.y + battery.height, 40);

        let bare = LayoutManager::compute(area, false, false);
        assert!(bare.network.is_none());
        assert!(bare.battery.is_none());
        assert_eq!(bare.disk.y + bare.disk.height, 40);
        assert!(bare.memory.height > full.memory.height);
    }
}

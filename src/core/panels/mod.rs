//! Panel models
//!
//! Each panel owns the streams it draws and knows how to size them for the
//! rect the layout hands it. Widgets only read from here.

mod battery;
mod cpu;
mod disk;
mod info;
mod memory;
mod network;
mod processes;
mod throughput;

pub use battery::BatteryPanel;
pub use cpu::CpuPanel;
pub use disk::DiskPanel;
pub use info::InfoLine;
pub use memory::MemoryPanel;
pub use network::NetworkPanel;
pub use processes::ProcessPanel;
pub use throughput::{Throughput, BOX_WIDTH};

use ratatui::layout::Rect;

use crate::stream::StreamError;
use crate::ui::layout::ComputedLayout;

pub struct Panels {
    pub info: InfoLine,
    pub cpu: CpuPanel,
    pub memory: MemoryPanel,
    pub disk: DiskPanel,
    pub network: Option<NetworkPanel>,
    pub battery: Option<BatteryPanel>,
    pub processes: ProcessPanel,
}

impl Panels {
    pub fn resize(&mut self, layout: &ComputedLayout) -> Result<(), StreamError> {
        self.cpu.resize(layout.cpu)?;
        self.memory.resize(layout.memory)?;
        self.disk.resize(layout.disk)?;
        if let (Some(panel), Some(area)) = (self.network.as_mut(), layout.network) {
            panel.resize(area)?;
        }
        if let (Some(panel), Some(area)) = (self.battery.as_mut(), layout.battery) {
            panel.resize(area)?;
        }
        self.processes.resize(layout.processes);
        Ok(())
    }
}

/// Columns and rows inside a bordered block.
pub(crate) fn inner_size(area: Rect) -> (usize, usize) {
    (
        usize::from(area.width.saturating_sub(2)),
        usize::from(area.height.saturating_sub(2)),
    )
}

/// Split `total` rows over `parts` graphs, earlier graphs taking the
/// remainder. Every graph gets at least one row.
pub(crate) fn split_evenly(total: usize, parts: usize) -> Vec<usize> {
    if parts == 0 {
        return Vec::new();
    }
    let (base, extra) = (total / parts, total % parts);
    (0..parts)
        .map(|i| (base + usize::from(i < extra)).max(1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn even_split() {
        assert_eq!(split_evenly(10, 4), vec![3, 3, 2, 2]);
        assert_eq!(split_evenly(8, 4), vec![2, 2, 2, 2]);
        assert_eq!(split_evenly(2, 3), vec![1, 1, 1]);
        assert!(split_evenly(5, 0).is_empty());
    }

    #[test]
    fn inner_size_excludes_borders() {
        assert_eq!(inner_size(Rect::new(3, 4, 10, 6)), (8, 4));
        assert_eq!(inner_size(Rect::new(0, 0, 1, 1)), (0, 0));
    }
}

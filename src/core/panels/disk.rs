//! Disk panel: read/write throughput and mount usage

use ratatui::layout::Rect;

use crate::config::DiskConfig;
use crate::integrations::disk::{DiskReading, MountUsage};
use crate::stream::StreamError;

use super::inner_size;
use super::throughput::{Throughput, BOX_WIDTH};

/// Rows kept free below the graphs for the mount table header and a
/// couple of mounts.
const MOUNT_ROWS: usize = 3;

pub struct DiskPanel {
    pub io: Throughput,
    mounts: Vec<MountUsage>,
}

impl DiskPanel {
    pub fn new(config: &DiskConfig) -> Result<Self, StreamError> {
        Ok(Self {
            io: Throughput::new(["read", "write"], config.throughput_max, config.auto_raise)?,
            mounts: Vec::new(),
        })
    }

    pub fn update(&mut self, reading: DiskReading) {
        self.io.update(
            [reading.read_rate, reading.write_rate],
            [reading.total_read, reading.total_written],
        );
        self.mounts = reading.mounts;
    }

    pub fn resize(&mut self, area: Rect) -> Result<(), StreamError> {
        let (width, height) = inner_size(area);
        self.io.resize(
            width.saturating_sub(BOX_WIDTH),
            height.saturating_sub(MOUNT_ROWS) / 2,
        )
    }

    pub fn mounts(&self) -> &[MountUsage] {
        &self.mounts
    }
}

//! Process table panel

use ratatui::layout::Rect;

use crate::integrations::processes::{ProcessRecord, ProcessSummary};

#[derive(Default)]
pub struct ProcessPanel {
    summary: ProcessSummary,
    max_rows: usize,
}

impl ProcessPanel {
    pub fn update(&mut self, summary: ProcessSummary) {
        self.summary = summary;
    }

    /// Borders and the header line take three rows.
    pub fn resize(&mut self, area: Rect) {
        self.max_rows = usize::from(area.height).saturating_sub(3);
    }

    pub fn visible(&self) -> &[ProcessRecord] {
        let len = self.summary.processes.len().min(self.max_rows);
        &self.summary.processes[..len]
    }

    pub fn title(&self) -> String {
        format!(
            "proc - {} ({} thr), {} slp",
            self.summary.processes.len(),
            self.summary.total_threads,
            self.summary.sleeping
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::processes::summarize;

    fn record(pid: u32, cpu: f64) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: "worker".to_string(),
            cmdline: "--serve".to_string(),
            cpu_percent: cpu,
            num_threads: Some(2),
            username: "ada".to_string(),
            memory_bytes: 4096,
            sleeping: pid % 2 == 0,
        }
    }

    #[test]
    fn shows_what_fits() {
        let mut panel = ProcessPanel::default();
        panel.update(summarize((1..=10).map(|pid| record(pid, f64::from(pid))).collect()));
        panel.resize(Rect::new(0, 0, 80, 7));

        let pids: Vec<u32> = panel.visible().iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![10, 9, 8, 7]);
        assert_eq!(panel.title(), "proc - 10 (20 thr), 5 slp");

        panel.resize(Rect::new(0, 0, 80, 2));
        assert!(panel.visible().is_empty());
    }
}

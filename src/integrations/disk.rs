//! Disk throughput and mount usage sampling

use std::collections::HashSet;
use std::time::Instant;

use sysinfo::{Disks, Pid, ProcessRefreshKind, RefreshKind, System};

/// Space usage of one mounted filesystem.
#[derive(Debug, Clone, PartialEq)]
pub struct MountUsage {
    pub mount_point: String,
    pub free: u64,
    pub used: u64,
    pub total: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Default)]
pub struct DiskReading {
    /// Bytes per second since the previous sample; absent on the first one.
    pub read_rate: Option<f64>,
    pub write_rate: Option<f64>,
    pub total_read: u64,
    pub total_written: u64,
    pub mounts: Vec<MountUsage>,
}

pub struct DiskSampler {
    sys: System,
    disks: Disks,
    skip_loop_devices: bool,
    last_sample: Option<Instant>,
}

impl DiskSampler {
    pub fn new(skip_loop_devices: bool) -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::new().with_processes(ProcessRefreshKind::new().with_disk_usage()),
        );
        let disks = Disks::new_with_refreshed_list();
        tracing::info!(disks = disks.list().len(), "disks probed");
        Self {
            sys,
            disks,
            skip_loop_devices,
            last_sample: None,
        }
    }

    pub fn sample(&mut self) -> DiskReading {
        self.sys.refresh_specifics(
            RefreshKind::new().with_processes(ProcessRefreshKind::new().with_disk_usage()),
        );
        let now = Instant::now();
        let elapsed = self
            .last_sample
            .replace(now)
            .map(|last| now.duration_since(last).as_secs_f64())
            .filter(|secs| *secs > 0.0);

        // Threads show up next to their process on some platforms; count
        // each process once.
        let threads: HashSet<Pid> = self
            .sys
            .processes()
            .iter()
            .filter_map(|(pid, process)| process.tasks().map(|tasks| (pid, tasks)))
            .flat_map(|(pid, tasks)| tasks.iter().filter(move |task| *task != pid).copied())
            .collect();

        let (mut read, mut written, mut total_read, mut total_written) = (0u64, 0u64, 0u64, 0u64);
        for (pid, process) in self.sys.processes() {
            if threads.contains(pid) {
                continue;
            }
            let usage = process.disk_usage();
            read = read.saturating_add(usage.read_bytes);
            written = written.saturating_add(usage.written_bytes);
            total_read = total_read.saturating_add(usage.total_read_bytes);
            total_written = total_written.saturating_add(usage.total_written_bytes);
        }

        DiskReading {
            read_rate: elapsed.map(|secs| read as f64 / secs),
            write_rate: elapsed.map(|secs| written as f64 / secs),
            total_read,
            total_written,
            mounts: self.mounts(),
        }
    }

    fn mounts(&mut self) -> Vec<MountUsage> {
        self.disks.refresh();
        if self.disks.list().is_empty() {
            self.disks.refresh_list();
        }

        let mut seen = HashSet::new();
        self.disks
            .list()
            .iter()
            .filter(|disk| {
                !(self.skip_loop_devices && is_loop_device(&disk.name().to_string_lossy()))
            })
            .filter_map(|disk| {
                let total = disk.total_space();
                if total == 0 {
                    // Pseudo filesystems and mounts we cannot stat.
                    tracing::debug!(mount = %disk.mount_point().display(), "skipping mount without size");
                    return None;
                }
                let mount_point = disk.mount_point().display().to_string();
                if !seen.insert(mount_point.clone()) {
                    return None;
                }
                Some(usage(mount_point, disk.available_space(), total))
            })
            .collect()
    }
}

fn is_loop_device(device: &str) -> bool {
    device.starts_with("/dev/loop")
}

fn usage(mount_point: String, free: u64, total: u64) -> MountUsage {
    let used = total.saturating_sub(free);
    let percent = if total > 0 {
        used as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    MountUsage {
        mount_point,
        free,
        used,
        total,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_devices_are_recognised() {
        assert!(is_loop_device("/dev/loop12"));
        assert!(!is_loop_device("/dev/nvme0n1p2"));
    }

    #[test]
    fn usage_percent_from_free_space() {
        let usage = usage("/".to_string(), 25, 100);
        assert_eq!(usage.used, 75);
        assert!((usage.percent - 75.0).abs() < 1e-9);

        let full = super::usage("/boot".to_string(), 200, 100);
        assert_eq!(full.used, 0);
    }

    #[test]
    fn first_sample_has_no_rate() {
        let mut sampler = DiskSampler::new(true);
        let first = sampler.sample();
        assert!(first.read_rate.is_none());
        let second = sampler.sample();
        assert!(second.read_rate.map_or(true, |rate| rate >= 0.0));
    }
}

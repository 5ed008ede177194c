//! Process table sampling

use std::collections::HashSet;

use sysinfo::{Pid, ProcessRefreshKind, ProcessStatus, RefreshKind, System, Users};

/// One row of the process table. Fields the OS refused to report are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    /// Arguments without the program itself.
    pub cmdline: String,
    pub cpu_percent: f64,
    pub num_threads: Option<usize>,
    pub username: String,
    pub memory_bytes: u64,
    pub sleeping: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessSummary {
    /// Sorted by CPU usage, busiest first.
    pub processes: Vec<ProcessRecord>,
    pub total_threads: usize,
    pub sleeping: usize,
}

pub struct ProcessSampler {
    sys: System,
    users: Users,
}

impl ProcessSampler {
    pub fn new() -> Self {
        let sys = System::new_with_specifics(RefreshKind::new().with_processes(refresh_kind()));
        let users = Users::new_with_refreshed_list();
        Self { sys, users }
    }

    pub fn sample(&mut self) -> ProcessSummary {
        self.sys
            .refresh_specifics(RefreshKind::new().with_processes(refresh_kind()));

        let processes = self.sys.processes();
        let threads: HashSet<Pid> = processes
            .iter()
            .filter_map(|(pid, process)| process.tasks().map(|tasks| (pid, tasks)))
            .flat_map(|(pid, tasks)| tasks.iter().filter(move |task| *task != pid).copied())
            .collect();

        let records = processes
            .iter()
            // PID 0 is the idle task on Windows and the scheduler elsewhere.
            .filter(|(pid, _)| pid.as_u32() != 0 && !threads.contains(*pid))
            .map(|(pid, process)| ProcessRecord {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().into_owned(),
                cmdline: process
                    .cmd()
                    .iter()
                    .skip(1)
                    .map(|arg| arg.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" "),
                cpu_percent: f64::from(process.cpu_usage()),
                num_threads: process.tasks().map(HashSet::len),
                username: process
                    .user_id()
                    .and_then(|uid| self.users.get_user_by_id(uid))
                    .map(|user| user.name().to_string())
                    .unwrap_or_default(),
                memory_bytes: process.memory(),
                sleeping: process.status() == ProcessStatus::Sleep,
            })
            .collect();

        summarize(records)
    }
}

impl Default for ProcessSampler {
    fn default() -> Self {
        Self::new()
    }
}

fn refresh_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::new()
        .with_cpu()
        .with_memory()
        .with_cmd(sysinfo::UpdateKind::OnlyIfNotSet)
        .with_user(sysinfo::UpdateKind::OnlyIfNotSet)
}

/// Sort by CPU usage and total up threads and sleepers.
pub fn summarize(mut processes: Vec<ProcessRecord>) -> ProcessSummary {
    processes.sort_by(|a, b| {
        b.cpu_percent
            .total_cmp(&a.cpu_percent)
            .then_with(|| a.pid.cmp(&b.pid))
    });
    let total_threads = processes.iter().map(|p| p.num_threads.unwrap_or(1)).sum();
    let sleeping = processes.iter().filter(|p| p.sleeping).count();
    ProcessSummary {
        processes,
        total_threads,
        sleeping,
    }
}

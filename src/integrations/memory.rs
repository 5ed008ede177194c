//! Memory and swap sampling

use sysinfo::{MemoryRefreshKind, RefreshKind, System};

/// Raw memory counters in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryReading {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub free: u64,
    pub swap_used: u64,
    pub swap_total: u64,
}

/// One displayed memory quantity, resolved once at startup.
#[derive(Debug, Clone, Copy)]
pub struct MemoryField {
    pub label: &'static str,
    /// Current value in bytes.
    pub value: fn(&MemoryReading) -> u64,
    /// Value that maps to the top of the graph.
    pub total: fn(&MemoryReading) -> u64,
}

fn total(reading: &MemoryReading) -> u64 {
    reading.total
}

/// The fields this machine can report, in display order.
pub fn available_fields(reading: &MemoryReading) -> Vec<MemoryField> {
    let mut fields = vec![
        MemoryField {
            label: "free",
            value: |r| r.free,
            total,
        },
        MemoryField {
            label: "available",
            value: |r| r.available,
            total,
        },
        MemoryField {
            label: "used",
            value: |r| r.used,
            total,
        },
    ];
    if reading.swap_total > 0 {
        fields.push(MemoryField {
            label: "swap",
            value: |r| r.swap_used,
            total: |r| r.swap_total,
        });
    }
    fields
}

pub struct MemorySampler {
    sys: System,
}

impl MemorySampler {
    pub fn new() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::new().with_memory(MemoryRefreshKind::everything()),
        );
        Self { sys }
    }

    pub fn sample(&mut self) -> MemoryReading {
        self.sys.refresh_memory();
        MemoryReading {
            total: self.sys.total_memory(),
            used: self.sys.used_memory(),
            available: self.sys.available_memory(),
            free: self.sys.free_memory(),
            swap_used: self.sys.used_swap(),
            swap_total: self.sys.total_swap(),
        }
    }
}

impl Default for MemorySampler {
    fn default() -> Self {
        Self::new()
    }
}

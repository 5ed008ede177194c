//! CPU load, frequency and temperature sampling

use sysinfo::{Component, Components, CpuRefreshKind, RefreshKind, System};

/// Logical threads grouped by the physical core they run on.
///
/// Computed once from the reported counts: with `c` cores and `t` threads,
/// thread `i` lives on core `i % c`, so 8 threads on 4 cores group as
/// `[[0, 4], [1, 5], [2, 6], [3, 7]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    cores: Vec<Vec<usize>>,
}

impl Topology {
    pub fn new(num_cores: usize, num_threads: usize) -> Self {
        let cores = if num_cores > 0 && num_threads % num_cores == 0 {
            (0..num_cores)
                .map(|core| (core..num_threads).step_by(num_cores).collect())
                .collect()
        } else {
            // Unknown layout: one group per thread.
            (0..num_threads).map(|thread| vec![thread]).collect()
        };
        Self { cores }
    }

    pub fn cores(&self) -> &[Vec<usize>] {
        &self.cores
    }

    pub fn num_cores(&self) -> usize {
        self.cores.len()
    }

    pub fn num_threads(&self) -> usize {
        self.cores.iter().map(Vec::len).sum()
    }

    /// Thread indices in display order, core by core.
    #[cfg(test)]
    pub fn order(&self) -> Vec<usize> {
        self.cores.iter().flatten().copied().collect()
    }
}

/// Static facts resolved at startup.
#[derive(Debug, Clone)]
pub struct CpuInfo {
    pub brand: String,
    pub topology: Topology,
    /// Upper bound for the temperature graphs, when a sensor exists.
    pub temp_high: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct CpuReading {
    pub total_percent: f64,
    pub per_thread: Vec<f64>,
    /// Mean frequency in MHz; absent when the platform does not report it.
    pub frequency_mhz: Option<u64>,
    pub package_temp: Option<f64>,
    pub core_temps: Vec<f64>,
}

pub struct CpuSampler {
    sys: System,
    components: Components,
    /// Index of the package sensor followed by per-core sensors.
    sensors: Option<(usize, Vec<usize>)>,
    info: CpuInfo,
}

impl CpuSampler {
    pub fn new(temp_high_fallback: f64) -> Self {
        let mut sys =
            System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::everything()));
        sys.refresh_cpu_usage();

        let num_threads = sys.cpus().len().max(1);
        let num_cores = sys.physical_core_count().unwrap_or(num_threads);
        let topology = Topology::new(num_cores, num_threads);

        let brand = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "unknown cpu".to_string());

        let components = Components::new_with_refreshed_list();
        let sensors = probe_sensors(components.list());
        let temp_high = sensors.as_ref().map(|(package, _)| {
            components.list()[*package]
                .critical()
                .map(f64::from)
                .filter(|high| high.is_finite() && *high > 0.0)
                .unwrap_or(temp_high_fallback)
        });

        tracing::info!(
            %brand,
            cores = topology.num_cores(),
            threads = topology.num_threads(),
            temperatures = sensors.is_some(),
            "cpu probed"
        );

        Self {
            sys,
            components,
            sensors,
            info: CpuInfo {
                brand,
                topology,
                temp_high,
            },
        }
    }

    pub fn info(&self) -> &CpuInfo {
        &self.info
    }

    pub fn sample(&mut self) -> CpuReading {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_cpu_frequency();

        let cpus = self.sys.cpus();
        let per_thread: Vec<f64> = cpus.iter().map(|cpu| f64::from(cpu.cpu_usage())).collect();
        let frequency_mhz = if cpus.is_empty() {
            None
        } else {
            let sum: u64 = cpus.iter().map(|cpu| cpu.frequency()).sum();
            Some(sum / cpus.len() as u64).filter(|mhz| *mhz > 0)
        };

        let (package_temp, core_temps) = match &self.sensors {
            Some((package, cores)) => {
                self.components.refresh();
                let list = self.components.list();
                let read = |index: usize| {
                    list.get(index)
                        .map(|c| f64::from(c.temperature()))
                        .filter(|t| t.is_finite())
                };
                (
                    read(*package),
                    cores.iter().filter_map(|&index| read(index)).collect(),
                )
            }
            None => (None, Vec::new()),
        };

        CpuReading {
            total_percent: f64::from(self.sys.global_cpu_usage()),
            per_thread,
            frequency_mhz,
            package_temp,
            core_temps,
        }
    }
}

/// Find the CPU package sensor and its per-core siblings.
fn probe_sensors(components: &[Component]) -> Option<(usize, Vec<usize>)> {
    let labels: Vec<String> = components.iter().map(|c| c.label().to_lowercase()).collect();
    pick_sensors(&labels)
}

fn pick_sensors(labels: &[String]) -> Option<(usize, Vec<usize>)> {
    const CHIPS: [&str; 3] = ["coretemp", "k10temp", "cpu"];
    let cpu: Vec<usize> = labels
        .iter()
        .enumerate()
        .filter(|(_, label)| CHIPS.iter().any(|chip| label.starts_with(chip)))
        .map(|(index, _)| index)
        .collect();
    if cpu.is_empty() {
        return None;
    }

    let package = cpu
        .iter()
        .copied()
        .find(|&index| labels[index].contains("package") || labels[index].contains("tctl"))
        .unwrap_or(cpu[0]);
    let cores = cpu
        .into_iter()
        .filter(|&index| index != package && labels[index].contains("core"))
        .collect();
    Some((package, cores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_hyperthreads_by_core() {
        let topology = Topology::new(4, 8);
        assert_eq!(
            topology.cores(),
            &[vec![0, 4], vec![1, 5], vec![2, 6], vec![3, 7]]
        );
        assert_eq!(topology.order(), vec![0, 4, 1, 5, 2, 6, 3, 7]);
        assert_eq!(topology.num_threads(), 8);
    }

    #[test]
    fn one_thread_per_core() {
        let topology = Topology::new(2, 2);
        assert_eq!(topology.order(), vec![0, 1]);
        assert_eq!(topology.num_cores(), 2);
    }

    #[test]
    fn uneven_counts_fall_back_to_flat_order() {
        let topology = Topology::new(4, 6);
        assert_eq!(topology.num_cores(), 6);
        assert_eq!(topology.order(), (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn picks_package_then_cores() {
        let labels: Vec<String> = [
            "acpitz temp1",
            "coretemp core 0",
            "coretemp package id 0",
            "coretemp core 1",
            "nvme composite",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        assert_eq!(pick_sensors(&labels), Some((2, vec![1, 3])));
    }

    #[test]
    fn no_cpu_sensor_means_no_temperatures() {
        let labels = vec!["acpitz temp1".to_string(), "nvme composite".to_string()];
        assert_eq!(pick_sensors(&labels), None);
    }

    #[test]
    fn samples_are_finite() {
        let mut sampler = CpuSampler::new(100.0);
        let reading = sampler.sample();
        assert!(reading.total_percent.is_finite());
        assert!(reading.per_thread.iter().all(|load| load.is_finite()));
    }
}

//! Network interface throughput sampling

use std::net::{IpAddr, UdpSocket};
use std::time::Instant;

use sysinfo::Networks;

#[derive(Debug, Clone, Default)]
pub struct NetworkReading {
    /// Bytes per second since the previous sample; absent on the first one.
    pub recv_rate: Option<f64>,
    pub sent_rate: Option<f64>,
    pub total_received: u64,
    pub total_sent: u64,
}

pub struct NetworkSampler {
    networks: Networks,
    interface: String,
    last: Option<(Instant, u64, u64)>,
}

impl NetworkSampler {
    /// Watch `interface`, or pick the most plausible one when `None`.
    /// Returns `None` when the machine reports no interfaces at all.
    pub fn new(interface: Option<String>) -> Option<Self> {
        let networks = Networks::new_with_refreshed_list();
        let interface = match interface {
            Some(name) => name,
            None => {
                let candidates: Vec<(String, bool)> = networks
                    .list()
                    .iter()
                    .map(|(name, data)| {
                        let active = data.total_received() + data.total_transmitted() > 0;
                        (name.clone(), active)
                    })
                    .collect();
                autoselect_interface(&candidates)?
            }
        };
        tracing::info!(%interface, "network interface selected");
        Some(Self {
            networks,
            interface,
            last: None,
        })
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn sample(&mut self) -> NetworkReading {
        self.networks.refresh();
        let Some(data) = self.networks.list().get(&self.interface) else {
            tracing::debug!(interface = %self.interface, "interface vanished");
            return NetworkReading::default();
        };

        let now = Instant::now();
        let received = data.total_received();
        let sent = data.total_transmitted();
        let rates = self.last.and_then(|(at, last_received, last_sent)| {
            let secs = now.duration_since(at).as_secs_f64();
            (secs > 0.0).then(|| {
                (
                    received.saturating_sub(last_received) as f64 / secs,
                    sent.saturating_sub(last_sent) as f64 / secs,
                )
            })
        });
        self.last = Some((now, received, sent));

        NetworkReading {
            recv_rate: rates.map(|(recv, _)| recv),
            sent_rate: rates.map(|(_, sent)| sent),
            total_received: received,
            total_sent: sent,
        }
    }
}

/// Rank interfaces: inactive ones last, then loopback and container
/// bridges, then firewire and bluetooth, then everything else.
fn interface_score(name: &str, active: bool) -> u8 {
    let lower = name.to_lowercase();
    if !active {
        0
    } else if lower.starts_with("lo") || lower.starts_with("loopback") || lower.starts_with("docker")
    {
        1
    } else if lower.starts_with("fw") || lower.starts_with("bluetooth") {
        2
    } else {
        3
    }
}

/// Highest scoring interface; ties keep the alphabetically first name.
pub fn autoselect_interface(candidates: &[(String, bool)]) -> Option<String> {
    let mut sorted: Vec<&(String, bool)> = candidates.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
        .into_iter()
        .rev()
        .max_by_key(|(name, active)| interface_score(name, *active))
        .map(|(name, _)| name.clone())
}

/// Address of the interface that routes to the public internet.
///
/// Connecting a UDP socket sends no packets; it only asks the kernel to
/// choose a source address.
pub fn local_ipv4() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    let addr = socket.local_addr().ok()?.ip();
    (!addr.is_unspecified()).then_some(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(list: &[(&str, bool)]) -> Vec<(String, bool)> {
        list.iter().map(|(n, a)| (n.to_string(), *a)).collect()
    }

    #[test]
    fn prefers_real_interfaces() {
        let list = candidates(&[("lo", true), ("docker0", true), ("wlp3s0", true), ("eth0", false)]);
        assert_eq!(autoselect_interface(&list).as_deref(), Some("wlp3s0"));
    }

    #[test]
    fn falls_back_to_loopback() {
        let list = candidates(&[("lo", true), ("eth0", false)]);
        assert_eq!(autoselect_interface(&list).as_deref(), Some("lo"));
    }

    #[test]
    fn ties_pick_first_name() {
        let list = candidates(&[("wlan0", true), ("eth0", true)]);
        assert_eq!(autoselect_interface(&list).as_deref(), Some("eth0"));
        assert_eq!(autoselect_interface(&[]), None);
    }

    #[test]
    fn scores_match_ranking() {
        assert_eq!(interface_score("eth0", false), 0);
        assert_eq!(interface_score("Loopback Pseudo-Interface 1", true), 1);
        assert_eq!(interface_score("fw0", true), 2);
        assert_eq!(interface_score("Bluetooth Network", true), 2);
        assert_eq!(interface_score("enp0s31f6", true), 3);
    }

    #[test]
    fn unknown_interface_reads_as_empty() {
        let mut sampler = NetworkSampler::new(Some("no-such-iface0".to_string())).unwrap();
        let reading = sampler.sample();
        assert!(reading.recv_rate.is_none());
        assert_eq!(reading.total_received, 0);
    }
}

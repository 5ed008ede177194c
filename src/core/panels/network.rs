//! Network panel: down/up throughput of one interface

use std::net::IpAddr;

use ratatui::layout::Rect;

use crate::config::NetworkConfig;
use crate::integrations::network::NetworkReading;
use crate::stream::StreamError;

use super::inner_size;
use super::throughput::{Throughput, BOX_WIDTH};

pub struct NetworkPanel {
    pub io: Throughput,
    interface: String,
    address: Option<IpAddr>,
}

impl NetworkPanel {
    pub fn new(interface: &str, config: &NetworkConfig) -> Result<Self, StreamError> {
        Ok(Self {
            io: Throughput::new(["down", "up"], config.throughput_max, config.auto_raise)?,
            interface: interface.to_string(),
            address: None,
        })
    }

    pub fn update(&mut self, reading: &NetworkReading) {
        self.io.update(
            [reading.recv_rate, reading.sent_rate],
            [reading.total_received, reading.total_sent],
        );
    }

    pub fn set_address(&mut self, address: Option<IpAddr>) {
        self.address = address;
    }

    pub fn resize(&mut self, area: Rect) -> Result<(), StreamError> {
        let (width, height) = inner_size(area);
        // One row for the address line.
        self.io.resize(width.saturating_sub(BOX_WIDTH), height.saturating_sub(1) / 2)
    }

    pub fn title(&self) -> String {
        format!("net - {}", self.interface)
    }

    pub fn version(&self) -> String {
        format!("glyphtop v{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn address_line(&self) -> String {
        match self.address {
            Some(address) => format!("ipv4 {address}"),
            None => "ipv4 -".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn titles_and_address() {
        let mut panel = NetworkPanel::new("wlan0", &NetworkConfig::default()).unwrap();
        assert_eq!(panel.title(), "net - wlan0");
        assert_eq!(panel.address_line(), "ipv4 -");
        panel.set_address(Some("192.168.1.20".parse().unwrap()));
        assert_eq!(panel.address_line(), "ipv4 192.168.1.20");
        assert!(panel.version().starts_with("glyphtop v"));
    }

    #[test]
    fn first_sample_draws_nothing() {
        let mut panel = NetworkPanel::new("eth0", &NetworkConfig::default()).unwrap();
        panel.update(&NetworkReading {
            total_received: 100,
            total_sent: 50,
            ..NetworkReading::default()
        });
        assert!(panel.io.graph_rows().iter().all(|row| row.trim().is_empty()));
        assert!(panel.io.side_box(0)[2].starts_with("total 100"));
    }
}

//! Top information line: who and where, the time, and uptime

use chrono::{DateTime, Local};

use crate::integrations::host::{format_uptime, uptime_secs, HostInfo};

/// Narrower terminals drop the clock.
const CLOCK_MIN_WIDTH: u16 = 100;

pub struct InfoLine {
    host: HostInfo,
    uptime: u64,
    now: DateTime<Local>,
}

impl InfoLine {
    pub fn new(host: HostInfo) -> Self {
        Self {
            host,
            uptime: uptime_secs(),
            now: Local::now(),
        }
    }

    pub fn tick(&mut self) {
        self.now = Local::now();
        self.uptime = uptime_secs();
    }

    pub fn left(&self) -> String {
        self.host.summary()
    }

    pub fn center(&self, width: u16) -> Option<String> {
        (width >= CLOCK_MIN_WIDTH).then(|| self.now.format("%a, %d %b %Y %H:%M:%S").to_string())
    }

    pub fn right(&self) -> String {
        format_uptime(self.uptime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_only_on_wide_terminals() {
        let line = InfoLine::new(HostInfo {
            username: "ada".to_string(),
            hostname: None,
            system: "Linux".to_string(),
        });
        assert!(line.center(99).is_none());
        assert!(line.center(100).is_some());
        assert_eq!(line.left(), "ada @ Linux");
        assert!(line.right().starts_with("up "));
    }
}

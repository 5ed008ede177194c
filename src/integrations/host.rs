//! Host identity and uptime

use sysinfo::System;

/// Facts about the machine that do not change while running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub username: String,
    pub hostname: Option<String>,
    /// e.g. `Ubuntu 24.04 x86_64 / 6.8.0-45-generic`
    pub system: String,
}

impl HostInfo {
    pub fn probe() -> Self {
        let username = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_default();
        let hostname = System::host_name().filter(|name| !name.is_empty());

        let mut system = Vec::new();
        if let Some(name) = System::name() {
            system.push(name);
        }
        if let Some(version) = System::os_version() {
            system.push(version);
        }
        let arch = std::env::consts::ARCH;
        match System::kernel_version() {
            Some(kernel) => system.push(format!("{arch} / {kernel}")),
            None => system.push(arch.to_string()),
        }

        Self {
            username,
            hostname,
            system: system.join(" "),
        }
    }

    /// `user @ host system`, leaving out whatever is unknown.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.username.is_empty() {
            parts.push(format!("{} @", self.username));
        }
        if let Some(host) = &self.hostname {
            parts.push(host.clone());
        }
        parts.push(self.system.clone());
        parts.join(" ")
    }
}

pub fn uptime_secs() -> u64 {
    System::uptime()
}

/// `up 3d, 4:07h`
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = secs / 3600 % 24;
    let minutes = secs / 60 % 60;
    format!("up {days}d, {hours}:{minutes:02}h")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_format() {
        assert_eq!(format_uptime(0), "up 0d, 0:00h");
        assert_eq!(format_uptime(3 * 86_400 + 4 * 3600 + 7 * 60 + 59), "up 3d, 4:07h");
    }

    #[test]
    fn summary_skips_unknown_parts() {
        let info = HostInfo {
            username: String::new(),
            hostname: None,
            system: "Linux x86_64".to_string(),
        };
        assert_eq!(info.summary(), "Linux x86_64");

        let info = HostInfo {
            username: "ada".to_string(),
            hostname: Some("engine".to_string()),
            system: "Linux x86_64".to_string(),
        };
        assert_eq!(info.summary(), "ada @ engine Linux x86_64");
    }
}

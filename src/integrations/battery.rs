//! Battery charge sampling
//!
//! Backed by the `battery` crate when the `battery` feature is enabled;
//! without it the probe always reports no battery.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    pub percent: f64,
    pub plugged: bool,
    /// Estimated time to empty while discharging.
    pub secs_left: Option<u64>,
}

/// Human readable charging state: `charging`, `1h 20min left`, ...
pub fn status_text(reading: &BatteryReading) -> String {
    if reading.plugged {
        return "charging".to_string();
    }
    let Some(secs) = reading.secs_left else {
        return "discharging".to_string();
    };
    let (hours, minutes) = (secs / 3600, secs / 60 % 60);
    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}min"));
    }
    if parts.is_empty() {
        "almost empty".to_string()
    } else {
        format!("{} left", parts.join(" "))
    }
}

#[cfg(feature = "battery")]
pub use imp::BatterySampler;

#[cfg(feature = "battery")]
mod imp {
    use super::BatteryReading;
    use battery::units::ratio::percent;
    use battery::units::time::second;
    use battery::{Battery, Manager, State};

    pub struct BatterySampler {
        manager: Manager,
        battery: Battery,
    }

    impl BatterySampler {
        /// `None` when the machine has no battery or it cannot be read.
        pub fn probe() -> Option<Self> {
            let manager = match Manager::new() {
                Ok(manager) => manager,
                Err(e) => {
                    tracing::info!("battery manager unavailable: {e}");
                    return None;
                }
            };
            let battery = manager.batteries().ok()?.find_map(Result::ok)?;
            tracing::info!("battery found");
            Some(Self { manager, battery })
        }

        pub fn sample(&mut self) -> Option<BatteryReading> {
            if let Err(e) = self.manager.refresh(&mut self.battery) {
                tracing::warn!("battery refresh failed: {e}");
                return None;
            }
            let plugged = !matches!(self.battery.state(), State::Discharging | State::Empty);
            Some(BatteryReading {
                percent: f64::from(self.battery.state_of_charge().get::<percent>()),
                plugged,
                secs_left: self
                    .battery
                    .time_to_empty()
                    .map(|time| time.get::<second>().max(0.0) as u64),
            })
        }
    }
}

#[cfg(not(feature = "battery"))]
pub struct BatterySampler;

#[cfg(not(feature = "battery"))]
impl BatterySampler {
    pub fn probe() -> Option<Self> {
        None
    }

    pub fn sample(&mut self) -> Option<BatteryReading> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(plugged: bool, secs_left: Option<u64>) -> BatteryReading {
        BatteryReading {
            percent: 50.0,
            plugged,
            secs_left,
        }
    }

    #[test]
    fn describes_charge_state() {
        assert_eq!(status_text(&reading(true, Some(100))), "charging");
        assert_eq!(status_text(&reading(false, Some(4800))), "1h 20min left");
        assert_eq!(status_text(&reading(false, Some(7200))), "2h left");
        assert_eq!(status_text(&reading(false, Some(300))), "5min left");
        assert_eq!(status_text(&reading(false, Some(30))), "almost empty");
        assert_eq!(status_text(&reading(false, None)), "discharging");
    }
}

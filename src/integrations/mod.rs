//! Sensor sampling adapters
//!
//! Each adapter owns the `sysinfo` handles it needs, is probed once at
//! startup, and returns plain records on every `sample()`. Failures never
//! escape an adapter: a missing sensor means the adapter is not built, a
//! transient read error skips the affected item.

pub mod battery;
pub mod cpu;
pub mod disk;
pub mod host;
pub mod memory;
pub mod network;
pub mod processes;

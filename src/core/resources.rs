//! Helpers for building the resources a framework sends to the Mesos master.

use log::debug;

use crate::config::FrameworkConfig;
use crate::core::resource::{Range, Resource, CPUS, DISK, MEM, PORTS};

/// Single-range `ports` resource covering `[begin_port, end_port]`.
/// Panics if `begin_port > end_port`.
pub fn port_range(begin_port: u64, end_port: u64) -> Resource {
    Resource::ranges(PORTS, vec![Range::new(begin_port, end_port)])
}

pub fn single_port_range(port: u64) -> Resource {
    port_range(port, port)
}

pub fn cpus(cpus: f64) -> Resource {
    Resource::scalar(CPUS, cpus)
}

pub fn mem(mem: f64) -> Resource {
    Resource::scalar(MEM, mem)
}

pub fn disk(disk: f64) -> Resource {
    Resource::scalar(DISK, disk)
}

// The master expects cpus, mem, disk in exactly this order.
pub fn build_framework_resources(config: &FrameworkConfig) -> Vec<Resource> {
    debug!(
        "Framework resources: cpus={}, mem={}, disk={}",
        config.cpus, config.mem, config.disk
    );
    vec![cpus(config.cpus), mem(config.mem), disk(config.disk)]
}

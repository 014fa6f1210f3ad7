//! Offers received from the Mesos master and port selection from their resources.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::resource::{Resource, Value};

/// Resources a single agent currently offers to the framework.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Offer {
    pub id: String,
    pub hostname: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Offer {
    pub fn new(id: String, hostname: String, resources: Vec<Resource>) -> Self {
        Self {
            id,
            hostname,
            resources,
        }
    }

    pub fn select_ports(&self, count: usize) -> Vec<u64> {
        debug!("Selecting {} ports from offer {} on {}", count, self.id, self.hostname);
        select_ports(&self.resources, count)
    }
}

/// Picks up to `count` ports from the range resources of an offer, first fit.
///
/// Every range-typed resource is a port source regardless of its name. Ranges are visited in
/// order; each contributes its `begin`, and `begin + 1` too when it spans more than one port.
/// The result is shorter than `count` when the offer does not have enough ports, and is not
/// deduplicated across overlapping ranges.
pub fn select_ports(offered_resources: &[Resource], count: usize) -> Vec<u64> {
    let mut ports = vec![];
    let ranges = offered_resources
        .iter()
        .filter_map(|resource| match resource.value() {
            Value::Ranges(ranges) => Some(ranges),
            Value::Scalar(_) => None,
        })
        .flatten();

    for range in ranges {
        if ports.len() >= count {
            break;
        }
        ports.push(range.begin());
        if ports.len() < count && !range.is_single() {
            ports.push(range.begin() + 1);
        }
    }
    if ports.len() < count {
        debug!("Offer has {} of {} requested ports", ports.len(), count);
    }
    ports
}

pub fn select_one_port(offered_resources: &[Resource]) -> Vec<u64> {
    select_ports(offered_resources, 1)
}

pub fn select_two_ports(offered_resources: &[Resource]) -> Vec<u64> {
    select_ports(offered_resources, 2)
}

//! Type definitions for resources exchanged with the Mesos master: scalar quantities and
//! inclusive integer range sets.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CPUS: &str = "cpus";
pub const MEM: &str = "mem";
pub const DISK: &str = "disk";
pub const PORTS: &str = "ports";

#[derive(Debug, Error, PartialEq)]
pub enum ResourceError {
    #[error("range begin {begin} is greater than range end {end}")]
    InvalidRange { begin: u64, end: u64 },
    #[error("resource {name} of type {kind} has no {kind} value")]
    MissingValue { name: String, kind: ValueType },
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    Scalar,
    Ranges,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Scalar => write!(f, "SCALAR"),
            ValueType::Ranges => write!(f, "RANGES"),
        }
    }
}

/// Inclusive interval `[begin, end]`. Fields are private so that `begin <= end` holds for
/// every value of this type, including deserialized ones.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "RawRange")]
pub struct Range {
    begin: u64,
    end: u64,
}

#[derive(Deserialize)]
struct RawRange {
    begin: u64,
    end: u64,
}

impl TryFrom<RawRange> for Range {
    type Error = ResourceError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Range::try_new(raw.begin, raw.end)
    }
}

impl Range {
    /// Panics if `begin > end`. Use [`Range::try_new`] for untrusted input.
    pub fn new(begin: u64, end: u64) -> Self {
        match Self::try_new(begin, end) {
            Ok(range) => range,
            Err(err) => panic!("invalid port range: {}", err),
        }
    }

    pub fn try_new(begin: u64, end: u64) -> Result<Self, ResourceError> {
        if begin > end {
            return Err(ResourceError::InvalidRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> u64 {
        self.begin
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// True when the range covers exactly one value.
    pub fn is_single(&self) -> bool {
        self.begin == self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Ranges(Vec<Range>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Scalar(_) => ValueType::Scalar,
            Value::Ranges(_) => ValueType::Ranges,
        }
    }
}

/// A named resource as it appears in framework registration and in offers.
/// Immutable once built.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(into = "WireResource", try_from = "WireResource")]
pub struct Resource {
    name: String,
    value: Value,
}

impl Resource {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn scalar(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, Value::Scalar(value))
    }

    pub fn ranges(name: impl Into<String>, ranges: Vec<Range>) -> Self {
        Self::new(name, Value::Ranges(ranges))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueType {
        self.value.value_type()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    // Some(value) only for scalar resources.
    pub fn scalar_value(&self) -> Option<f64> {
        match &self.value {
            Value::Scalar(value) => Some(*value),
            Value::Ranges(_) => None,
        }
    }

    // Some(ranges) only for range resources.
    pub fn range_values(&self) -> Option<&[Range]> {
        match &self.value {
            Value::Scalar(_) => None,
            Value::Ranges(ranges) => Some(ranges),
        }
    }
}

// Mirrors the JSON mapping of the Mesos `Resource` protobuf:
// {"name": "cpus", "type": "SCALAR", "scalar": {"value": 1.0}}
// {"name": "ports", "type": "RANGES", "ranges": {"range": [{"begin": 1, "end": 2}]}}
#[derive(Debug, Deserialize, Serialize)]
struct WireResource {
    name: String,
    #[serde(rename = "type")]
    kind: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scalar: Option<WireScalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ranges: Option<WireRanges>,
}

#[derive(Debug, Deserialize, Serialize)]
struct WireScalar {
    value: f64,
}

#[derive(Debug, Deserialize, Serialize)]
struct WireRanges {
    #[serde(default)]
    range: Vec<Range>,
}

impl From<Resource> for WireResource {
    fn from(resource: Resource) -> Self {
        let kind = resource.kind();
        let (scalar, ranges) = match resource.value {
            Value::Scalar(value) => (Some(WireScalar { value }), None),
            Value::Ranges(range) => (None, Some(WireRanges { range })),
        };
        Self {
            name: resource.name,
            kind,
            scalar,
            ranges,
        }
    }
}

impl TryFrom<WireResource> for Resource {
    type Error = ResourceError;

    fn try_from(wire: WireResource) -> Result<Self, Self::Error> {
        let value = match (wire.kind, wire.scalar, wire.ranges) {
            (ValueType::Scalar, Some(scalar), _) => Value::Scalar(scalar.value),
            (ValueType::Ranges, _, Some(ranges)) => Value::Ranges(ranges.range),
            (kind, _, _) => {
                return Err(ResourceError::MissingValue {
                    name: wire.name,
                    kind,
                })
            }
        };
        Ok(Resource::new(wire.name, value))
    }
}

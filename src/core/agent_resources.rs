//! Parser for agent resource strings in the form accepted by `mesos-agent --resources`,
//! e.g. `cpus(*):4;mem:2048;ports(*):[9200-9200,9300-9300]`.

use std::str::FromStr;

use thiserror::Error;

use crate::core::resource::{Range, Resource, ResourceError};

#[derive(Debug, Error, PartialEq)]
pub enum ParseResourceError {
    #[error("missing ':' in resource '{0}'")]
    MissingSeparator(String),
    #[error("empty resource name in '{0}'")]
    EmptyName(String),
    #[error("unbalanced role parentheses in '{0}'")]
    UnbalancedRole(String),
    #[error("invalid scalar value '{0}'")]
    InvalidScalar(String),
    #[error("invalid range '{0}'")]
    InvalidRangeSyntax(String),
    #[error(transparent)]
    InvalidRange(#[from] ResourceError),
}

impl FromStr for Resource {
    type Err = ParseResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_resource(s)
    }
}

/// Parse a single `name[(role)]:value` entry. The role is accepted and dropped.
///
/// ```
/// use mesos_es_resources::core::agent_resources::parse_resource;
/// use mesos_es_resources::core::resources::port_range;
///
/// let resource = parse_resource("ports(*):[9200-9300]").unwrap();
/// assert_eq!(port_range(9200, 9300), resource);
/// ```
pub fn parse_resource(entry: &str) -> Result<Resource, ParseResourceError> {
    let entry = entry.trim();
    let (name_with_role, value) = entry
        .split_once(':')
        .ok_or_else(|| ParseResourceError::MissingSeparator(entry.to_string()))?;

    let name = parse_name(name_with_role.trim(), entry)?;
    let value = value.trim();

    match value.strip_prefix('[') {
        Some(rest) => {
            let inner = rest
                .strip_suffix(']')
                .ok_or_else(|| ParseResourceError::InvalidRangeSyntax(value.to_string()))?;
            Ok(Resource::ranges(name, parse_ranges(inner)?))
        }
        None => Ok(Resource::scalar(name, parse_scalar(value)?)),
    }
}

/// Parse `;`-separated entries, keeping their order. Empty entries are skipped.
pub fn parse_resources(resources: &str) -> Result<Vec<Resource>, ParseResourceError> {
    resources
        .split(';')
        .filter(|entry| !entry.trim().is_empty())
        .map(parse_resource)
        .collect()
}

fn parse_name<'a>(name_with_role: &'a str, entry: &str) -> Result<&'a str, ParseResourceError> {
    let name = match name_with_role.split_once('(') {
        Some((name, role)) => {
            if !role.ends_with(')') || role[..role.len() - 1].contains(['(', ')']) {
                return Err(ParseResourceError::UnbalancedRole(entry.to_string()));
            }
            name
        }
        None if name_with_role.contains(')') => {
            return Err(ParseResourceError::UnbalancedRole(entry.to_string()))
        }
        None => name_with_role,
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseResourceError::EmptyName(entry.to_string()));
    }
    Ok(name)
}

// Agent quantities are finite and non-negative.
fn parse_scalar(value: &str) -> Result<f64, ParseResourceError> {
    match value.parse::<f64>() {
        Ok(scalar) if scalar.is_finite() && scalar >= 0.0 => Ok(scalar),
        _ => Err(ParseResourceError::InvalidScalar(value.to_string())),
    }
}

fn parse_ranges(inner: &str) -> Result<Vec<Range>, ParseResourceError> {
    if inner.trim().is_empty() {
        return Ok(vec![]);
    }
    inner.split(',').map(parse_range).collect()
}

fn parse_range(range: &str) -> Result<Range, ParseResourceError> {
    let range = range.trim();
    let invalid = || ParseResourceError::InvalidRangeSyntax(range.to_string());
    let (begin, end) = range.split_once('-').ok_or_else(invalid)?;
    let begin = begin.trim().parse::<u64>().map_err(|_| invalid())?;
    let end = end.trim().parse::<u64>().map_err(|_| invalid())?;
    Ok(Range::try_new(begin, end)?)
}

//! Scenario validation logic.

use std::collections::HashMap;

use af_core::{Real, ensure_finite, ensure_non_negative};

use crate::node::NodeRole;
use crate::schema::{EventDef, NetworkDef, SCHEMA_VERSION, ScenarioDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Event for '{node}' at tick {tick}: {reason}")]
    InvalidEvent {
        node: String,
        tick: u64,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    if scenario.version != SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let mut roles: HashMap<&str, NodeRole> = HashMap::new();
    for (idx, network) in scenario.networks.iter().enumerate() {
        validate_network(network, idx, &mut roles)?;
    }

    for event in &scenario.events {
        validate_event(event, &roles)?;
    }

    Ok(())
}

fn validate_network<'a>(
    network: &'a NetworkDef,
    idx: usize,
    roles: &mut HashMap<&'a str, NodeRole>,
) -> Result<(), ValidationError> {
    let context = format!("network {idx}");

    for p in &network.producers {
        claim_id(roles, &p.id, NodeRole::Producer, &context)?;
        check_non_negative(&p.id, "air_flow", p.air_flow)?;
        check_finite(&p.id, "intake_temperature", p.intake_temperature)?;
    }
    for c in &network.temp_controls {
        claim_id(roles, &c.id, NodeRole::TempControl, &context)?;
        check_finite(&c.id, "converted_temperature", c.converted_temperature)?;
        check_non_negative(&c.id, "thermal_capacity", c.thermal_capacity)?;
    }
    for c in &network.consumers {
        claim_id(roles, &c.id, NodeRole::Consumer, &context)?;
        check_non_negative(&c.id, "exhaust_air_flow", c.exhaust_air_flow)?;
    }
    for c in &network.connectors {
        claim_id(roles, &c.id, NodeRole::Connector, &context)?;
    }
    Ok(())
}

fn claim_id<'a>(
    roles: &mut HashMap<&'a str, NodeRole>,
    id: &'a str,
    role: NodeRole,
    context: &str,
) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("{context} {role} id"),
            value: String::new(),
            reason: "must not be empty".to_string(),
        });
    }
    if roles.insert(id, role).is_some() {
        return Err(ValidationError::DuplicateId {
            id: id.to_string(),
            context: context.to_string(),
        });
    }
    Ok(())
}

fn check_finite(id: &str, field: &str, value: Real) -> Result<(), ValidationError> {
    ensure_finite(value, "scenario value").map_err(|e| ValidationError::InvalidValue {
        field: format!("{id}.{field}"),
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

fn check_non_negative(id: &str, field: &str, value: Real) -> Result<(), ValidationError> {
    ensure_non_negative(value, "scenario value").map_err(|e| ValidationError::InvalidValue {
        field: format!("{id}.{field}"),
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

fn validate_event(event: &EventDef, roles: &HashMap<&str, NodeRole>) -> Result<(), ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidEvent {
        node: event.node.clone(),
        tick: event.tick,
        reason: reason.to_string(),
    };

    let role = *roles
        .get(event.node.as_str())
        .ok_or_else(|| ValidationError::MissingReference {
            id: event.node.clone(),
            context: format!("event at tick {}", event.tick),
        })?;

    if !event.has_change() {
        return Err(invalid("event changes nothing"));
    }
    if event.active.is_some() && !role.has_active_flag() {
        return Err(invalid("`active` only applies to producers and temp controls"));
    }
    if event.air_flow.is_some() && !role.has_air_flow() {
        return Err(invalid("`air_flow` only applies to producers and consumers"));
    }
    if event.temperature.is_some() && !role.has_temperature() {
        return Err(invalid("`temperature` only applies to producers and temp controls"));
    }
    if event.thermal_capacity.is_some() && !role.has_thermal_capacity() {
        return Err(invalid("`thermal_capacity` only applies to temp controls"));
    }

    if let Some(v) = event.air_flow {
        check_non_negative(&event.node, "air_flow", v)?;
    }
    if let Some(v) = event.temperature {
        check_finite(&event.node, "temperature", v)?;
    }
    if let Some(v) = event.thermal_capacity {
        check_non_negative(&event.node, "thermal_capacity", v)?;
    }
    Ok(())
}

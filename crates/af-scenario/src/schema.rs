//! Scenario schema definitions.

use af_core::Real;
use af_network::FlowType;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

fn default_true() -> bool {
    true
}

fn is_true(v: &bool) -> bool {
    *v
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub networks: Vec<NetworkDef>,
    #[serde(default)]
    pub events: Vec<EventDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub flow_type: FlowType,
    #[serde(default)]
    pub producers: Vec<ProducerDef>,
    #[serde(default)]
    pub temp_controls: Vec<TempControlDef>,
    #[serde(default)]
    pub consumers: Vec<ConsumerDef>,
    #[serde(default)]
    pub connectors: Vec<ConnectorDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProducerDef {
    pub id: String,
    pub air_flow: Real,
    pub intake_temperature: Real,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub operating: bool,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TempControlDef {
    pub id: String,
    pub converted_temperature: Real,
    pub thermal_capacity: Real,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub operating: bool,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumerDef {
    pub id: String,
    pub exhaust_air_flow: Real,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub operating: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectorDef {
    pub id: String,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub operating: bool,
}

/// Change applied to one node at the start of a step, before networks tick.
///
/// `air_flow` is the producer's flow or the consumer's exhaust; `temperature`
/// is the producer's intake or the control's converted temperature.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventDef {
    pub tick: u64,
    pub node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_flow: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal_capacity: Option<Real>,
    /// Remove the node from its network.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub destroyed: bool,
}

impl EventDef {
    pub fn has_change(&self) -> bool {
        self.operating.is_some()
            || self.active.is_some()
            || self.air_flow.is_some()
            || self.temperature.is_some()
            || self.thermal_capacity.is_some()
            || self.destroyed
    }
}

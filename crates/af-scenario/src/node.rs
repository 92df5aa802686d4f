//! Nodes driven by scenario data instead of a live game world.

use core::fmt;
use std::cell::Cell;

use af_core::{NodeId, Real};
use af_network::{
    AirFlowConnector, AirFlowConsumer, AirFlowNode, AirFlowProducer, AirFlowTempControl,
};

use crate::schema::{ConnectorDef, ConsumerDef, EventDef, ProducerDef, TempControlDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Producer,
    TempControl,
    Consumer,
    Connector,
}

impl NodeRole {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeRole::Producer => "producer",
            NodeRole::TempControl => "temp_control",
            NodeRole::Consumer => "consumer",
            NodeRole::Connector => "connector",
        }
    }

    pub fn has_active_flag(self) -> bool {
        matches!(self, NodeRole::Producer | NodeRole::TempControl)
    }

    pub fn has_air_flow(self) -> bool {
        matches!(self, NodeRole::Producer | NodeRole::Consumer)
    }

    pub fn has_temperature(self) -> bool {
        matches!(self, NodeRole::Producer | NodeRole::TempControl)
    }

    pub fn has_thermal_capacity(self) -> bool {
        self == NodeRole::TempControl
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A network member whose values come from the scenario and its events.
///
/// Interior mutability lets events update the node while networks hold it.
#[derive(Debug)]
pub struct ScriptedNode {
    id: NodeId,
    label: String,
    role: NodeRole,
    operating: Cell<bool>,
    active: Cell<bool>,
    /// Producer flow or consumer exhaust.
    air_flow: Cell<Real>,
    /// Producer intake or control output.
    temperature: Cell<Real>,
    thermal_capacity: Cell<Real>,
}

impl ScriptedNode {
    fn new(id: NodeId, label: &str, role: NodeRole, operating: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            role,
            operating: Cell::new(operating),
            active: Cell::new(true),
            air_flow: Cell::new(0.0),
            temperature: Cell::new(0.0),
            thermal_capacity: Cell::new(0.0),
        }
    }

    pub fn producer(id: NodeId, def: &ProducerDef) -> Self {
        let node = Self::new(id, &def.id, NodeRole::Producer, def.operating);
        node.active.set(def.active);
        node.air_flow.set(def.air_flow);
        node.temperature.set(def.intake_temperature);
        node
    }

    pub fn temp_control(id: NodeId, def: &TempControlDef) -> Self {
        let node = Self::new(id, &def.id, NodeRole::TempControl, def.operating);
        node.active.set(def.active);
        node.temperature.set(def.converted_temperature);
        node.thermal_capacity.set(def.thermal_capacity);
        node
    }

    pub fn consumer(id: NodeId, def: &ConsumerDef) -> Self {
        let node = Self::new(id, &def.id, NodeRole::Consumer, def.operating);
        node.air_flow.set(def.exhaust_air_flow);
        node
    }

    pub fn connector(id: NodeId, def: &ConnectorDef) -> Self {
        Self::new(id, &def.id, NodeRole::Connector, def.operating)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    /// Apply the value changes of `event`. `destroyed` is handled by the run.
    pub fn apply(&self, event: &EventDef) {
        if let Some(v) = event.operating {
            self.operating.set(v);
        }
        if let Some(v) = event.active {
            self.active.set(v);
        }
        if let Some(v) = event.air_flow {
            self.air_flow.set(v);
        }
        if let Some(v) = event.temperature {
            self.temperature.set(v);
        }
        if let Some(v) = event.thermal_capacity {
            self.thermal_capacity.set(v);
        }
    }
}

impl fmt::Display for ScriptedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{} ({})", self.label, self.id, self.role)
    }
}

impl AirFlowNode for ScriptedNode {
    fn is_operating(&self) -> bool {
        self.operating.get()
    }
}

impl AirFlowProducer for ScriptedNode {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn current_air_flow(&self) -> Real {
        self.air_flow.get()
    }

    fn intake_temperature(&self) -> Real {
        self.temperature.get()
    }
}

impl AirFlowTempControl for ScriptedNode {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn converted_temperature(&self) -> Real {
        self.temperature.get()
    }

    fn thermal_capacity(&self) -> Real {
        self.thermal_capacity.get()
    }
}

impl AirFlowConsumer for ScriptedNode {
    fn exhaust_air_flow(&self) -> Real {
        self.air_flow.get()
    }
}

impl AirFlowConnector for ScriptedNode {}

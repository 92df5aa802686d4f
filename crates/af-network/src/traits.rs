//! Capabilities a network queries on its members.
//!
//! Nodes are owned by the host simulation and update their own values
//! before the network ticks; the network only reads them. `Display` is
//! used for the diagnostic dump.

use core::fmt;
use std::rc::Rc;

use af_core::Real;

/// Behaviour shared by every member of an air-flow network.
pub trait AirFlowNode: fmt::Display {
    /// Whether the node is built, powered and otherwise able to work this tick.
    fn is_operating(&self) -> bool;
}

/// Supplies air and an intake temperature.
pub trait AirFlowProducer: AirFlowNode {
    /// Whether the producer is switched on.
    fn is_active(&self) -> bool;

    fn current_air_flow(&self) -> Real;

    fn intake_temperature(&self) -> Real;
}

/// Converts intake air to an output temperature.
pub trait AirFlowTempControl: AirFlowNode {
    fn is_active(&self) -> bool;

    fn converted_temperature(&self) -> Real;

    /// Air volume the unit can bring to its target temperature.
    fn thermal_capacity(&self) -> Real;
}

/// Drains air from the network.
pub trait AirFlowConsumer: AirFlowNode {
    fn exhaust_air_flow(&self) -> Real;
}

/// Pass-through member (pipes, valves). Tracked for membership only.
pub trait AirFlowConnector: AirFlowNode {}

pub type ProducerRef = Rc<dyn AirFlowProducer>;
pub type TempControlRef = Rc<dyn AirFlowTempControl>;
pub type ConsumerRef = Rc<dyn AirFlowConsumer>;
pub type ConnectorRef = Rc<dyn AirFlowConnector>;

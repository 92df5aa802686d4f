//! af-network: air-flow network aggregation.
//!
//! Provides:
//! - Capability traits for the node roles a network talks to
//! - `AirFlowNetwork`: membership plus the per-tick aggregation
//! - `NetworkScheduler`: owns many networks and ticks them in order
//! - `NetworkSnapshot`: serialisable view of a network's derived state
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use std::fmt;
//! use af_network::{AirFlowNetwork, AirFlowNode, AirFlowProducer, FlowType};
//!
//! struct Intake;
//!
//! impl fmt::Display for Intake {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("Intake")
//!     }
//! }
//!
//! impl AirFlowNode for Intake {
//!     fn is_operating(&self) -> bool {
//!         true
//!     }
//! }
//!
//! impl AirFlowProducer for Intake {
//!     fn is_active(&self) -> bool {
//!         true
//!     }
//!     fn current_air_flow(&self) -> f32 {
//!         10.0
//!     }
//!     fn intake_temperature(&self) -> f32 {
//!         20.0
//!     }
//! }
//!
//! let mut net = AirFlowNetwork::new(FlowType::Hot);
//! net.register_producer(Rc::new(Intake));
//! net.tick();
//!
//! assert_eq!(net.current_intake_air(), 10.0);
//! assert_eq!(net.average_converted_temperature(), 20.0);
//! ```

pub mod error;
pub mod flow_type;
pub mod network;
pub mod scheduler;
pub mod snapshot;
pub mod traits;

mod members;

pub use error::{NetworkError, NetworkResult};
pub use flow_type::FlowType;
pub use network::{AirFlowNetwork, FlowState};
pub use scheduler::NetworkScheduler;
pub use snapshot::NetworkSnapshot;
pub use traits::{
    AirFlowConnector, AirFlowConsumer, AirFlowNode, AirFlowProducer, AirFlowTempControl,
    ConnectorRef, ConsumerRef, ProducerRef, TempControlRef,
};

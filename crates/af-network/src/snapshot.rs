//! Serialisable view of a network after a tick.

use af_core::GridId;
use serde::{Deserialize, Serialize};

use crate::flow_type::FlowType;
use crate::network::FlowState;

/// Member counts and derived state of one network.
///
/// Non-finite values are kept as they are; JSON output renders them as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub grid_id: GridId,
    pub flow_type: FlowType,
    pub producers: usize,
    pub temp_controls: usize,
    pub consumers: usize,
    pub connectors: usize,
    #[serde(flatten)]
    pub state: FlowState,
}

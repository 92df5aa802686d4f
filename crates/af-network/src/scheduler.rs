//! Ownership and ordered ticking of many networks.

use af_core::GridId;
use tracing::{debug, trace};

use crate::error::{NetworkError, NetworkResult};
use crate::flow_type::FlowType;
use crate::network::AirFlowNetwork;
use crate::snapshot::NetworkSnapshot;

/// Owns the live networks of a map and drives them once per step.
///
/// Networks tick in insertion order. Grid ids are handed out sequentially
/// starting at 0 and are never reused.
#[derive(Debug, Default)]
pub struct NetworkScheduler {
    networks: Vec<AirFlowNetwork>,
    next_grid: i32,
    ticks: u64,
}

impl NetworkScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty network and return its grid id.
    pub fn add_network(&mut self, flow_type: FlowType) -> NetworkResult<GridId> {
        self.insert_network(AirFlowNetwork::new(flow_type))
    }

    /// Take ownership of an existing network, overwriting its grid id.
    ///
    /// Fails once every non-negative `i32` grid id has been handed out.
    pub fn insert_network(&mut self, mut network: AirFlowNetwork) -> NetworkResult<GridId> {
        let grid = GridId::new(self.next_grid);
        self.next_grid = self
            .next_grid
            .checked_add(1)
            .ok_or(NetworkError::GridIdsExhausted)?;
        network.set_grid_id(grid);
        debug!(%grid, flow_type = %network.flow_type(), "network added");
        self.networks.push(network);
        Ok(grid)
    }

    pub fn network(&self, grid: GridId) -> Option<&AirFlowNetwork> {
        self.networks.iter().find(|n| n.grid_id() == grid)
    }

    pub fn network_mut(&mut self, grid: GridId) -> Option<&mut AirFlowNetwork> {
        self.networks.iter_mut().find(|n| n.grid_id() == grid)
    }

    pub fn networks(&self) -> &[AirFlowNetwork] {
        &self.networks
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Number of completed steps.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn remove_network(&mut self, grid: GridId) -> NetworkResult<AirFlowNetwork> {
        let idx = self
            .networks
            .iter()
            .position(|n| n.grid_id() == grid)
            .ok_or(NetworkError::UnknownGrid { grid })?;
        debug!(%grid, "network removed");
        Ok(self.networks.remove(idx))
    }

    /// Drop every network with no members; returns their grid ids.
    pub fn prune_empty(&mut self) -> Vec<GridId> {
        let mut removed = Vec::new();
        self.networks.retain(|n| {
            if n.is_empty() {
                removed.push(n.grid_id());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            debug!(count = removed.len(), "pruned empty networks");
        }
        removed
    }

    /// Tick every network once, in order.
    pub fn tick(&mut self) {
        for network in &mut self.networks {
            network.tick();
        }
        self.ticks += 1;
        trace!(step = self.ticks, networks = self.networks.len(), "scheduler step");
    }

    pub fn snapshots(&self) -> Vec<NetworkSnapshot> {
        self.networks.iter().map(AirFlowNetwork::snapshot).collect()
    }
}

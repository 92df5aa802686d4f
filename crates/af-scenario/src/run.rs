//! Turning a scenario into live networks and stepping it.

use std::collections::HashMap;
use std::rc::Rc;

use af_core::{GridId, NodeId};
use af_network::{NetworkScheduler, NetworkSnapshot};
use tracing::{debug, info};

use crate::ScenarioResult;
use crate::node::{NodeRole, ScriptedNode};
use crate::schema::{EventDef, ScenarioDef};
use crate::validate::validate_scenario;

struct Placed {
    grid: GridId,
    node: Rc<ScriptedNode>,
}

/// A scenario instantiated into a scheduler, ready to step.
pub struct ScenarioRun {
    name: String,
    scheduler: NetworkScheduler,
    nodes: HashMap<String, Placed>,
    /// Sorted by tick; `next_event` indexes the first one not yet applied.
    events: Vec<EventDef>,
    next_event: usize,
}

/// Validate `scenario` and build its networks.
pub fn build_run(scenario: &ScenarioDef) -> ScenarioResult<ScenarioRun> {
    validate_scenario(scenario)?;

    let mut scheduler = NetworkScheduler::new();
    let mut nodes = HashMap::new();
    let mut next_id = 0_u32;
    let mut alloc_id = || {
        let id = NodeId::from_index(next_id);
        next_id += 1;
        id
    };

    for def in &scenario.networks {
        let grid = scheduler.add_network(def.flow_type)?;
        let Some(network) = scheduler.network_mut(grid) else {
            continue;
        };

        for p in &def.producers {
            let node = Rc::new(ScriptedNode::producer(alloc_id(), p));
            network.register_producer(node.clone());
            nodes.insert(p.id.clone(), Placed { grid, node });
        }
        for c in &def.temp_controls {
            let node = Rc::new(ScriptedNode::temp_control(alloc_id(), c));
            network.register_temp_control(node.clone());
            nodes.insert(c.id.clone(), Placed { grid, node });
        }
        for c in &def.consumers {
            let node = Rc::new(ScriptedNode::consumer(alloc_id(), c));
            network.register_consumer(node.clone());
            nodes.insert(c.id.clone(), Placed { grid, node });
        }
        for c in &def.connectors {
            let node = Rc::new(ScriptedNode::connector(alloc_id(), c));
            network.register_connector(node.clone());
            nodes.insert(c.id.clone(), Placed { grid, node });
        }
    }

    let mut events = scenario.events.clone();
    events.sort_by_key(|e| e.tick);

    info!(
        scenario = %scenario.name,
        networks = scheduler.len(),
        nodes = nodes.len(),
        events = events.len(),
        "scenario built"
    );

    Ok(ScenarioRun {
        name: scenario.name.clone(),
        scheduler,
        nodes,
        events,
        next_event: 0,
    })
}

impl ScenarioRun {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheduler(&self) -> &NetworkScheduler {
        &self.scheduler
    }

    /// Steps completed so far.
    pub fn ticks(&self) -> u64 {
        self.scheduler.ticks()
    }

    pub fn node(&self, id: &str) -> Option<&Rc<ScriptedNode>> {
        self.nodes.get(id).map(|p| &p.node)
    }

    /// Apply this step's events, tick every network and return their snapshots.
    pub fn step(&mut self) -> ScenarioResult<Vec<NetworkSnapshot>> {
        let tick = self.scheduler.ticks();
        while let Some(event) = self.events.get(self.next_event) {
            if event.tick > tick {
                break;
            }
            let event = event.clone();
            self.next_event += 1;
            self.apply_event(&event)?;
        }

        self.scheduler.tick();
        Ok(self.scheduler.snapshots())
    }

    /// Run `ticks` steps, collecting every step's snapshots.
    pub fn run(&mut self, ticks: u64) -> ScenarioResult<Vec<Vec<NetworkSnapshot>>> {
        let mut out = Vec::new();
        for _ in 0..ticks {
            out.push(self.step()?);
        }
        Ok(out)
    }

    fn apply_event(&mut self, event: &EventDef) -> ScenarioResult<()> {
        // Destroyed nodes stay unknown; later events for them are ignored.
        let Some(placed) = self.nodes.get(&event.node) else {
            debug!(node = %event.node, tick = event.tick, "event for removed node skipped");
            return Ok(());
        };

        placed.node.apply(event);
        debug!(node = %placed.node, tick = event.tick, "event applied");

        if event.destroyed {
            let grid = placed.grid;
            let node = placed.node.clone();
            self.nodes.remove(&event.node);
            self.destroy(grid, &node)?;
        }
        Ok(())
    }

    fn destroy(&mut self, grid: GridId, node: &Rc<ScriptedNode>) -> ScenarioResult<()> {
        let Some(network) = self.scheduler.network_mut(grid) else {
            return Ok(());
        };

        match node.role() {
            NodeRole::Producer => network.deregister_producer(node),
            NodeRole::TempControl => network.deregister_temp_control(node),
            NodeRole::Consumer => network.deregister_consumer(node),
            NodeRole::Connector => network.deregister_connector(node),
        };

        if network.is_empty() {
            self.scheduler.remove_network(grid)?;
            info!(%grid, "network lost its last member and was removed");
        }
        Ok(())
    }
}

//! A single air-flow network and its per-tick aggregation.
//!
//! Each tick runs three phases in a fixed order:
//! 1. Producers: total intake air and the average intake temperature
//! 2. Temperature controls: thermal capacity and average converted temperature
//! 3. Consumers: total exhaust air
//!
//! followed by the thermal and flow efficiency ratios.
//!
//! Both temperature averages divide by the number of *registered* members,
//! not the number that contributed. An empty producer list therefore yields
//! a NaN intake temperature. Host behaviour depends on this, so it is kept.

use core::fmt;
use std::rc::Rc;

use af_core::{GridId, Real, ratio_or_zero};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, trace};

use crate::flow_type::FlowType;
use crate::members::Members;
use crate::snapshot::NetworkSnapshot;
use crate::traits::{
    AirFlowConnector, AirFlowConsumer, AirFlowNode, AirFlowProducer, AirFlowTempControl,
    ConnectorRef, ConsumerRef, ProducerRef, TempControlRef,
};

const SEPARATOR: &str = "------------";
const MEMBER_INDENT: &str = "      ";

/// Derived values recomputed by [`AirFlowNetwork::tick`].
///
/// Any field may be NaN; JSON writes those as `null` and they read back as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    /// Total air supplied by operating, active producers.
    #[serde(deserialize_with = "real_or_nan")]
    pub current_intake_air: Real,
    /// Total air drained by operating consumers.
    #[serde(deserialize_with = "real_or_nan")]
    pub current_exhaust_air: Real,
    #[serde(deserialize_with = "real_or_nan")]
    pub average_intake_temperature: Real,
    #[serde(deserialize_with = "real_or_nan")]
    pub average_converted_temperature: Real,
    /// Summed capacity of operating, active temperature controls.
    #[serde(deserialize_with = "real_or_nan")]
    pub thermal_capacity: Real,
    #[serde(deserialize_with = "real_or_nan")]
    pub thermal_efficiency: Real,
    /// Intake over exhaust, capped at 1.0.
    #[serde(deserialize_with = "real_or_nan")]
    pub flow_efficiency: Real,
}

/// `null` reads as NaN.
fn real_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Real, D::Error> {
    Ok(Option::<Real>::deserialize(deserializer)?.unwrap_or(Real::NAN))
}

impl Default for FlowState {
    fn default() -> Self {
        Self {
            current_intake_air: 0.0,
            current_exhaust_air: 0.0,
            average_intake_temperature: 0.0,
            average_converted_temperature: 0.0,
            thermal_capacity: 0.0,
            thermal_efficiency: 1.0,
            flow_efficiency: 1.0,
        }
    }
}

impl FlowState {
    /// Bitwise comparison; treats identical NaNs as equal.
    pub fn same_bits(&self, other: &FlowState) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn to_bits(self) -> [u32; 7] {
        [
            self.current_intake_air.to_bits(),
            self.current_exhaust_air.to_bits(),
            self.average_intake_temperature.to_bits(),
            self.average_converted_temperature.to_bits(),
            self.thermal_capacity.to_bits(),
            self.thermal_efficiency.to_bits(),
            self.flow_efficiency.to_bits(),
        ]
    }
}

/// A group of connected air-flow nodes updated together once per tick.
///
/// Members are shared with the host simulation, which owns them. Membership
/// is by identity: registering the same `Rc` allocation twice is reported
/// and ignored.
pub struct AirFlowNetwork {
    grid_id: GridId,
    flow_type: FlowType,
    producers: Members<dyn AirFlowProducer>,
    temp_controls: Members<dyn AirFlowTempControl>,
    consumers: Members<dyn AirFlowConsumer>,
    connectors: Members<dyn AirFlowConnector>,
    state: FlowState,
}

impl AirFlowNetwork {
    /// Create an empty network with an unassigned grid id.
    pub fn new(flow_type: FlowType) -> Self {
        Self {
            grid_id: GridId::UNASSIGNED,
            flow_type,
            producers: Members::new(),
            temp_controls: Members::new(),
            consumers: Members::new(),
            connectors: Members::new(),
            state: FlowState::default(),
        }
    }

    pub fn with_grid_id(mut self, grid_id: GridId) -> Self {
        self.grid_id = grid_id;
        self
    }

    pub fn grid_id(&self) -> GridId {
        self.grid_id
    }

    pub fn set_grid_id(&mut self, grid_id: GridId) {
        self.grid_id = grid_id;
    }

    pub fn flow_type(&self) -> FlowType {
        self.flow_type
    }

    pub fn set_flow_type(&mut self, flow_type: FlowType) {
        self.flow_type = flow_type;
    }

    // ------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------

    /// Add a producer. Returns `false` (and logs an error) if it was already a member.
    pub fn register_producer(&mut self, producer: ProducerRef) -> bool {
        match self.producers.insert(producer) {
            Ok(()) => true,
            Err(dup) => {
                self.report_duplicate("producer", &*dup);
                false
            }
        }
    }

    /// Remove a producer. Removing a non-member does nothing and returns `false`.
    pub fn deregister_producer<P: AirFlowProducer + ?Sized>(&mut self, producer: &Rc<P>) -> bool {
        self.producers.remove(producer)
    }

    pub fn register_temp_control(&mut self, control: TempControlRef) -> bool {
        match self.temp_controls.insert(control) {
            Ok(()) => true,
            Err(dup) => {
                self.report_duplicate("temperature control", &*dup);
                false
            }
        }
    }

    pub fn deregister_temp_control<C: AirFlowTempControl + ?Sized>(
        &mut self,
        control: &Rc<C>,
    ) -> bool {
        self.temp_controls.remove(control)
    }

    pub fn register_consumer(&mut self, consumer: ConsumerRef) -> bool {
        match self.consumers.insert(consumer) {
            Ok(()) => true,
            Err(dup) => {
                self.report_duplicate("consumer", &*dup);
                false
            }
        }
    }

    pub fn deregister_consumer<C: AirFlowConsumer + ?Sized>(&mut self, consumer: &Rc<C>) -> bool {
        self.consumers.remove(consumer)
    }

    pub fn register_connector(&mut self, connector: ConnectorRef) -> bool {
        match self.connectors.insert(connector) {
            Ok(()) => true,
            Err(dup) => {
                self.report_duplicate("connector", &*dup);
                false
            }
        }
    }

    pub fn deregister_connector<C: AirFlowConnector + ?Sized>(
        &mut self,
        connector: &Rc<C>,
    ) -> bool {
        self.connectors.remove(connector)
    }

    fn report_duplicate<N: AirFlowNode + ?Sized>(&self, role: &'static str, node: &N) {
        error!(
            grid = %self.grid_id,
            role,
            member = %node,
            "air-flow network registered a member it already had"
        );
    }

    pub fn producers(&self) -> &[ProducerRef] {
        self.producers.as_slice()
    }

    pub fn temp_controls(&self) -> &[TempControlRef] {
        self.temp_controls.as_slice()
    }

    pub fn consumers(&self) -> &[ConsumerRef] {
        self.consumers.as_slice()
    }

    pub fn connectors(&self) -> &[ConnectorRef] {
        self.connectors.as_slice()
    }

    /// Total members across all roles.
    pub fn member_count(&self) -> usize {
        self.producers.len()
            + self.temp_controls.len()
            + self.consumers.len()
            + self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
            && self.temp_controls.is_empty()
            && self.consumers.is_empty()
            && self.connectors.is_empty()
    }

    // ------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn current_intake_air(&self) -> Real {
        self.state.current_intake_air
    }

    pub fn current_exhaust_air(&self) -> Real {
        self.state.current_exhaust_air
    }

    pub fn average_intake_temperature(&self) -> Real {
        self.state.average_intake_temperature
    }

    pub fn average_converted_temperature(&self) -> Real {
        self.state.average_converted_temperature
    }

    pub fn thermal_capacity(&self) -> Real {
        self.state.thermal_capacity
    }

    pub fn thermal_efficiency(&self) -> Real {
        self.state.thermal_efficiency
    }

    pub fn flow_efficiency(&self) -> Real {
        self.state.flow_efficiency
    }

    // ------------------------------------------------------------------
    // Tick
    // ------------------------------------------------------------------

    /// Advance the network by one simulation step.
    ///
    /// Call at most once per step, after every member has updated itself.
    pub fn tick(&mut self) {
        self.tick_producers();
        self.tick_temp_controls();
        self.tick_consumers();

        let s = &mut self.state;
        s.thermal_efficiency = ratio_or_zero(s.thermal_capacity, s.current_intake_air);
        s.flow_efficiency = ratio_or_zero(s.current_intake_air, s.current_exhaust_air);
        if s.flow_efficiency > 1.0 {
            s.flow_efficiency = 1.0;
        }

        trace!(
            grid = %self.grid_id,
            intake = s.current_intake_air,
            exhaust = s.current_exhaust_air,
            thermal_efficiency = s.thermal_efficiency,
            flow_efficiency = s.flow_efficiency,
            "air-flow network ticked"
        );
    }

    fn tick_producers(&mut self) {
        let mut air_flow: Real = 0.0;
        let mut temp_sum: Real = 0.0;

        for producer in self.producers.as_slice() {
            if !producer.is_operating() || !producer.is_active() {
                continue;
            }
            air_flow += producer.current_air_flow();
            temp_sum += producer.intake_temperature();
        }

        self.state.average_intake_temperature = temp_sum / self.producers.len() as Real;
        self.state.current_intake_air = air_flow;

        // Without controls the air leaves at intake temperature.
        if self.temp_controls.is_empty() {
            self.state.average_converted_temperature = self.state.average_intake_temperature;
        }
    }

    fn tick_temp_controls(&mut self) {
        if self.temp_controls.is_empty() {
            return;
        }

        let mut temp_sum: Real = 0.0;
        let mut capacity: Real = 0.0;

        for control in self.temp_controls.as_slice() {
            if !control.is_operating() || !control.is_active() {
                continue;
            }
            temp_sum += control.converted_temperature();
            capacity += control.thermal_capacity();
        }

        self.state.thermal_capacity = capacity;
        self.state.average_converted_temperature = temp_sum / self.temp_controls.len() as Real;
    }

    fn tick_consumers(&mut self) {
        self.state.current_exhaust_air = self
            .consumers
            .as_slice()
            .iter()
            .filter(|c| c.is_operating())
            .fold(0.0, |acc, c| acc + c.exhaust_air_flow());
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Multi-line report of the current state and membership.
    pub fn debug_string(&self) -> String {
        self.to_string()
    }

    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            grid_id: self.grid_id,
            flow_type: self.flow_type,
            producers: self.producers.len(),
            temp_controls: self.temp_controls.len(),
            consumers: self.consumers.len(),
            connectors: self.connectors.len(),
            state: self.state,
        }
    }
}

impl fmt::Display for AirFlowNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "AIRFLOW NET {} ({}):", self.grid_id, self.flow_type)?;
        writeln!(f, "  Produced AirFlow: {}", self.state.current_intake_air)?;
        writeln!(
            f,
            "  AverageIntakeTemperature: {}",
            self.state.average_intake_temperature
        )?;
        writeln!(
            f,
            "  AverageConvertedTemperature: {}",
            self.state.average_converted_temperature
        )?;

        writeln!(f, "  Producers:")?;
        for p in self.producers.as_slice() {
            writeln!(f, "{MEMBER_INDENT}{p}")?;
        }
        writeln!(f, "  TempControls:")?;
        for c in self.temp_controls.as_slice() {
            writeln!(f, "{MEMBER_INDENT}{c}")?;
        }
        writeln!(f, "  Consumers:")?;
        for c in self.consumers.as_slice() {
            writeln!(f, "{MEMBER_INDENT}{c}")?;
        }

        writeln!(f, "{SEPARATOR}")
    }
}

impl fmt::Debug for AirFlowNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirFlowNetwork")
            .field("grid_id", &self.grid_id)
            .field("flow_type", &self.flow_type)
            .field("producers", &self.producers.len())
            .field("temp_controls", &self.temp_controls.len())
            .field("consumers", &self.consumers.len())
            .field("connectors", &self.connectors.len())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Minimal node usable in every role.
    struct Probe {
        name: &'static str,
        operating: Cell<bool>,
        active: Cell<bool>,
        flow: Cell<Real>,
        temperature: Cell<Real>,
        capacity: Cell<Real>,
    }

    impl Probe {
        fn new(name: &'static str, flow: Real, temperature: Real, capacity: Real) -> Rc<Self> {
            Rc::new(Self {
                name,
                operating: Cell::new(true),
                active: Cell::new(true),
                flow: Cell::new(flow),
                temperature: Cell::new(temperature),
                capacity: Cell::new(capacity),
            })
        }

        fn producer(name: &'static str, flow: Real, temperature: Real) -> Rc<Self> {
            Self::new(name, flow, temperature, 0.0)
        }

        fn control(name: &'static str, temperature: Real, capacity: Real) -> Rc<Self> {
            Self::new(name, 0.0, temperature, capacity)
        }

        fn consumer(name: &'static str, exhaust: Real) -> Rc<Self> {
            Self::new(name, exhaust, 0.0, 0.0)
        }
    }

    impl fmt::Display for Probe {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name)
        }
    }

    impl AirFlowNode for Probe {
        fn is_operating(&self) -> bool {
            self.operating.get()
        }
    }

    impl AirFlowProducer for Probe {
        fn is_active(&self) -> bool {
            self.active.get()
        }
        fn current_air_flow(&self) -> Real {
            self.flow.get()
        }
        fn intake_temperature(&self) -> Real {
            self.temperature.get()
        }
    }

    impl AirFlowTempControl for Probe {
        fn is_active(&self) -> bool {
            self.active.get()
        }
        fn converted_temperature(&self) -> Real {
            self.temperature.get()
        }
        fn thermal_capacity(&self) -> Real {
            self.capacity.get()
        }
    }

    impl AirFlowConsumer for Probe {
        fn exhaust_air_flow(&self) -> Real {
            self.flow.get()
        }
    }

    impl AirFlowConnector for Probe {}

    #[test]
    fn new_network_defaults() {
        let net = AirFlowNetwork::new(FlowType::Cold);
        assert_eq!(net.grid_id(), GridId::UNASSIGNED);
        assert_eq!(net.flow_type(), FlowType::Cold);
        assert_eq!(net.thermal_efficiency(), 1.0);
        assert_eq!(net.flow_efficiency(), 1.0);
        assert_eq!(net.current_intake_air(), 0.0);
        assert!(net.is_empty());
    }

    #[test]
    fn empty_network_tick() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        net.tick();

        assert_eq!(net.current_intake_air(), 0.0);
        assert_eq!(net.current_exhaust_air(), 0.0);
        assert_eq!(net.thermal_efficiency(), 0.0);
        assert_eq!(net.flow_efficiency(), 0.0);
        // 0 / 0 over the (empty) producer count is left unguarded.
        assert!(net.average_intake_temperature().is_nan());
        assert!(net.average_converted_temperature().is_nan());
    }

    #[test]
    fn single_producer_passes_temperature_through() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        net.register_producer(Probe::producer("intake", 10.0, 20.0));
        net.tick();

        assert_eq!(net.current_intake_air(), 10.0);
        assert_eq!(net.average_intake_temperature(), 20.0);
        assert_eq!(net.average_converted_temperature(), 20.0);
        assert_eq!(net.thermal_capacity(), 0.0);
        assert_eq!(net.thermal_efficiency(), 0.0);
    }

    #[test]
    fn inactive_producer_still_counts_toward_average() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        let on = Probe::producer("on", 10.0, 20.0);
        let off = Probe::producer("off", 50.0, 80.0);
        off.active.set(false);
        net.register_producer(on);
        net.register_producer(off);
        net.tick();

        assert_eq!(net.current_intake_air(), 10.0);
        assert_eq!(net.average_intake_temperature(), 10.0);
    }

    #[test]
    fn non_operating_producer_contributes_nothing() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        let p = Probe::producer("p", 10.0, 20.0);
        p.operating.set(false);
        net.register_producer(p);
        net.tick();

        assert_eq!(net.current_intake_air(), 0.0);
        assert_eq!(net.average_intake_temperature(), 0.0);
    }

    #[test]
    fn controls_average_over_total_count() {
        let mut net = AirFlowNetwork::new(FlowType::Cold);
        net.register_producer(Probe::producer("intake", 10.0, 20.0));
        let active = Probe::control("ccu_a", 30.0, 5.0);
        let idle = Probe::control("ccu_b", 40.0, 7.0);
        idle.active.set(false);
        net.register_temp_control(active);
        net.register_temp_control(idle);
        net.tick();

        assert_eq!(net.thermal_capacity(), 5.0);
        assert_eq!(net.average_converted_temperature(), 15.0);
        assert_eq!(net.thermal_efficiency(), 0.5);
    }

    #[test]
    fn controls_without_producers_keep_own_average() {
        let mut net = AirFlowNetwork::new(FlowType::Cold);
        net.register_temp_control(Probe::control("ccu", 30.0, 5.0));
        net.tick();

        assert!(net.average_intake_temperature().is_nan());
        assert_eq!(net.average_converted_temperature(), 30.0);
        assert_eq!(net.thermal_capacity(), 5.0);
        assert_eq!(net.thermal_efficiency(), 0.0);
    }

    #[test]
    fn thermal_capacity_is_kept_after_last_control_leaves() {
        let mut net = AirFlowNetwork::new(FlowType::Cold);
        net.register_producer(Probe::producer("intake", 10.0, 20.0));
        let ccu = Probe::control("ccu", 30.0, 5.0);
        net.register_temp_control(ccu.clone());
        net.tick();
        assert_eq!(net.thermal_capacity(), 5.0);

        assert!(net.deregister_temp_control(&ccu));
        net.tick();
        assert_eq!(net.thermal_capacity(), 5.0);
        assert_eq!(net.average_converted_temperature(), 20.0);
    }

    #[test]
    fn flow_efficiency_is_capped() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        net.register_producer(Probe::producer("intake", 10.0, 20.0));
        net.register_consumer(Probe::consumer("vent", 4.0));
        net.tick();

        assert_eq!(net.current_exhaust_air(), 4.0);
        assert_eq!(net.flow_efficiency(), 1.0);
    }

    #[test]
    fn flow_efficiency_below_one() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        net.register_producer(Probe::producer("intake", 5.0, 20.0));
        net.register_consumer(Probe::consumer("vent_a", 5.0));
        net.register_consumer(Probe::consumer("vent_b", 5.0));
        net.tick();

        assert_eq!(net.flow_efficiency(), 0.5);
    }

    #[test]
    fn non_operating_consumer_is_skipped() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        net.register_producer(Probe::producer("intake", 5.0, 20.0));
        let vent = Probe::consumer("vent", 5.0);
        vent.operating.set(false);
        // Consumers have no active flag; this one must still be skipped.
        vent.active.set(true);
        net.register_consumer(vent);
        net.tick();

        assert_eq!(net.current_exhaust_air(), 0.0);
        assert_eq!(net.flow_efficiency(), 0.0);
    }

    #[test]
    fn zero_intake_zeroes_thermal_efficiency() {
        let mut net = AirFlowNetwork::new(FlowType::Cold);
        let p = Probe::producer("intake", 10.0, 20.0);
        p.active.set(false);
        net.register_producer(p);
        net.register_temp_control(Probe::control("ccu", 30.0, 100.0));
        net.tick();

        assert_eq!(net.current_intake_air(), 0.0);
        assert_eq!(net.thermal_capacity(), 100.0);
        assert_eq!(net.thermal_efficiency(), 0.0);
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        let p = Probe::producer("intake", 10.0, 20.0);
        assert!(net.register_producer(p.clone()));
        assert!(!net.register_producer(p.clone()));
        assert_eq!(net.producers().len(), 1);

        let c = Probe::consumer("vent", 1.0);
        assert!(net.register_consumer(c.clone()));
        assert!(!net.register_consumer(c));
        assert_eq!(net.consumers().len(), 1);
    }

    #[test]
    fn same_node_may_hold_several_roles() {
        let mut net = AirFlowNetwork::new(FlowType::Any);
        let node = Probe::new("combo", 3.0, 20.0, 1.0);
        assert!(net.register_producer(node.clone()));
        assert!(net.register_temp_control(node.clone()));
        assert!(net.register_consumer(node.clone()));
        assert!(net.register_connector(node));
        assert_eq!(net.member_count(), 4);
    }

    #[test]
    fn deregister_non_member_is_noop() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        let member = Probe::producer("member", 1.0, 1.0);
        let stranger = Probe::producer("stranger", 1.0, 1.0);
        net.register_producer(member);

        assert!(!net.deregister_producer(&stranger));
        assert_eq!(net.producers().len(), 1);
    }

    #[test]
    fn deregister_accepts_trait_object_handle() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        let handle: ProducerRef = Probe::producer("p", 1.0, 1.0);
        net.register_producer(handle.clone());
        assert!(net.deregister_producer(&handle));
        assert!(net.is_empty());
    }

    #[test]
    fn connectors_do_not_affect_tick() {
        let mut with = AirFlowNetwork::new(FlowType::Hot);
        let mut without = AirFlowNetwork::new(FlowType::Hot);
        for net in [&mut with, &mut without] {
            net.register_producer(Probe::producer("intake", 10.0, 20.0));
            net.register_consumer(Probe::consumer("vent", 20.0));
        }
        with.register_connector(Probe::new("pipe", 99.0, 99.0, 99.0));

        with.tick();
        without.tick();
        assert!(with.state().same_bits(without.state()));
    }

    #[test]
    fn tick_is_idempotent() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        net.register_producer(Probe::producer("intake", 7.0, 21.0));
        net.register_temp_control(Probe::control("ccu", 12.0, 3.0));
        net.register_consumer(Probe::consumer("vent", 9.0));

        net.tick();
        let first = *net.state();
        net.tick();
        assert!(first.same_bits(net.state()));
    }

    #[test]
    fn tick_follows_member_changes() {
        let mut net = AirFlowNetwork::new(FlowType::Hot);
        let p = Probe::producer("intake", 10.0, 20.0);
        net.register_producer(p.clone());
        net.tick();
        assert_eq!(net.current_intake_air(), 10.0);

        p.flow.set(4.0);
        net.tick();
        assert_eq!(net.current_intake_air(), 4.0);
    }

    #[test]
    fn debug_string_layout() {
        let mut net = AirFlowNetwork::new(FlowType::Hot).with_grid_id(GridId::new(3));
        net.register_producer(Probe::producer("intake", 10.0, 20.0));
        net.register_temp_control(Probe::control("ccu", 30.0, 5.0));
        net.register_consumer(Probe::consumer("vent_a", 4.0));
        net.register_consumer(Probe::consumer("vent_b", 4.0));
        net.register_connector(Probe::new("pipe", 0.0, 0.0, 0.0));
        net.tick();

        let expected = "\
------------
AIRFLOW NET 3 (Hot):
  Produced AirFlow: 10
  AverageIntakeTemperature: 20
  AverageConvertedTemperature: 30
  Producers:
      intake
  TempControls:
      ccu
  Consumers:
      vent_a
      vent_b
------------
";
        assert_eq!(net.debug_string(), expected);
    }

    #[test]
    fn debug_string_is_read_only() {
        let mut net = AirFlowNetwork::new(FlowType::Frozen);
        net.tick();
        let before = *net.state();
        let a = net.debug_string();
        let b = net.debug_string();
        assert_eq!(a, b);
        assert!(a.contains("AverageIntakeTemperature: NaN"));
        assert!(before.same_bits(net.state()));
    }
}

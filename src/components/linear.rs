//! Linear passive components: Resistor, Inductor, Capacitor.

use crate::circuit::{Mesh, MeshPartition, SimulationState};
use crate::solver::MeshSystem;

/// Stamp one endpoint of a series element with coefficient `coeff` (ohms for
/// a resistor, L/dt for an inductor) plus a constant term `bias` on the
/// right-hand side.
///
/// `mesh` is the endpoint owning the row; `other` is the far endpoint. A
/// ground endpoint contributes nothing; a forced far endpoint folds its
/// known current into B instead of A.
fn stamp_series(
    system: &mut MeshSystem,
    partition: &MeshPartition,
    state: &SimulationState,
    mesh: Mesh,
    other: Mesh,
    coeff: f64,
    bias: f64,
) {
    let Some(i) = partition.row(mesh) else {
        return;
    };
    system.add(i, i, coeff);
    match other {
        Mesh::Ground => {}
        Mesh::Loop(k) => match partition.row(other) {
            Some(j) => system.add(i, j, -coeff),
            // Forced mesh: its current is already known, move it to the RHS
            None => system.add_rhs(i, -coeff * state.mesh_currents()[k]),
        },
    }
    if bias != 0.0 {
        system.add_rhs(i, bias);
    }
}

/// A resistor.
///
/// Stamps Ohm's law symmetrically into both endpoint rows: `A[i,i] += R`,
/// `A[i,j] -= R` for a free far endpoint.
#[derive(Debug, Clone)]
pub struct Resistor {
    pub meshes: [Mesh; 2],
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor (ohms).
    pub fn new(mesh1: Mesh, mesh2: Mesh, resistance: f64) -> Self {
        Self {
            meshes: [mesh1, mesh2],
            resistance,
        }
    }

    pub(crate) fn stamp(
        &self,
        system: &mut MeshSystem,
        partition: &MeshPartition,
        state: &SimulationState,
    ) {
        let [m1, m2] = self.meshes;
        stamp_series(system, partition, state, m1, m2, self.resistance, 0.0);
        stamp_series(system, partition, state, m2, m1, self.resistance, 0.0);
    }
}

/// An inductor.
///
/// Backward-Euler companion model: within one step the inductor behaves like
/// a resistor of value L/dt plus a history term carrying forward last step's
/// current difference. The history term enters the RHS with opposite signs
/// on the two endpoint rows.
#[derive(Debug, Clone)]
pub struct Inductor {
    pub meshes: [Mesh; 2],
    pub inductance: f64,
}

impl Inductor {
    /// Create a new inductor (henries).
    pub fn new(mesh1: Mesh, mesh2: Mesh, inductance: f64) -> Self {
        Self {
            meshes: [mesh1, mesh2],
            inductance,
        }
    }

    /// Companion resistance L/dt.
    pub fn coefficient(&self, dt: f64) -> f64 {
        self.inductance / dt
    }

    pub(crate) fn stamp(
        &self,
        system: &mut MeshSystem,
        partition: &MeshPartition,
        state: &SimulationState,
        dt: f64,
    ) {
        let [m1, m2] = self.meshes;
        let coeff = self.coefficient(dt);
        let constant = -coeff
            * (state.previous_mesh_current(m1) - state.previous_mesh_current(m2));
        stamp_series(system, partition, state, m1, m2, coeff, constant);
        stamp_series(system, partition, state, m2, m1, coeff, -constant);
    }
}

/// A capacitor.
///
/// The stored voltage is treated as known for the current step (it lags by
/// one step), so the capacitor never touches A: it only injects its voltage
/// into the RHS. After the solve, [`Capacitor::update_voltage`] integrates
/// the voltage forward from the freshly solved mesh currents.
#[derive(Debug, Clone)]
pub struct Capacitor {
    pub meshes: [Mesh; 2],
    pub capacitance: f64,
    /// Stored voltage; the only component field that mutates after
    /// construction (once per step).
    pub voltage: f64,
}

impl Capacitor {
    /// Create a new capacitor (farads) with zero initial voltage.
    pub fn new(mesh1: Mesh, mesh2: Mesh, capacitance: f64) -> Self {
        Self::with_voltage(mesh1, mesh2, capacitance, 0.0)
    }

    /// Create a new capacitor with an initial voltage (volts).
    pub fn with_voltage(mesh1: Mesh, mesh2: Mesh, capacitance: f64, voltage: f64) -> Self {
        Self {
            meshes: [mesh1, mesh2],
            capacitance,
            voltage,
        }
    }

    /// The presently stored voltage in volts.
    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    pub(crate) fn stamp(&self, system: &mut MeshSystem, partition: &MeshPartition) {
        if let Some(i) = partition.row(self.meshes[0]) {
            system.add_rhs(i, self.voltage);
        }
        if let Some(j) = partition.row(self.meshes[1]) {
            system.add_rhs(j, -self.voltage);
        }
    }

    /// Forward-Euler voltage update from the just-solved mesh currents.
    pub(crate) fn update_voltage(&mut self, state: &SimulationState, dt: f64) {
        let i1 = state.mesh_current(self.meshes[0]);
        let i2 = state.mesh_current(self.meshes[1]);
        self.voltage += dt * (i1 - i2) / self.capacitance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_free(total: usize) -> MeshPartition {
        MeshPartition::build(total, &vec![false; total])
    }

    #[test]
    fn test_resistor_stamp_two_free_meshes() {
        let partition = all_free(2);
        let state = SimulationState::new(2);
        let mut system = MeshSystem::new(2);

        let r = Resistor::new(Mesh::Loop(0), Mesh::Loop(1), 100.0);
        r.stamp(&mut system, &partition, &state);

        assert_eq!(system.get(0, 0), 100.0);
        assert_eq!(system.get(1, 1), 100.0);
        assert_eq!(system.get(0, 1), -100.0);
        assert_eq!(system.get(1, 0), -100.0);
        assert_eq!(system.rhs(0), 0.0);
        assert_eq!(system.rhs(1), 0.0);
    }

    #[test]
    fn test_resistor_stamp_grounded_endpoint() {
        let partition = all_free(1);
        let state = SimulationState::new(1);
        let mut system = MeshSystem::new(1);

        let r = Resistor::new(Mesh::Loop(0), Mesh::Ground, 50.0);
        r.stamp(&mut system, &partition, &state);

        // Ground contributes nothing beyond the diagonal
        assert_eq!(system.get(0, 0), 50.0);
        assert_eq!(system.rhs(0), 0.0);
    }

    #[test]
    fn test_resistor_stamp_forced_endpoint_folds_into_rhs() {
        // Mesh 0 forced at 2 A, mesh 1 free
        let partition = MeshPartition::build(2, &[true, false]);
        let mut state = SimulationState::new(2);
        state.mesh_currents[0] = 2.0;
        let mut system = MeshSystem::new(1);

        let r = Resistor::new(Mesh::Loop(0), Mesh::Loop(1), 10.0);
        r.stamp(&mut system, &partition, &state);

        assert_eq!(system.get(0, 0), 10.0);
        assert_eq!(system.rhs(0), -20.0);
    }

    #[test]
    fn test_stamps_accumulate() {
        let partition = all_free(1);
        let state = SimulationState::new(1);
        let mut system = MeshSystem::new(1);

        Resistor::new(Mesh::Loop(0), Mesh::Ground, 10.0).stamp(&mut system, &partition, &state);
        Resistor::new(Mesh::Loop(0), Mesh::Ground, 30.0).stamp(&mut system, &partition, &state);

        assert_eq!(system.get(0, 0), 40.0);
    }

    #[test]
    fn test_inductor_stamp_history_term() {
        let partition = all_free(2);
        let mut state = SimulationState::new(2);
        state.mesh_currents[0] = 1.0;
        state.mesh_currents[1] = 0.25;
        state.snapshot_previous();
        let mut system = MeshSystem::new(2);

        let dt = 0.1;
        let l = Inductor::new(Mesh::Loop(0), Mesh::Loop(1), 2.0);
        l.stamp(&mut system, &partition, &state, dt);

        // coeff = L/dt = 20, constant = -20 * (1.0 - 0.25) = -15
        assert_eq!(system.get(0, 0), 20.0);
        assert_eq!(system.get(1, 1), 20.0);
        assert_eq!(system.get(0, 1), -20.0);
        assert_eq!(system.get(1, 0), -20.0);
        assert_eq!(system.rhs(0), -15.0);
        assert_eq!(system.rhs(1), 15.0);
    }

    #[test]
    fn test_capacitor_stamp_rhs_only() {
        let partition = all_free(2);
        let mut system = MeshSystem::new(2);

        let c = Capacitor::with_voltage(Mesh::Loop(0), Mesh::Loop(1), 1e-6, 5.0);
        c.stamp(&mut system, &partition);

        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(system.get(row, col), 0.0);
            }
        }
        assert_eq!(system.rhs(0), 5.0);
        assert_eq!(system.rhs(1), -5.0);
    }

    #[test]
    fn test_capacitor_stamp_skips_non_free_endpoints() {
        // Mesh 0 forced, mesh 1 free
        let partition = MeshPartition::build(2, &[true, false]);
        let mut system = MeshSystem::new(1);

        let c = Capacitor::with_voltage(Mesh::Loop(0), Mesh::Loop(1), 1e-6, 3.0);
        c.stamp(&mut system, &partition);

        assert_eq!(system.rhs(0), -3.0);
    }

    #[test]
    fn test_capacitor_voltage_update() {
        let mut state = SimulationState::new(2);
        state.mesh_currents[0] = 0.5;
        state.mesh_currents[1] = 0.1;

        let mut c = Capacitor::new(Mesh::Loop(0), Mesh::Loop(1), 2.0);
        c.update_voltage(&state, 0.1);

        // V += dt * (I1 - I2) / C = 0.1 * 0.4 / 2 = 0.02
        assert!((c.voltage() - 0.02).abs() < 1e-15);
    }

    #[test]
    fn test_capacitor_voltage_update_ground_endpoint() {
        let mut state = SimulationState::new(1);
        state.mesh_currents[0] = 1.0;

        let mut c = Capacitor::new(Mesh::Loop(0), Mesh::Ground, 1.0);
        c.update_voltage(&state, 0.5);

        assert!((c.voltage() - 0.5).abs() < 1e-15);
    }
}

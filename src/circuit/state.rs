//! Simulation state: mesh currents and elapsed time.

use super::types::Mesh;

/// The evolving state of a simulation run.
///
/// Created once by [`Circuit::initialize_state`](super::Circuit::initialize_state)
/// after all components are added, then mutated every step. External
/// consumers (exporters, plotters) read it between steps via
/// [`Circuit::state`](super::Circuit::state).
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current value of every mesh current, indexed by mesh number.
    pub(crate) mesh_currents: Vec<f64>,
    /// Snapshot of the mesh currents taken at the start of each step.
    /// Consumed only by components that need the prior instant (inductors).
    pub(crate) previous_mesh_currents: Vec<f64>,
    /// Elapsed simulation time in seconds.
    pub(crate) time: f64,
}

impl SimulationState {
    /// Create a zeroed state for `total_meshes` meshes at time 0.
    pub(crate) fn new(total_meshes: usize) -> Self {
        Self {
            mesh_currents: vec![0.0; total_meshes],
            previous_mesh_currents: vec![0.0; total_meshes],
            time: 0.0,
        }
    }

    /// Copy the current mesh currents into the previous-step snapshot.
    pub(crate) fn snapshot_previous(&mut self) {
        self.previous_mesh_currents.copy_from_slice(&self.mesh_currents);
    }

    /// Elapsed simulation time in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of meshes tracked by this state.
    pub fn total_meshes(&self) -> usize {
        self.mesh_currents.len()
    }

    /// All mesh currents, indexed by mesh number.
    pub fn mesh_currents(&self) -> &[f64] {
        &self.mesh_currents
    }

    /// Current in one mesh. Ground always reads as zero.
    pub fn mesh_current(&self, mesh: Mesh) -> f64 {
        match mesh.index() {
            Some(m) => self.mesh_currents[m],
            None => 0.0,
        }
    }

    /// Previous-step current in one mesh. Ground always reads as zero.
    pub fn previous_mesh_current(&self, mesh: Mesh) -> f64 {
        match mesh.index() {
            Some(m) => self.previous_mesh_currents[m],
            None => 0.0,
        }
    }
}

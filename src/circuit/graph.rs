//! Circuit ownership and the per-step orchestration.

use crate::components::Component;
use crate::error::{MeshSimError, Result};
use crate::solver::{stamp_components, MeshSystem};

use super::partition::MeshPartition;
use super::state::SimulationState;
use super::types::Mesh;

/// A circuit: an ordered collection of components plus the simulation state.
///
/// Components are kept in insertion order, which fixes the floating-point
/// accumulation order of stamping (reproducibility, not correctness).
/// `total_meshes` grows monotonically as components are added and must be
/// final before [`initialize_state`](Self::initialize_state).
#[derive(Debug)]
pub struct Circuit {
    /// All components, in insertion order.
    components: Vec<Component>,
    /// One more than the highest mesh index referenced by any component.
    total_meshes: usize,
    /// Fixed simulation time step in seconds.
    dt: f64,
    /// Simulation state, present after `initialize_state`.
    state: Option<SimulationState>,
}

impl Circuit {
    /// Create an empty circuit with the given fixed time step (seconds).
    pub fn new(time_step: f64) -> Self {
        Self {
            components: Vec::new(),
            total_meshes: 0,
            dt: time_step,
            state: None,
        }
    }

    /// Append a component, growing the mesh count to cover its endpoints.
    ///
    /// Adding components after [`initialize_state`](Self::initialize_state)
    /// requires re-initializing before the next [`step`](Self::step).
    pub fn add_component(&mut self, component: impl Into<Component>) {
        let component = component.into();
        for mesh in component.meshes() {
            if let Mesh::Loop(m) = mesh {
                self.total_meshes = self.total_meshes.max(m + 1);
            }
        }
        self.components.push(component);
    }

    /// The fixed time step in seconds.
    pub fn time_step(&self) -> f64 {
        self.dt
    }

    /// One more than the highest mesh index referenced so far.
    pub fn total_meshes(&self) -> usize {
        self.total_meshes
    }

    /// All components, in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The simulation state, if initialized.
    pub fn state(&self) -> Option<&SimulationState> {
        self.state.as_ref()
    }

    /// Create (or reset) the simulation state.
    ///
    /// Must be called after all components are added and before the first
    /// [`step`](Self::step). Calling it again zeroes the mesh currents and
    /// restarts time; stored capacitor voltages are left as they are.
    pub fn initialize_state(&mut self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(MeshSimError::InvalidTimeStep { dt: self.dt });
        }
        self.state = Some(SimulationState::new(self.total_meshes));
        Ok(())
    }

    /// Advance the simulation by one time step.
    ///
    /// Sequence: snapshot previous currents, apply grounded current sources
    /// (their meshes become forced), partition the remaining meshes, stamp
    /// every non-source component into a fresh linear system, solve, write
    /// the solution back into the free positions, integrate capacitor
    /// voltages, and advance time.
    ///
    /// On [`MeshSimError::SingularSystem`] the state is unspecified and the
    /// run should be abandoned.
    pub fn step(&mut self) -> Result<()> {
        let dt = self.dt;
        let total_meshes = self.total_meshes;
        let state = self
            .state
            .as_mut()
            .ok_or(MeshSimError::StateNotInitialized)?;
        if state.total_meshes() != total_meshes {
            return Err(MeshSimError::StaleState {
                state_meshes: state.total_meshes(),
                circuit_meshes: total_meshes,
            });
        }

        state.snapshot_previous();

        // Grounded current sources fix their mesh's current directly;
        // those meshes drop out of the unknowns for this step.
        let mut forced = vec![false; total_meshes];
        for component in &self.components {
            if let Component::CurrentSource(source) = component {
                if let Some((mesh, value)) = source.forced_current(state.time) {
                    state.mesh_currents[mesh] = value;
                    forced[mesh] = true;
                }
            }
        }

        let partition = MeshPartition::build(total_meshes, &forced);
        let n_free = partition.num_free();
        tracing::debug!(time = state.time, n_free, "assembling mesh system");

        // With every mesh forced there is nothing to solve; skipping avoids
        // a 0x0 elimination.
        if n_free > 0 {
            let mut system = MeshSystem::new(n_free);
            stamp_components(&self.components, &mut system, &partition, state, dt);
            system.solve()?;

            // Forced positions already hold their source-driven values.
            for (row, &mesh) in partition.free_meshes().iter().enumerate() {
                state.mesh_currents[mesh] = system.solution()[row];
            }
        }

        for component in &mut self.components {
            if let Component::Capacitor(capacitor) = component {
                capacitor.update_voltage(state, dt);
            }
        }

        state.time += dt;
        Ok(())
    }
}

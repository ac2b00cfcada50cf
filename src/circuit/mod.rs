//! Circuit representation, simulation state, and the step loop.
//!
//! [`Circuit`] owns the component collection and drives one simulation step
//! at a time: it applies forced sources, partitions meshes into free and
//! forced, has each component stamp the linear system, solves it, and
//! writes the results back into [`SimulationState`].

mod graph;
mod partition;
mod state;
mod types;
mod validate;

pub use graph::Circuit;
pub use partition::MeshPartition;
pub use state::SimulationState;
pub use types::Mesh;
pub use validate::validate_circuit;

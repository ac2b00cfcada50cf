//! # Meshsim
//!
//! A fixed-step transient circuit simulator based on mesh (loop) current
//! analysis.
//!
//! This library provides:
//! - A circuit model built from typed components (R, L, C, current sources)
//!   wired between abstract meshes
//! - Per-component "stamping" of a dense linear system at every time step
//! - A direct Gaussian-elimination solver for the free-mesh unknowns
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Circuit ownership, simulation state, and the step loop
//! - [`components`] - Component models and their stamping rules
//! - [`solver`] - Linear system accumulator and dense solver
//!
//! ## Simulation Method
//!
//! The simulator assigns one unknown current to each mesh of the circuit.
//! For each time step dt:
//!
//! 1. Current sources with a grounded endpoint force their mesh's current
//!    directly; those meshes drop out of the unknowns
//! 2. Every remaining component stamps its contribution into a dense system
//!    over the free meshes
//! 3. The system A·X = -B is solved by Gaussian elimination and the solution
//!    written back into the mesh currents
//! 4. Capacitor voltages integrate forward from the freshly solved currents
//!
//! Inductors are discretized with backward Euler (a companion resistance
//! L/dt plus a history term); capacitor voltages lag by one step and
//! integrate with forward Euler.
//!
//! ## Usage
//!
//! ```
//! use meshsim::{Capacitor, Circuit, Component, CurrentSource, Mesh, Resistor, Waveform};
//!
//! let mut circuit = Circuit::new(1e-3);
//! circuit.add_component(Component::CurrentSource(CurrentSource::new(
//!     Mesh::Loop(0),
//!     Mesh::Ground,
//!     Waveform::dc(1.0),
//! )));
//! circuit.add_component(Component::Resistor(Resistor::new(
//!     Mesh::Loop(0),
//!     Mesh::Loop(1),
//!     10.0,
//! )));
//! circuit.add_component(Component::Capacitor(Capacitor::new(
//!     Mesh::Loop(1),
//!     Mesh::Ground,
//!     1e-6,
//! )));
//! circuit.initialize_state().unwrap();
//! circuit.step().unwrap();
//! let state = circuit.state().unwrap();
//! assert_eq!(state.mesh_current(Mesh::Loop(0)), 1.0);
//! ```

pub mod circuit;
pub mod components;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Circuit, Mesh, SimulationState};
pub use components::{Capacitor, Component, CurrentSource, Inductor, Resistor, Waveform};
pub use error::{MeshSimError, Result};

/// Default simulation time step in seconds.
pub const DEFAULT_TIME_STEP: f64 = 1e-3;

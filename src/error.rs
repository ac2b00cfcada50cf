//! Error types for the meshsim circuit simulator.
//!
//! This module provides a unified error type [`MeshSimError`] covering
//! circuit validation, state lifecycle misuse, and simulation failures.

use thiserror::Error;

/// Result type alias using [`MeshSimError`].
pub type Result<T> = std::result::Result<T, MeshSimError>;

/// Unified error type for all meshsim operations.
#[derive(Error, Debug)]
pub enum MeshSimError {
    // ============ Simulation Errors ============
    /// A pivot fell below the singularity threshold during elimination.
    ///
    /// This is fatal to the current step: there is no pivoting fallback, and
    /// it usually means a free mesh has no resistive or inductive path. The
    /// simulation state is unspecified after this error and the run should
    /// be treated as unusable.
    #[error("Singular mesh system at pivot row {row} - a free mesh may have no resistive or inductive path")]
    SingularSystem { row: usize },

    // ============ Lifecycle Errors ============
    /// `step` was called before `initialize_state`.
    #[error("Simulation state not initialized - call initialize_state() after adding components")]
    StateNotInitialized,

    /// Components were added after `initialize_state` without re-initializing.
    #[error("Simulation state is stale: state holds {state_meshes} meshes but the circuit now has {circuit_meshes} - call initialize_state() again")]
    StaleState {
        state_meshes: usize,
        circuit_meshes: usize,
    },

    /// The configured time step cannot drive a simulation.
    #[error("Invalid time step {dt}: must be finite and positive")]
    InvalidTimeStep { dt: f64 },

    // ============ Validation Errors ============
    /// The circuit contains no components.
    #[error("Circuit has no components")]
    EmptyCircuit,
}

//! Mesh-current linear system assembly and solving.
//!
//! Each step assembles a dense system over the free meshes:
//!
//! ```text
//! A * X = -B
//! ```
//!
//! where:
//! - A accumulates resistive and companion-model coefficients (ohms)
//! - B accumulates constant terms: capacitor voltages, inductor history
//!   terms, and the folded-in currents of forced meshes
//! - X is the vector of free mesh currents
//!
//! Components contribute by *stamping*: adding their own entries in place.
//! No cell is owned by any one component; contributions accumulate. The
//! conventional sign flip (solving against -B) is applied exactly once,
//! inside [`MeshSystem::solve`], never by components.

mod stamp;
mod system;

pub use stamp::stamp_components;
pub use system::MeshSystem;

/// Pivot magnitudes below this are treated as singular.
pub const PIVOT_TOLERANCE: f64 = 1e-9;

//! Stamping dispatch over the component set.

use crate::circuit::{MeshPartition, SimulationState};
use crate::components::Component;

use super::MeshSystem;

/// Stamp every non-source component into the mesh system.
///
/// Components are visited in insertion order; the order only affects
/// floating-point summation order, never correctness. Current sources are
/// applied before assembly and contribute nothing here.
pub fn stamp_components(
    components: &[Component],
    system: &mut MeshSystem,
    partition: &MeshPartition,
    state: &SimulationState,
    dt: f64,
) {
    for component in components {
        match component {
            Component::Resistor(r) => r.stamp(system, partition, state),
            Component::Inductor(l) => l.stamp(system, partition, state, dt),
            Component::Capacitor(c) => c.stamp(system, partition),
            // Applied before matrix assembly, never stamped
            Component::CurrentSource(_) => {}
        }
    }
}

//! Circuit validation.

use crate::components::Component;
use crate::error::{MeshSimError, Result};

use super::Circuit;

/// Validate a circuit before simulation.
///
/// Checks:
/// - The circuit has at least one component
/// - Every current source has exactly one grounded endpoint; others are
///   reported via `tracing::warn!` (their effect is not represented by the
///   mesh model, and the engine ignores them at step time)
///
/// Topology checks beyond this (planarity, mesh reachability) are out of
/// scope: mesh numbering is the caller's responsibility.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    if circuit.components().is_empty() {
        return Err(MeshSimError::EmptyCircuit);
    }

    for component in circuit.components() {
        if let Component::CurrentSource(source) = component {
            if source.forced_mesh().is_none() {
                let [m1, m2] = source.meshes;
                tracing::warn!(
                    %m1,
                    %m2,
                    "current source without exactly one grounded endpoint has no effect on the solution"
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Mesh;
    use crate::components::{CurrentSource, Resistor, Waveform};

    #[test]
    fn test_empty_circuit_rejected() {
        let circuit = Circuit::new(0.1);
        assert!(matches!(
            validate_circuit(&circuit),
            Err(MeshSimError::EmptyCircuit)
        ));
    }

    #[test]
    fn test_grounded_source_passes() {
        let mut circuit = Circuit::new(0.1);
        circuit.add_component(CurrentSource::new(
            Mesh::Loop(0),
            Mesh::Ground,
            Waveform::dc(1.0),
        ));
        circuit.add_component(Resistor::new(Mesh::Loop(0), Mesh::Ground, 1.0));
        validate_circuit(&circuit).unwrap();
    }

    #[test]
    fn test_free_free_source_warns_but_passes() {
        // The limitation is diagnosable, not an error: behavior at step
        // time stays a no-op.
        let mut circuit = Circuit::new(0.1);
        circuit.add_component(CurrentSource::new(
            Mesh::Loop(0),
            Mesh::Loop(1),
            Waveform::dc(1.0),
        ));
        validate_circuit(&circuit).unwrap();
    }
}

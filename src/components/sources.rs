//! Current sources and their driving waveforms.

use std::fmt;
use std::sync::Arc;

use crate::circuit::Mesh;

/// A time -> current function driving a [`CurrentSource`].
///
/// Wrapping the closure in an `Arc` keeps components cheap to clone while
/// still accepting arbitrary user functions.
#[derive(Clone)]
pub struct Waveform(Arc<dyn Fn(f64) -> f64 + Send + Sync>);

impl Waveform {
    /// A constant (DC) current in amperes.
    pub fn dc(amps: f64) -> Self {
        Self(Arc::new(move |_| amps))
    }

    /// A sinusoidal current: `amplitude * sin(2*pi*frequency_hz*t)`.
    pub fn sine(amplitude: f64, frequency_hz: f64) -> Self {
        Self(Arc::new(move |t| {
            amplitude * (2.0 * std::f64::consts::PI * frequency_hz * t).sin()
        }))
    }

    /// An arbitrary time -> current function.
    pub fn from_fn(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Evaluate the waveform at time `t` (seconds).
    pub fn at(&self, t: f64) -> f64 {
        (self.0)(t)
    }
}

impl fmt::Debug for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Waveform(..)")
    }
}

/// An ideal current source.
///
/// A current source never stamps into the linear system. When exactly one
/// endpoint is ground, it *forces* the other endpoint's mesh: before matrix
/// assembly the engine overwrites that mesh's current with the waveform
/// value (negated when the non-ground endpoint is `meshes[1]`, so polarity
/// follows the connection order).
///
/// A source between two non-ground meshes is an unsupported topology: its
/// effect is not represented and the engine ignores it. `validate_circuit`
/// reports this case.
#[derive(Debug, Clone)]
pub struct CurrentSource {
    pub meshes: [Mesh; 2],
    pub waveform: Waveform,
}

impl CurrentSource {
    /// Create a new current source between two endpoints.
    pub fn new(mesh1: Mesh, mesh2: Mesh, waveform: Waveform) -> Self {
        Self {
            meshes: [mesh1, mesh2],
            waveform,
        }
    }

    /// The mesh this source forces, with the sign to apply, or `None` when
    /// the source does not have exactly one grounded endpoint.
    pub fn forced_mesh(&self) -> Option<(usize, bool)> {
        match self.meshes {
            [Mesh::Loop(m), Mesh::Ground] => Some((m, false)),
            [Mesh::Ground, Mesh::Loop(m)] => Some((m, true)),
            _ => None,
        }
    }

    /// The signed current forced into the mesh at time `t`, or `None` for
    /// unsupported topologies.
    pub fn forced_current(&self, t: f64) -> Option<(usize, f64)> {
        let (mesh, negate) = self.forced_mesh()?;
        let value = self.waveform.at(t);
        Some((mesh, if negate { -value } else { value }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dc_waveform() {
        let w = Waveform::dc(2.5);
        assert_eq!(w.at(0.0), 2.5);
        assert_eq!(w.at(100.0), 2.5);
    }

    #[test]
    fn test_sine_waveform() {
        let w = Waveform::sine(1.0, 1.0);
        assert!(w.at(0.0).abs() < 1e-12);
        assert!((w.at(0.25) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_forced_mesh_polarity() {
        let fwd = CurrentSource::new(Mesh::Loop(2), Mesh::Ground, Waveform::dc(1.0));
        assert_eq!(fwd.forced_current(0.0), Some((2, 1.0)));

        let rev = CurrentSource::new(Mesh::Ground, Mesh::Loop(2), Waveform::dc(1.0));
        assert_eq!(rev.forced_current(0.0), Some((2, -1.0)));
    }

    #[test]
    fn test_free_free_source_forces_nothing() {
        let src = CurrentSource::new(Mesh::Loop(0), Mesh::Loop(1), Waveform::dc(1.0));
        assert_eq!(src.forced_mesh(), None);
        assert_eq!(src.forced_current(0.0), None);
    }

    #[test]
    fn test_ground_ground_source_forces_nothing() {
        let src = CurrentSource::new(Mesh::Ground, Mesh::Ground, Waveform::dc(1.0));
        assert_eq!(src.forced_mesh(), None);
    }
}

//! Component models for circuit simulation.
//!
//! This module provides models for the supported circuit components:
//! - Linear: Resistor, Inductor, Capacitor
//! - Sources: CurrentSource (with a [`Waveform`] drive function)
//!
//! [`Component`] is a closed enum: every dispatch over component kinds is an
//! exhaustive match, so adding a variant breaks compilation at each site
//! that must handle it.

mod linear;
mod sources;

pub use linear::{Capacitor, Inductor, Resistor};
pub use sources::{CurrentSource, Waveform};

use crate::circuit::Mesh;

/// A circuit component.
#[derive(Debug, Clone)]
pub enum Component {
    Resistor(Resistor),
    Inductor(Inductor),
    Capacitor(Capacitor),
    CurrentSource(CurrentSource),
}

impl Component {
    /// The two mesh endpoints of this component.
    pub fn meshes(&self) -> [Mesh; 2] {
        match self {
            Component::Resistor(r) => r.meshes,
            Component::Inductor(l) => l.meshes,
            Component::Capacitor(c) => c.meshes,
            Component::CurrentSource(i) => i.meshes,
        }
    }

    /// Check if this component is a current source (applied before matrix
    /// assembly rather than stamped).
    pub fn is_source(&self) -> bool {
        matches!(self, Component::CurrentSource(_))
    }
}

impl From<Resistor> for Component {
    fn from(r: Resistor) -> Self {
        Component::Resistor(r)
    }
}

impl From<Inductor> for Component {
    fn from(l: Inductor) -> Self {
        Component::Inductor(l)
    }
}

impl From<Capacitor> for Component {
    fn from(c: Capacitor) -> Self {
        Component::Capacitor(c)
    }
}

impl From<CurrentSource> for Component {
    fn from(s: CurrentSource) -> Self {
        Component::CurrentSource(s)
    }
}

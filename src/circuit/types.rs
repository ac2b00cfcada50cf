//! Core types for circuit representation.

use std::fmt;

/// One endpoint of a component: either the ground reference or a mesh.
///
/// Mesh analysis solves for the current circulating in each closed loop of
/// the circuit. Ground is the shared reference and never carries an unknown,
/// so it is a distinct variant rather than a reserved index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mesh {
    /// The ground / reference connection.
    Ground,
    /// A mesh (closed current loop), numbered from 0.
    Loop(usize),
}

impl Mesh {
    /// Check if this is the ground reference.
    pub fn is_ground(&self) -> bool {
        matches!(self, Mesh::Ground)
    }

    /// Get the mesh index, or `None` for ground.
    pub fn index(&self) -> Option<usize> {
        match self {
            Mesh::Ground => None,
            Mesh::Loop(m) => Some(*m),
        }
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mesh::Ground => write!(f, "GND"),
            Mesh::Loop(m) => write!(f, "M{}", m),
        }
    }
}

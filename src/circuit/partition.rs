//! Free/forced mesh partitioning.
//!
//! A mesh is *forced* when a current source ties it directly to ground: its
//! current is written by the source, not solved for. All other meshes are
//! *free* and become unknowns of the linear system. The partition maps each
//! free mesh to a dense row/column index and is rebuilt every step.

use super::types::Mesh;

/// Bijection between free meshes and dense system rows.
#[derive(Debug)]
pub struct MeshPartition {
    /// Per-mesh dense row, `None` for forced meshes.
    rows: Vec<Option<usize>>,
    /// Dense row -> mesh index.
    free: Vec<usize>,
}

impl MeshPartition {
    /// Build the partition for `total_meshes` meshes, excluding those marked
    /// forced.
    pub fn build(total_meshes: usize, forced: &[bool]) -> Self {
        debug_assert_eq!(forced.len(), total_meshes);
        let mut rows = vec![None; total_meshes];
        let mut free = Vec::with_capacity(total_meshes);
        for mesh in 0..total_meshes {
            if !forced[mesh] {
                rows[mesh] = Some(free.len());
                free.push(mesh);
            }
        }
        Self { rows, free }
    }

    /// Dense row for a mesh. `None` for ground and for forced meshes.
    pub fn row(&self, mesh: Mesh) -> Option<usize> {
        self.rows[mesh.index()?]
    }

    /// Number of free meshes (the dimension of the linear system).
    pub fn num_free(&self) -> usize {
        self.free.len()
    }

    /// Free mesh indices in dense row order.
    pub fn free_meshes(&self) -> &[usize] {
        &self.free
    }
}

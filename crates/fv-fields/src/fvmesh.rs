//! Mesh, time and object registry bundled together.

use std::sync::Arc;

use fv_core::RunTime;
use fv_mesh::Mesh;

use crate::registry::ObjectRegistry;

/// The finite-volume mesh as seen by discretisation code: geometry, the
/// simulation clock and the fields registered against them.
#[derive(Debug)]
pub struct FvMesh {
    geometry: Arc<Mesh>,
    time: Arc<RunTime>,
    registry: ObjectRegistry,
}

impl FvMesh {
    pub fn new(geometry: impl Into<Arc<Mesh>>, time: Arc<RunTime>) -> Self {
        Self {
            geometry: geometry.into(),
            time,
            registry: ObjectRegistry::new(),
        }
    }

    pub fn geometry(&self) -> &Arc<Mesh> {
        &self.geometry
    }

    pub fn time(&self) -> &RunTime {
        &self.time
    }

    pub fn time_handle(&self) -> &Arc<RunTime> {
        &self.time
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fv_mesh::grid;

    #[test]
    fn fv_mesh_shares_time() {
        let time = Arc::new(RunTime::from_seconds(0.1).unwrap());
        let mesh = FvMesh::new(grid(2, 2, 1.0, 1.0, 1.0).unwrap(), Arc::clone(&time));
        assert_eq!(mesh.geometry().n_cells(), 4);

        time.advance();
        assert_eq!(mesh.time().time_index(), 1);
        assert!(mesh.registry().names().is_empty());
    }
}

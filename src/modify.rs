use log::debug;
use crate::geom::{Mesh, Vector};

/// Translation that centers the mesh on the origin in X and Y and moves its lowest point to
/// `z = 0`.  `None` for an empty mesh.
pub fn center_offset(m: &Mesh) -> Option<Vector> {
    let b = m.bounds()?;
    debug!("bounding box: {:?} .. {:?}", b.min, b.max);
    let size = b.size();
    Some(Vector::new(
        -b.min.x - size.x / 2.,
        -b.min.y - size.y / 2.,
        -b.min.z,
    ))
}

pub fn translate(m: &mut Mesh, delta: Vector) {
    for p in m.points_mut() {
        *p += delta;
    }
}

pub fn center(m: &mut Mesh) {
    if let Some(delta) = center_offset(m) {
        debug!("centering delta: {:?}", delta);
        translate(m, delta);
    }
}

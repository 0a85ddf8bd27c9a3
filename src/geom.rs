//! Geometry value types: points, triangular facets, and the facet list read from an STL file.

use nalgebra::{Point3, Vector3};

pub type Point = Point3<f32>;
pub type Vector = Vector3<f32>;

/// One triangle, in the winding order given by the input file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Facet {
    pub verts: [Point; 3],
}

impl Facet {
    pub fn new(a: Point, b: Point, c: Point) -> Facet {
        Facet { verts: [a, b, c] }
    }
}

/// An ordered list of facets.  Vertices are owned per facet and never shared, so a mesh with
/// `n` facets always has `3 * n` points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub facets: Vec<Facet>,
}

impl Mesh {
    pub fn new() -> Mesh {
        Mesh::default()
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.facets.iter().flat_map(|f| f.verts.iter())
    }

    pub fn points_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.facets.iter_mut().flat_map(|f| f.verts.iter_mut())
    }

    /// Axis-aligned bounds of all vertices, or `None` if the mesh has no facets.
    pub fn bounds(&self) -> Option<BoundingBox> {
        if self.is_empty() {
            return None;
        }
        Some(self.points().fold(BoundingBox::empty(), |b, p| b.include(p)))
    }
}

impl From<Vec<Facet>> for Mesh {
    fn from(facets: Vec<Facet>) -> Mesh {
        Mesh { facets }
    }
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// The inverted box that every `include` shrinks towards real bounds.  `min > max` on all
    /// axes until at least one point has been added.
    pub fn empty() -> BoundingBox {
        BoundingBox {
            min: Point::new(f32::MAX, f32::MAX, f32::MAX),
            max: Point::new(-f32::MAX, -f32::MAX, -f32::MAX),
        }
    }

    pub fn include(self, p: &Point) -> BoundingBox {
        BoundingBox {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z)),
        }
    }

    pub fn size(&self) -> Vector {
        self.max - self.min
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tri(z: f32) -> Facet {
        Facet::new(
            Point::new(-1., 0., z),
            Point::new(3., 2., z),
            Point::new(0., 5., z + 1.),
        )
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        assert_eq!(Mesh::new().bounds(), None);
        let b = BoundingBox::empty();
        assert!(b.min.x > b.max.x);
        assert_eq!(b.min.y, f32::MAX);
        assert_eq!(b.max.z, -f32::MAX);
    }

    #[test]
    fn bounds_cover_all_facets() {
        let m = Mesh::from(vec![tri(0.), tri(-4.)]);
        let b = m.bounds().unwrap();
        assert_eq!(b.min, Point::new(-1., 0., -4.));
        assert_eq!(b.max, Point::new(3., 5., 1.));
        assert_eq!(b.size(), Vector::new(4., 5., 5.));
    }

    #[test]
    fn points_follow_facet_order() {
        let m = Mesh::from(vec![tri(0.), tri(7.)]);
        let zs = m.points().map(|p| p.z).collect::<Vec<_>>();
        assert_eq!(zs, vec![0., 0., 1., 7., 7., 8.]);
    }
}
